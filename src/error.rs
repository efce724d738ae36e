use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Parse,
    Transform,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Parse => "parse",
            Stage::Transform => "transform",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("read: cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse: {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("transform: top-level value must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("transform: field \"{field}\" is missing from the top-level object")]
    MissingField { field: String },

    #[error("transform: field \"{field}\" must be an array, found {found}")]
    NotASequence { field: String, found: &'static str },

    #[error("transform: element {position} is not an object (found {found})")]
    NodeNotObject { position: usize, found: &'static str },

    #[error("write: cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub fn stage(&self) -> Stage {
        match self {
            IndexError::Read { .. } => Stage::Read,
            IndexError::Parse { .. } => Stage::Parse,
            IndexError::NotAnObject { .. }
            | IndexError::MissingField { .. }
            | IndexError::NotASequence { .. }
            | IndexError::NodeNotObject { .. } => Stage::Transform,
            IndexError::Write { .. } => Stage::Write,
        }
    }
}

/// JSON type name used in error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_errors_belong_to_transform_stage() {
        let err = IndexError::NodeNotObject { position: 3, found: "number" };
        assert_eq!(err.stage(), Stage::Transform);
        assert_eq!(err.to_string(), "transform: element 3 is not an object (found number)");

        let err = IndexError::MissingField { field: "graph".to_string() };
        assert_eq!(err.stage(), Stage::Transform);
    }

    #[test]
    fn io_errors_name_their_stage_and_path() {
        let err = IndexError::Write {
            path: PathBuf::from("out/nodes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.stage(), Stage::Write);
        assert!(err.to_string().starts_with("write: "));
        assert!(err.to_string().contains("nodes.json"));
    }

    #[test]
    fn kind_names() {
        assert_eq!(kind_of(&json!(42)), "number");
        assert_eq!(kind_of(&json!([1])), "array");
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!({})), "object");
    }
}
