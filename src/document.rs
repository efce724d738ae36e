use serde_json::Value;
use tracing::debug;
use crate::error::{IndexError, Result, kind_of};

/// Pull the node list out of the input document.
///
/// Only `field` is read; every other top-level key is dropped.
pub fn extract_nodes(document: Value, field: &str) -> Result<Vec<Value>> {
    let mut object = match document {
        Value::Object(map) => map,
        other => return Err(IndexError::NotAnObject { found: kind_of(&other) }),
    };

    let nodes = object
        .remove(field)
        .ok_or_else(|| IndexError::MissingField { field: field.to_string() })?;

    if !object.is_empty() {
        debug!("Ignoring {} top-level key(s) besides \"{}\"", object.len(), field);
    }

    match nodes {
        Value::Array(nodes) => Ok(nodes),
        other => Err(IndexError::NotASequence {
            field: field.to_string(),
            found: kind_of(&other),
        }),
    }
}

/// Set `key` on every node to its zero-based position.
///
/// An existing `key` is overwritten in place, keeping its slot in the key order.
pub fn assign_indices(nodes: Vec<Value>, key: &str) -> Result<Vec<Value>> {
    let mut indexed = Vec::with_capacity(nodes.len());

    for (position, mut node) in nodes.into_iter().enumerate() {
        let Some(object) = node.as_object_mut() else {
            return Err(IndexError::NodeNotObject { position, found: kind_of(&node) });
        };
        if object.insert(key.to_string(), Value::from(position)).is_some() {
            debug!("Node {} already carried \"{}\", overwritten", position, key);
        }
        indexed.push(node);
    }

    Ok(indexed)
}
