use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;
use crate::document::{assign_indices, extract_nodes};
use crate::error::Result;
use crate::io::{read_document, write_nodes};

pub const DEFAULT_FIELD: &str = "graph";
pub const DEFAULT_INDEX_KEY: &str = "index";

/// Where the node list lives and which key receives the position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    pub field: String,
    pub index_key: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            index_key: DEFAULT_INDEX_KEY.to_string(),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexReport {
    pub nodes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Indexer {
    config: IndexerConfig,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexerConfig) -> Self {
        Self { config }
    }

    pub fn field(mut self, field: &str) -> Self {
        self.config.field = field.to_string();
        self
    }

    pub fn index_key(mut self, key: &str) -> Self {
        self.config.index_key = key.to_string();
        self
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Extract the node list from `document` and number it.
    pub fn index_document(&self, document: Value) -> Result<Vec<Value>> {
        let nodes = extract_nodes(document, &self.config.field)?;
        assign_indices(nodes, &self.config.index_key)
    }

    /// Read `input`, index its nodes and write the array to `output`.
    ///
    /// Nothing is written unless every earlier stage succeeded.
    pub fn run(&self, input: &Path, output: &Path) -> Result<IndexReport> {
        info!("Loading document from: {}", input.display());
        let document = read_document(input)?;

        let nodes = self.index_document(document)?;
        info!("Indexed {} node(s) from \"{}\"", nodes.len(), self.config.field);

        write_nodes(output, &nodes)?;
        info!("Wrote {}", output.display());

        Ok(IndexReport { nodes: nodes.len() })
    }
}
