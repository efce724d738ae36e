pub mod document;
pub mod error;
pub mod indexer;
pub mod io;

pub use error::{IndexError, Result, Stage};
pub use indexer::{IndexReport, Indexer, IndexerConfig};
