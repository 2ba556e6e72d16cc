pub mod batch;
pub mod error;
pub mod files;
pub mod frequency;
pub mod matcher;
pub mod presets;
pub mod snippets;
pub mod stats;
pub mod summarizer;

// Re-export main types for convenient access
pub use error::{Error, Result};

// Re-export the core operations as a flat functional interface
pub use batch::process_lines;
pub use frequency::{count, count_parallel};
pub use matcher::{find_all, replace_all};
pub use snippets::SnippetList;
pub use summarizer::summarize;
