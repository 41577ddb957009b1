pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod repl;
pub mod schema;
pub mod transcript;
pub mod types;
pub mod warehouse;

// Re-export commonly used types
pub use config::Config;
pub use repl::launch;
