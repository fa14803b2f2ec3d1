pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod options;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use context::*;
pub use error::*;
pub use mode::*;
pub use options::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
