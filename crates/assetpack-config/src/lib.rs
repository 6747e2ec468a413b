pub mod chain;
pub mod compose;
pub mod error;
pub mod layout;
pub mod mode;
pub mod optimization;
pub mod output;
pub mod plugin;
pub mod routing;
pub mod settings;
pub mod validation;

// Re-export main types
pub use chain::*;
pub use compose::*;
pub use error::*;
pub use layout::ProjectLayout;
pub use mode::*;
pub use optimization::*;
pub use output::*;
pub use plugin::*;
pub use routing::*;
pub use settings::*;

// Re-export validation
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
