//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod fetch;
pub mod models;
pub mod transform;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, validate_export_args};
pub use fetch::{execute_fetch, validate_fetch_args};
pub use models::{ExportArgs, FetchArgs, InputSource, TransformArgs, TransformKind};
pub use transform::{apply_transform, execute_transform, validate_transform_args};
pub use utils::{display_color, display_format, display_palette};
