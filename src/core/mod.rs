// This module collects the infrastructure shared by both generators: the ToolError type
// returned by the command layer and the pure formatting helpers used for hex words in the
// ROM encoder and %g-style frequencies in the PLL report.

//! Shared infrastructure.

pub mod error;
pub mod format;

pub use error::{ToolError, ToolResult};
pub use format::{format_general, hex_word};
