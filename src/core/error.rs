// This module defines the error type shared by the ice40ktool commands, using thiserror
// the same way the rest of the crate's ambient stack does. ToolError separates usage
// problems (malformed clock arguments, output names that cannot become a Verilog module
// name) from I/O failures on the input or output file. The encoder and the PLL search are
// pure and never produce errors themselves; only the command layer that feeds them does.

//! Error types for ice40ktool commands.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the command layer.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{message}")]
    Usage {
        message: String,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ToolError {
    pub fn usage(message: impl Into<String>) -> Self {
        ToolError::Usage {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToolError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from bad arguments rather than the environment.
    pub fn is_usage(&self) -> bool {
        matches!(self, ToolError::Usage { .. })
    }
}

/// Result type alias for command operations.
pub type ToolResult<T> = Result<T, ToolError>;
