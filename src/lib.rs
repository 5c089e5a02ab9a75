//! ice40ktool - pre-processing helpers for iCE40 FPGA designs.
//!
//! Two independent tools live here:
//!
//! - `mkrom` turns a binary image into a Verilog module built from `SB_ROM512x8`
//!   primitives, one per 512 bytes, with the data in their `INIT_<k>` parameters.
//! - `pllcalc` searches the PLL divider space for the setting closest to a requested
//!   output clock, in both non-simple and simple feedback modes.
//!
//! ```
//! let verilog = ice40ktool::rom::encode(&[0x12, 0x34], "boot");
//! assert!(verilog.starts_with("module boot("));
//!
//! let outcome = ice40ktool::pll::search(12_000_000.0, 48_000_000.0);
//! assert!(matches!(outcome, ice40ktool::pll::SearchOutcome::NonSimpleExact(_)));
//! ```
//!
//! # Architecture
//!
//! - [`rom`] - byte image view and Verilog ROM encoder
//! - [`pll`] - divider search and report lines
//! - [`commands`] - file and argument handling behind the binary
//! - [`core`] - error type and formatting helpers

pub mod commands;
pub mod core;
pub mod pll;
pub mod rom;

pub use crate::core::{ToolError, ToolResult};
pub use pll::{PllSearcher, SearchOutcome};
pub use rom::{ByteImage, RomEncoder};
