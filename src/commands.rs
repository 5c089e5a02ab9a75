// This module is the glue between the command line and the two generators. run_mkrom
// reads the whole input image, derives the Verilog module name from the output file name,
// encodes and writes the result in one go so a failure never leaves a half-written file.
// run_pllcalc validates both clock arguments as positive decimal integers before handing
// them to the PLL search and returns the report lines for the caller to print. Errors are
// ToolError values; nothing here prints or exits.

//! `mkrom` and `pllcalc` command implementations.

use std::fs;
use std::path::Path;

use crate::core::error::{ToolError, ToolResult};
use crate::pll::{report_lines, PllSearcher};
use crate::rom::{ByteImage, RomEncoder};

/// Usage hint shown for bad `mkrom` arguments.
pub const MKROM_USAGE: &str = "Usage should be ice40ktool mkrom <in file> <out file>";

/// Usage hint shown for bad `pllcalc` arguments.
pub const PLLCALC_USAGE: &str =
    "Usage should be ice40ktool pllcalc reference clock (number) desired clock (number)";

/// What `mkrom` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkromSummary {
    pub module_name: String,
    pub bytes_read: usize,
    pub num_banks: usize,
    pub address_width: u32,
}

/// Whether `name` is a Verilog simple identifier: `[A-Za-z_][A-Za-z0-9_$]*`.
pub fn is_verilog_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Verilog module name for an output path: the file name minus its last extension.
///
/// The result must be a simple identifier, so `rom.v` works but `boot.rom.v` does not.
pub fn module_name_for(outfile: &Path) -> ToolResult<String> {
    let stem = outfile
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            ToolError::usage(format!(
                "cannot derive a module name from '{}'. {}",
                outfile.display(),
                MKROM_USAGE
            ))
        })?;
    if !is_verilog_identifier(stem) {
        return Err(ToolError::usage(format!(
            "module name '{}' derived from '{}' is not a Verilog identifier. {}",
            stem,
            outfile.display(),
            MKROM_USAGE
        )));
    }
    Ok(stem.to_string())
}

/// Parse a clock argument in Hz. Only positive decimal integers are accepted.
pub fn parse_clock(arg_name: &str, text: &str) -> ToolResult<i64> {
    match text.trim().parse::<i64>() {
        Ok(hz) if hz > 0 => Ok(hz),
        Ok(_) => Err(ToolError::usage(format!(
            "{} must be a positive number of Hz, got '{}'. {}",
            arg_name, text, PLLCALC_USAGE
        ))),
        Err(e) => Err(ToolError::usage(format!(
            "invalid {} '{}': {}. {}",
            arg_name, text, e, PLLCALC_USAGE
        ))),
    }
}

/// Encode `infile` into a Verilog ROM module written to `outfile`.
pub fn run_mkrom(infile: &Path, outfile: &Path) -> ToolResult<MkromSummary> {
    let module_name = module_name_for(outfile)?;
    let bytes = fs::read(infile).map_err(|e| ToolError::io(infile, e))?;
    log::debug!("Read {} bytes from {}", bytes.len(), infile.display());

    let encoder = RomEncoder::new(ByteImage::new(&bytes), &module_name);
    let text = encoder.encode();
    fs::write(outfile, text).map_err(|e| ToolError::io(outfile, e))?;

    let summary = MkromSummary {
        bytes_read: bytes.len(),
        num_banks: encoder.num_banks(),
        address_width: encoder.address_width(),
        module_name,
    };
    log::info!(
        "Wrote module {} ({} banks, addr_width {}) to {}",
        summary.module_name,
        summary.num_banks,
        summary.address_width,
        outfile.display()
    );
    Ok(summary)
}

/// Search PLL dividers for `refclk` -> `desiredclk` and return the report lines.
pub fn run_pllcalc(refclk: &str, desiredclk: &str) -> ToolResult<Vec<String>> {
    let ref_hz = parse_clock("<refclk>", refclk)?;
    let desired_hz = parse_clock("<desiredclk>", desiredclk)?;
    log::info!("Searching PLL dividers for {} Hz -> {} Hz", ref_hz, desired_hz);

    let outcome = PllSearcher::new(ref_hz as f64, desired_hz as f64).search();
    Ok(report_lines(&outcome, desired_hz))
}
