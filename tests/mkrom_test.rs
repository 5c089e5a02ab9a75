//! End-to-end tests for the `mkrom` command.
//!
//! These write real input files to a scratch directory, run the command, and inspect the
//! generated Verilog text.

use std::fs;

use ice40ktool::commands::{run_mkrom, MkromSummary};
use ice40ktool::rom::BANK_SIZE;
use tempfile::tempdir;

const ZERO_BLOCK: &str = "0000000000000000000000000000000000000000000000000000000000000000";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pull the hex payload out of every `.INIT_<k>(256'h...)` line, in file order.
fn init_fields(verilog: &str) -> Vec<String> {
    verilog
        .lines()
        .filter(|line| line.starts_with(".INIT_"))
        .map(|line| {
            let start = line.find("256'h").expect("INIT line without literal") + 5;
            let end = line[start..].find(')').expect("unterminated INIT literal") + start;
            line[start..end].to_string()
        })
        .collect()
}

/// Decode INIT literals back into bytes, first digit pair first.
fn decode_fields(fields: &[String]) -> Vec<u8> {
    fields
        .iter()
        .flat_map(|hex| {
            (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("bad hex digit"))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn test_600_zero_bytes_make_two_banks() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("zeros.bin");
    let outfile = dir.path().join("zeros.v");
    fs::write(&infile, vec![0u8; 600]).unwrap();

    let summary = run_mkrom(&infile, &outfile).unwrap();
    assert_eq!(
        summary,
        MkromSummary {
            module_name: "zeros".to_string(),
            bytes_read: 600,
            num_banks: 2,
            address_width: 9,
        }
    );

    let verilog = fs::read_to_string(&outfile).unwrap();
    assert!(verilog.starts_with("module zeros(\n"));
    assert!(verilog.contains("\tparameter addr_width = 9;\n"));
    assert_eq!(verilog.matches("SB_ROM512x8 #(").count(), 2);

    let fields = init_fields(&verilog);
    assert_eq!(fields.len(), 32);
    assert!(fields.iter().all(|field| field == ZERO_BLOCK));
}

#[test]
fn test_empty_image_has_no_primitives() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("empty.bin");
    let outfile = dir.path().join("empty.v");
    fs::write(&infile, b"").unwrap();

    let summary = run_mkrom(&infile, &outfile).unwrap();
    assert_eq!(summary.num_banks, 0);
    assert_eq!(summary.address_width, 8);

    let verilog = fs::read_to_string(&outfile).unwrap();
    assert!(!verilog.contains("SB_ROM512x8"));
    assert!(verilog.contains("\tparameter addr_width = 8;\n"));
    assert!(!verilog.contains("dout_rom"));
    assert!(verilog.contains("\tdout <= 8'h00;\n"));
    assert!(verilog.ends_with("endmodule\n"));
}

#[test]
fn test_init_fields_round_trip_to_image() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("pattern.bin");
    let outfile = dir.path().join("pattern.v");

    let data: Vec<u8> = (0..1300u32).map(|i| (i.wrapping_mul(37) ^ (i >> 3)) as u8).collect();
    fs::write(&infile, &data).unwrap();

    let summary = run_mkrom(&infile, &outfile).unwrap();
    assert_eq!(summary.num_banks, 3);
    assert_eq!(summary.address_width, 9);

    let verilog = fs::read_to_string(&outfile).unwrap();
    let decoded = decode_fields(&init_fields(&verilog));
    assert_eq!(decoded.len(), 3 * BANK_SIZE);
    assert_eq!(&decoded[..data.len()], &data[..]);
    assert!(decoded[data.len()..].iter().all(|&b| b == 0));
}

#[test]
fn test_module_name_comes_from_file_stem() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("font.bin");
    let outfile = dir.path().join("font_rom.v");
    fs::write(&infile, [0xFFu8; 4]).unwrap();

    let summary = run_mkrom(&infile, &outfile).unwrap();
    assert_eq!(summary.module_name, "font_rom");

    let verilog = fs::read_to_string(&outfile).unwrap();
    assert!(verilog.starts_with("module font_rom(\n"));
    assert!(verilog.contains(".INIT_0(256'hFFFFFFFF00000000"));
}

#[test]
fn test_non_identifier_module_name_writes_nothing() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("font.bin");
    let outfile = dir.path().join("font.rom.v");
    fs::write(&infile, [0xFFu8; 4]).unwrap();

    let err = run_mkrom(&infile, &outfile).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("font.rom"));
    assert!(!outfile.exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("missing.bin");
    let outfile = dir.path().join("missing.v");

    let err = run_mkrom(&infile, &outfile).unwrap_err();
    assert!(!err.is_usage());
    assert!(err.to_string().contains("missing.bin"));
    assert!(!outfile.exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    init_logging();
    let dir = tempdir().unwrap();
    let infile = dir.path().join("data.bin");
    let outfile = dir.path().join("no_such_dir").join("data.v");
    fs::write(&infile, [1u8, 2, 3]).unwrap();

    let err = run_mkrom(&infile, &outfile).unwrap_err();
    assert!(!err.is_usage());
    assert!(err.to_string().contains("data.v"));
}
