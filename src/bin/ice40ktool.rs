//! iCE40K Tools command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ice40ktool::commands;

#[derive(Parser)]
#[command(name = "ice40ktool")]
#[command(version, about = "iCE40K Tools.\nGeneric tool for pre-processing stuff for the iCE40K system")]
struct Cli {
    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find PLL divider settings for a desired output clock
    Pllcalc {
        /// Reference clock in Hz
        refclk: String,
        /// Desired output clock in Hz
        desiredclk: String,
    },

    /// Build a Verilog SB_ROM512x8 module from a binary image
    Mkrom {
        /// Binary image to embed
        infile: PathBuf,
        /// Verilog file to write; its name without extension becomes the module name
        outfile: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Mkrom { infile, outfile } => commands::run_mkrom(&infile, &outfile).map(|_| ()),
        Command::Pllcalc { refclk, desiredclk } => {
            commands::run_pllcalc(&refclk, &desiredclk).map(|lines| {
                for line in lines {
                    println!("{}", line);
                }
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
