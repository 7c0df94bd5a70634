//! # oxcalc
//!
//! Recalculates electron microprobe oxide analyses into structural formulas.
//!
//! ```bash
//! # cations per 4 oxygens from the El-Ox sheet
//! oxcalc recalc analyses.xlsx --oxygens 4
//!
//! # same thing, basis taken from the mineral catalog, as CSV
//! oxcalc recalc analyses.xlsx --oxygens olivine --format csv -o olivine.csv
//! ```

mod output;
mod workbook;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use oxcalc::{OxideSheet, TargetOxygen, recalculate};
use output::{OutputFormat, Report};

/// Structural formula recalculation from oxide weight percent
#[derive(Parser)]
#[command(name = "oxcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recalculate the El-Ox sheet of a workbook
    Recalc {
        /// Input workbook (xlsx, xls, xlsb or ods)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Oxygen basis: a positive integer or a mineral name (see `minerals`)
        #[arg(short = 'x', long, value_name = "N|MINERAL")]
        oxygens: TargetOxygen,

        /// Sheet holding the Weight%/Oxide blocks
        #[arg(short, long, default_value = workbook::ELOX_SHEET)]
        sheet: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Decimal places for table and CSV output
        #[arg(short, long, default_value = "4")]
        precision: usize,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the oxygen basis of catalogued minerals
    Minerals,

    /// List element symbols and atomic weights
    Elements,
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("failed to create {}", p.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Recalc {
            input,
            oxygens,
            sheet,
            format,
            precision,
            output: out_path,
        } => {
            info!("recalculating {} on {oxygens} oxygens", input.display());
            let grid = workbook::read_sheet(&input, &sheet)?;
            let layout = OxideSheet::from_grid(&grid.cells)
                .with_context(|| format!("unexpected layout in sheet '{sheet}'"))?;
            let result = recalculate(&layout.oxides, oxygens)
                .with_context(|| format!("cannot recalculate {}", input.display()))?;
            let report = Report {
                first_row: grid.first_row,
                weights: &layout.weights,
                result: &result,
            };

            let mut out = open_output(out_path.as_ref())?;
            output::write(&mut *out, &report, format, precision)?;
            out.flush()?;

            if let Some(path) = out_path {
                info!("wrote {}", path.display());
            }
        }
        Commands::Minerals => {
            let mut out = io::stdout().lock();
            for m in oxcalc::minerals::minerals() {
                writeln!(out, "{:<18} {:>3}  {}", m.name, m.oxygens, m.formula)?;
            }
        }
        Commands::Elements => output::write_elements(&mut io::stdout().lock())?,
    }

    Ok(())
}
