// cargo run --bin update-2025 -- --excel ./data/importacion_2025.xlsx --outdir ./data/clean

use clap::Parser;
use combustibles_etl::{
    pipeline::{run_update_2025, IMPORT_SHEET},
    utils::{errors_log_hint, init_logging},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "update-2025")]
#[command(about = "Updates the clean import CSV with the 2025 records")]
#[command(version)]
struct Args {
    /// Path to the new Excel workbook
    #[arg(long)]
    excel: PathBuf,

    /// Directory where the CSV is written (created if it does not exist)
    #[arg(long, default_value = ".")]
    outdir: PathBuf,

    /// Name of the sheet holding the import figures
    #[arg(long, default_value = IMPORT_SHEET)]
    sheet: String,

    /// Log progress to stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let arguments = Args::parse();
    init_logging(arguments.verbose);

    match run_update_2025(&arguments.excel, &arguments.sheet, &arguments.outdir) {
        Ok(out_path) => {
            println!("✅ File exported to: {}", out_path.display());
        }
        Err(e) => {
            eprintln!("❌ Update failed with error: {e:#}");
            if let Some(hint) = errors_log_hint(&e) {
                eprintln!("❌ {hint}");
            }
            std::process::exit(1);
        }
    }
}
