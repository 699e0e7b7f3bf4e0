// cargo run --bin excel-to-csv -- --excel ./data/comercializacion_hidrocarburos.xlsx --outdir ./data/clean --long

use clap::Parser;
use combustibles_etl::{
    pipeline::{run_excel_to_csv, ConversionOptions, CONSUMPTION_SHEET, IMPORT_SHEET},
    utils::{errors_log_hint, init_logging},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "excel-to-csv")]
#[command(about = "Converts the historical fuel workbook into clean CSV files")]
#[command(version)]
struct Args {
    /// Path to the source Excel workbook
    #[arg(long)]
    excel: PathBuf,

    /// Output directory (created if it does not exist)
    #[arg(long, default_value = ".")]
    outdir: PathBuf,

    /// Sheet holding the import figures
    #[arg(long, default_value = IMPORT_SHEET)]
    import_sheet: String,

    /// Sheet holding the consumption figures
    #[arg(long, default_value = CONSUMPTION_SHEET)]
    consumption_sheet: String,

    /// Also write the long format table (fecha, producto, barriles, origen)
    #[arg(long)]
    long: bool,

    /// Log progress to stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let arguments = Args::parse();
    init_logging(arguments.verbose);

    let options = ConversionOptions {
        excel: arguments.excel,
        outdir: arguments.outdir,
        import_sheet: arguments.import_sheet,
        consumption_sheet: arguments.consumption_sheet,
        long_format: arguments.long,
    };

    match run_excel_to_csv(&options) {
        Ok(outputs) => {
            for path in outputs.paths() {
                println!("✅ File exported to: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("❌ Conversion failed with error: {e:#}");
            if let Some(hint) = errors_log_hint(&e) {
                eprintln!("❌ {hint}");
            }
            std::process::exit(1);
        }
    }
}
