use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mutview_json::SynonymConfig;
use mutview_report::common;

#[derive(Parser)]
#[command(name = "mutview-report")]
#[command(about = "Generates a static, browsable html report of mutation-testing results.")]
#[command(styles = common::clap_styles())]
struct Cli {
    #[arg(
        short = 'd',
        long = "mutant-data-dir",
        value_name = "MUTANT_DATA_PATH",
        default_value = common::DEFAULT_JSON_DIR,
    )]
    json_path: PathBuf,
    #[arg(
        short = 'e',
        long = "export-dir",
        value_name = "REPORT_EXPORT_PATH",
        default_value = common::DEFAULT_REPORT_DIR,
    )]
    export_path: PathBuf,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match mutview_report::report(&args.json_path, &args.export_path, &SynonymConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            common::print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
