//! gofuncctx CLI entry point.

use clap::error::ErrorKind;
use clap::Parser;
use gofuncctx::cli::{self, Cli, EXIT_ERROR, EXIT_SUCCESS};
use gofuncctx::ExtractError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            let usage = ExtractError::Usage(e.render().to_string().trim_end().to_string());
            eprintln!("{}", usage);
            std::process::exit(EXIT_ERROR);
        }
    };

    cli::init_logging(cli.verbose);

    let exit_code = match cli::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
