// Back-office calendar
// Command line entry point

use backoffice_calendar::cli::{self, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    cli::init_logging(&cli);

    log::info!("Starting back-office calendar");

    match cli::render(&cli) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
