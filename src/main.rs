use anyhow::Result;
use reporte_transacciones::report::{LoadOutcome, load_transactions, write_report};
use simple_logger::SimpleLogger;
use std::path::Path;

// Fixed input filename, read from the current working directory.
const INPUT_FILE: &str = "data.csv";

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    log::debug!("Loading transactions from '{INPUT_FILE}': Starting");
    match load_transactions(Path::new(INPUT_FILE)) {
        LoadOutcome::NotFound => {
            println!("Error: No se encontró el archivo '{INPUT_FILE}'");
        }
        LoadOutcome::ReadError(e) => {
            println!("Error al leer el archivo: {e}");
        }
        LoadOutcome::Loaded(transactions) => {
            log::debug!("Loaded {} transactions", transactions.len());
            if transactions.is_empty() {
                log::debug!("No transactions to report");
            } else {
                log::debug!("Writing report to stdout: Starting");
                write_report(&mut std::io::stdout(), &transactions)?;
                log::debug!("Writing report to stdout: Done");
            }
        }
    }

    log::debug!("Application finished");

    Ok(())
}
