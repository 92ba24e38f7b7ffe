use csv::Trim;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::report::Transaction;

/// Result of reading the input file. The caller decides which user-facing
/// message each variant maps to; only `Loaded` carries data.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Transaction>),
    NotFound,
    ReadError(csv::Error),
}

/// Reads the CSV at `path` into transactions, in file order. The header row
/// names the columns, so column order does not matter. The file handle is
/// dropped before returning.
pub fn load_transactions(path: &Path) -> LoadOutcome {
    let file: File = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::NotFound,
        Err(e) => return LoadOutcome::ReadError(e.into()),
    };

    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut transactions = Vec::new();

    log::debug!("Started deserialising records from {path:?}");
    for result in rdr.deserialize::<Transaction>() {
        match result {
            Ok(record) => {
                log::debug!("Deserialised record: {record:?}");
                transactions.push(record);
            }
            Err(e) => {
                // The caller reports this to the user, so only trace here
                log::debug!("Error deserialising record: {e}");
                return LoadOutcome::ReadError(e);
            }
        }
    }

    LoadOutcome::Loaded(transactions)
}
