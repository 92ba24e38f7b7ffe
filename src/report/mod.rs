mod loader;
mod output;
mod record;
mod summary;

pub use loader::{LoadOutcome, load_transactions};
pub use output::{ReportError, write_report};
pub use record::{AmountError, Transaction, TransactionKind};
pub use summary::{TypeCounts, count_by_kind, final_balance, largest_transaction};
