use std::io::Write;
use thiserror::Error;

use crate::report::record::{AmountError, Transaction};
use crate::report::summary::{count_by_kind, final_balance, largest_transaction};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Failed writing report: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the summary report for `transactions` into `out`.
///
/// All three aggregations run before the first byte is written, so a
/// malformed amount produces no partial report.
pub fn write_report<W: Write>(out: &mut W, transactions: &[Transaction]) -> Result<(), ReportError> {
    let balance = final_balance(transactions)?;
    let (largest_id, largest_amount) = largest_transaction(transactions)?;
    let counts = count_by_kind(transactions);

    writeln!(out, "Reporte de Transacciones")?;
    writeln!(out, "---------------------------------------------")?;
    writeln!(out, "Balance Final: {balance:.2}")?;
    writeln!(
        out,
        "Transacción de Mayor Monto: ID {largest_id} - {largest_amount:.2}"
    )?;
    writeln!(
        out,
        "Conteo de Transacciones: Crédito: {} Débito: {}",
        counts.credito, counts.debito
    )?;

    Ok(())
}
