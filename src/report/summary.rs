use crate::report::record::{AmountError, Transaction, TransactionKind};

/// Per-type transaction counts. The set of counted types is closed:
/// anything that is not Crédito or Débito is counted nowhere.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeCounts {
    pub credito: usize,
    pub debito: usize,
}

/// Signed total: credits added, debits subtracted, other types ignored.
/// Every amount is parsed, counted or not, so one malformed row fails the
/// whole calculation.
pub fn final_balance(transactions: &[Transaction]) -> Result<f64, AmountError> {
    let mut balance = 0.0;
    for tx in transactions {
        let amount = tx.amount()?;
        match tx.kind() {
            Some(TransactionKind::Credito) => balance += amount,
            Some(TransactionKind::Debito) => balance -= amount,
            None => {}
        }
    }
    Ok(balance)
}

/// Id and amount of the largest transaction, ties resolved to the first
/// occurrence in file order. Every row participates, whatever its type.
/// An empty input returns the ("", 0.0) sentinel.
pub fn largest_transaction(transactions: &[Transaction]) -> Result<(String, f64), AmountError> {
    let mut largest: Option<(&str, f64)> = None;
    for tx in transactions {
        let amount = tx.amount()?;
        match largest {
            Some((_, max)) if amount <= max => {}
            _ => largest = Some((&tx.id, amount)),
        }
    }
    Ok(largest
        .map(|(id, amount)| (id.to_owned(), amount))
        .unwrap_or_default())
}

pub fn count_by_kind(transactions: &[Transaction]) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for tx in transactions {
        match tx.kind() {
            Some(TransactionKind::Credito) => counts.credito += 1,
            Some(TransactionKind::Debito) => counts.debito += 1,
            None => {}
        }
    }
    counts
}
