use serde::Deserialize;
use thiserror::Error;

/// One row of the input CSV. `monto` is kept as the raw text and only
/// parsed when an aggregation needs the numeric value.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub monto: String,
    pub tipo: String,
}

/// The two transaction types the report recognises. Any other `tipo`
/// string falls outside this set and is skipped by balance and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Credito,
    Debito,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("transaction id={id}: amount '{raw}' is not a valid number")]
pub struct AmountError {
    pub id: String,
    pub raw: String,
}

impl Transaction {
    pub fn kind(&self) -> Option<TransactionKind> {
        match self.tipo.as_str() {
            "Crédito" => Some(TransactionKind::Credito),
            "Débito" => Some(TransactionKind::Debito),
            _ => None,
        }
    }

    pub fn amount(&self) -> Result<f64, AmountError> {
        self.monto.parse::<f64>().map_err(|_| AmountError {
            id: self.id.clone(),
            raw: self.monto.clone(),
        })
    }
}
