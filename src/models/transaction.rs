use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Withdraw,
}

/// Movimiento del historial de portfolio
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub coin_symbol: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub price_usd: f64,
    pub created_at: i64,
    #[serde(default)]
    pub status: Option<String>,
}
