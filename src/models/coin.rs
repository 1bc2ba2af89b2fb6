use serde::{Deserialize, Serialize};

/// Moneda listada, tal como la devuelve `GET /api/coins/public`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
}
