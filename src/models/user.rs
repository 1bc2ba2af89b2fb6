use serde::{Deserialize, Serialize};

use crate::models::balance::CachedBalance;

/// Registro `user` persistido en localStorage. El backend es la fuente de
/// verdad del balance; esta copia se sobrescribe entera en cada reconcile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub balance: f64,
    #[serde(default)]
    pub balance_synced_at: Option<i64>,
}

impl User {
    pub fn cached_balance(&self) -> CachedBalance {
        CachedBalance {
            amount: self.balance,
            last_synced_at: self.balance_synced_at.unwrap_or(0),
        }
    }

    /// Sobrescritura total de la copia local (resolución por overwrite)
    pub fn apply_balance(&mut self, balance: CachedBalance) {
        self.balance = balance.amount;
        self.balance_synced_at = Some(balance.last_synced_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_balance_sobrescribe_la_copia_entera() {
        let mut user = User {
            id: "u1".to_string(),
            email: "ana@coinflow.example".to_string(),
            name: "Ana".to_string(),
            balance: 100.0,
            balance_synced_at: None,
        };

        user.apply_balance(CachedBalance {
            amount: 150.0,
            last_synced_at: 1_700_000_000,
        });

        let cached = user.cached_balance();
        assert_eq!(cached.amount, 150.0);
        assert_eq!(cached.last_synced_at, 1_700_000_000);
    }
}
