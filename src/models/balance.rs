use serde::{Deserialize, Serialize};

/// Diferencias por debajo de este umbral se tratan como iguales
/// (evita notificaciones por ruido de coma flotante)
pub const BALANCE_EPSILON: f64 = 0.01;

/// Copia local del balance autoritativo, persistida dentro del registro `user`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CachedBalance {
    pub amount: f64,
    pub last_synced_at: i64,
}

/// Resultado de comparar el balance cacheado con el del backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReconcileOutcome {
    /// Dentro del epsilon: sin escritura de cache y sin notificación
    InSync,
    /// Diferencia real: sobrescribir cache y notificar el delta con signo
    Drift { delta: f64 },
}

/// Compara balance local vs remoto con tolerancia epsilon
pub fn compare_balances(local: f64, remote: f64) -> ReconcileOutcome {
    if (local - remote).abs() <= BALANCE_EPSILON {
        ReconcileOutcome::InSync
    } else {
        ReconcileOutcome::Drift {
            delta: remote - local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruido_flotante_no_genera_drift() {
        assert_eq!(compare_balances(100.0, 100.005), ReconcileOutcome::InSync);
        assert_eq!(compare_balances(100.0, 99.995), ReconcileOutcome::InSync);
        assert_eq!(compare_balances(100.0, 100.01), ReconcileOutcome::InSync);
    }

    #[test]
    fn diferencia_real_devuelve_delta_con_signo() {
        match compare_balances(100.0, 150.0) {
            ReconcileOutcome::Drift { delta } => assert_eq!(delta, 50.0),
            other => panic!("se esperaba drift, se obtuvo {:?}", other),
        }

        match compare_balances(100.0, 80.0) {
            ReconcileOutcome::Drift { delta } => assert_eq!(delta, -20.0),
            other => panic!("se esperaba drift, se obtuvo {:?}", other),
        }
    }
}
