// ============================================================================
// ESTADO DE CONEXIÓN Y BACKOFF DE SINCRONIZACIÓN
// ============================================================================
// Lógica pura, sin acceso al DOM: los services la ejecutan y aplican los
// efectos (notificaciones, broadcast, reinicio de timers) solo cuando la
// transición lo indica.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Umbral de fallos consecutivos a partir del cual se estira el intervalo
pub const FAILURE_BACKOFF_THRESHOLD: u32 = 5;
/// Tope del intervalo de poll tras backoff (5 minutos)
pub const MAX_POLL_DELAY_MS: u32 = 300_000;

/// Estado de la conexión con el backend
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub connected: bool,
    pub reconnect_attempts: u32,
}

/// Entradas de la tabla de transiciones del monitor
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConnectionEvent {
    CheckSucceeded,
    CheckFailed,
    BrowserOnline,
    BrowserOffline,
}

/// Resultado de aplicar un evento al estado de conexión
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionTransition {
    /// El estado cambió: hay que actualizar indicador y emitir broadcast
    pub changed: bool,
    /// Hay que lanzar un health check inmediato (evento `online` del browser)
    pub check_now: bool,
}

impl ConnectionState {
    pub fn new(connected: bool) -> Self {
        Self {
            connected,
            reconnect_attempts: 0,
        }
    }

    /// Aplica un evento y devuelve qué efectos corresponden.
    /// `offline` fuerza desconectado sin esperar al siguiente poll;
    /// `online` no asume conexión: pide un check inmediato.
    pub fn apply(&mut self, event: ConnectionEvent) -> ConnectionTransition {
        match event {
            ConnectionEvent::CheckSucceeded => {
                let changed = !self.connected;
                self.connected = true;
                self.reconnect_attempts = 0;
                ConnectionTransition { changed, check_now: false }
            }
            ConnectionEvent::CheckFailed => {
                let changed = self.connected;
                self.connected = false;
                self.reconnect_attempts = self.reconnect_attempts.saturating_add(1);
                ConnectionTransition { changed, check_now: false }
            }
            ConnectionEvent::BrowserOnline => ConnectionTransition {
                changed: false,
                check_now: true,
            },
            ConnectionEvent::BrowserOffline => {
                let changed = self.connected;
                self.connected = false;
                ConnectionTransition { changed, check_now: false }
            }
        }
    }
}

/// Estado de fallos del reconciliador: gobierna el backoff de la frecuencia
/// de poll (no reintentos por petición)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncFailureState {
    pub consecutive_failures: u32,
    pub current_delay_ms: u32,
    base_delay_ms: u32,
}

impl SyncFailureState {
    pub fn new(base_delay_ms: u32) -> Self {
        Self {
            consecutive_failures: 0,
            current_delay_ms: base_delay_ms,
            base_delay_ms,
        }
    }

    /// Registra un fallo. Devuelve `true` si el intervalo cambió y hay que
    /// reiniciar el timer con el nuevo delay.
    pub fn record_failure(&mut self) -> bool {
        self.consecutive_failures += 1;

        if self.consecutive_failures >= FAILURE_BACKOFF_THRESHOLD {
            let doubled = self.current_delay_ms.saturating_mul(2).min(MAX_POLL_DELAY_MS);
            if doubled != self.current_delay_ms {
                self.current_delay_ms = doubled;
                return true;
            }
        }

        false
    }

    /// Registra un éxito: el primer éxito tras fallos restaura el delay base.
    /// Devuelve `true` si el intervalo cambió.
    pub fn record_success(&mut self) -> bool {
        self.consecutive_failures = 0;

        if self.current_delay_ms != self.base_delay_ms {
            self.current_delay_ms = self.base_delay_ms;
            return true;
        }

        false
    }
}

/// Estado de sincronización que muestra el indicador de la UI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SyncStatus {
    Synced { last_sync: Option<i64> },
    Offline { pending_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_exitoso_solo_notifica_en_transicion() {
        let mut state = ConnectionState::new(false);

        let t = state.apply(ConnectionEvent::CheckSucceeded);
        assert!(t.changed);
        assert!(state.connected);
        assert_eq!(state.reconnect_attempts, 0);

        // Estado estable: sin cambio, sin efectos
        let t = state.apply(ConnectionEvent::CheckSucceeded);
        assert!(!t.changed);
    }

    #[test]
    fn check_fallido_acumula_intentos() {
        let mut state = ConnectionState::new(true);

        let t = state.apply(ConnectionEvent::CheckFailed);
        assert!(t.changed);
        assert!(!state.connected);

        let t = state.apply(ConnectionEvent::CheckFailed);
        assert!(!t.changed);
        assert_eq!(state.reconnect_attempts, 2);
    }

    #[test]
    fn evento_offline_fuerza_desconexion_inmediata() {
        let mut state = ConnectionState::new(true);

        let t = state.apply(ConnectionEvent::BrowserOffline);
        assert!(t.changed);
        assert!(!t.check_now);
        assert!(!state.connected);
    }

    #[test]
    fn evento_online_pide_check_inmediato_sin_asumir_conexion() {
        let mut state = ConnectionState::new(false);

        let t = state.apply(ConnectionEvent::BrowserOnline);
        assert!(t.check_now);
        assert!(!t.changed);
        assert!(!state.connected);
    }

    #[test]
    fn backoff_dobla_el_delay_a_partir_del_quinto_fallo() {
        let mut failure = SyncFailureState::new(5_000);

        for _ in 0..4 {
            assert!(!failure.record_failure());
            assert_eq!(failure.current_delay_ms, 5_000);
        }

        assert!(failure.record_failure());
        assert_eq!(failure.current_delay_ms, 10_000);

        assert!(failure.record_failure());
        assert_eq!(failure.current_delay_ms, 20_000);
    }

    #[test]
    fn backoff_respeta_el_tope_de_cinco_minutos() {
        let mut failure = SyncFailureState::new(5_000);

        for _ in 0..20 {
            failure.record_failure();
        }

        assert_eq!(failure.current_delay_ms, MAX_POLL_DELAY_MS);
        // En el tope, un fallo más ya no cambia el intervalo
        assert!(!failure.record_failure());
    }

    #[test]
    fn un_exito_restaura_el_delay_base() {
        let mut failure = SyncFailureState::new(5_000);

        for _ in 0..6 {
            failure.record_failure();
        }
        assert!(failure.current_delay_ms > 5_000);

        assert!(failure.record_success());
        assert_eq!(failure.current_delay_ms, 5_000);
        assert_eq!(failure.consecutive_failures, 0);

        // Sin fallos previos el éxito no toca el timer
        assert!(!failure.record_success());
    }
}
