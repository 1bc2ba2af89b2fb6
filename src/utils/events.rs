// ============================================================================
// EVENTOS CUSTOM IN-PAGE
// ============================================================================
// Los componentes de sincronización se comunican entre sí y con la UI por
// CustomEvents en window, con el detail serializado como JSON. Acoplamiento
// débil: quien emite no conoce a quien escucha.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit};

/// Broadcast de cambio de conectividad, detail `{"connected": bool}`
pub const CONNECTION_EVENT: &str = "coinflow:connection";
/// Republicación del balance, detail `{"balance": f64}`
pub const BALANCE_EVENT: &str = "coinflow:balance";
/// Republicación de precios, detail `Vec<Coin>`
pub const PRICES_EVENT: &str = "coinflow:prices";
/// Republicación del historial, detail `Vec<Transaction>`
pub const TRANSACTIONS_EVENT: &str = "coinflow:transactions";
/// Notificación para el toast, detail `Notification`
pub const NOTIFICATION_EVENT: &str = "coinflow:notification";
/// Pasada de sincronización completada, detail `{"timestamp": i64}`
pub const SYNCED_EVENT: &str = "coinflow:synced";
/// Sesión cerrada (401): lo consume el router, sin detail
pub const LOGOUT_EVENT: &str = "coinflow:logout";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConnectionPayload {
    pub connected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BalancePayload {
    pub balance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SyncedPayload {
    pub timestamp: i64,
}

/// Emite un CustomEvent en window con detail JSON
pub fn dispatch_json<T: Serialize>(name: &str, payload: &T) {
    let Some(win) = window() else { return };

    let json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("❌ Error serializando detail de {}: {}", name, e);
            return;
        }
    };

    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&json));

    if let Ok(event) = CustomEvent::new_with_event_init_dict(name, &init) {
        let _ = win.dispatch_event(&event);
    }
}

/// Emite un evento sin payload
pub fn dispatch_simple(name: &str) {
    let Some(win) = window() else { return };

    if let Ok(event) = web_sys::Event::new(name) {
        let _ = win.dispatch_event(&event);
    }
}

/// Lee el detail JSON de un CustomEvent recibido
pub fn parse_detail<T: DeserializeOwned>(event: &web_sys::Event) -> Option<T> {
    let custom = event.dyn_ref::<CustomEvent>()?;
    let json = custom.detail().as_string()?;
    serde_json::from_str(&json).ok()
}
