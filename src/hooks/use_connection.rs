use yew::prelude::*;

use crate::hooks::use_window_event_json;
use crate::utils::browser::navigator_online;
use crate::utils::events::{ConnectionPayload, CONNECTION_EVENT};

/// Estado de conexión para la UI: el broadcast del monitor cuando existe,
/// navigator.onLine como valor inicial.
#[hook]
pub fn use_connection() -> bool {
    let payload = use_window_event_json::<ConnectionPayload>(CONNECTION_EVENT);

    match payload {
        Some(p) => p.connected,
        None => navigator_online().unwrap_or(true),
    }
}
