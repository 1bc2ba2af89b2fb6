use yew::prelude::*;

use crate::hooks::use_connection;

/// Indicador visible de conectividad; cambia solo cuando el monitor emite
/// un cambio de estado real.
#[function_component(ConnectionIndicator)]
pub fn connection_indicator() -> Html {
    let connected = use_connection();

    let (icon, text, class) = if connected {
        ("🟢", "Conectado", "connection-indicator online")
    } else {
        ("🔴", "Sin conexión", "connection-indicator offline")
    };

    html! {
        <div class={class}>
            <span>{icon}</span>
            <span>{text}</span>
        </div>
    }
}
