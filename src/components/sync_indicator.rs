use yew::prelude::*;

use crate::hooks::{use_connection, use_window_event_json};
use crate::models::SyncStatus;
use crate::services::SyncServices;
use crate::utils::events::{SyncedPayload, SYNCED_EVENT};
use crate::utils::storage::{load_from_storage, KEY_LAST_SYNC};

fn format_sync_time(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "—".to_string(),
    }
}

#[function_component(SyncIndicator)]
pub fn sync_indicator() -> Html {
    let connected = use_connection();
    let synced = use_window_event_json::<SyncedPayload>(SYNCED_EVENT);
    let services = use_context::<SyncServices>();

    // Último sync: el evento cuando llega, si no el estado compartido,
    // si no lo persistido (lo que el UI lee al cargar la página)
    let last_sync = synced
        .map(|p| p.timestamp)
        .or_else(|| services.as_ref().and_then(|s| s.sync_state.last_sync()))
        .or_else(|| load_from_storage::<i64>(KEY_LAST_SYNC));

    let status = if connected {
        SyncStatus::Synced { last_sync }
    } else {
        let pending = services
            .as_ref()
            .map(|s| s.offline_queue.pending_count())
            .unwrap_or(0);
        SyncStatus::Offline { pending_count: pending }
    };

    let (icon, text) = match status {
        SyncStatus::Synced { last_sync: Some(ts) } => {
            ("🔄", format!("Última sync: {}", format_sync_time(ts)))
        }
        SyncStatus::Synced { last_sync: None } => ("🔄", "Sin sincronizar".to_string()),
        SyncStatus::Offline { pending_count: 0 } => ("📴", "Offline".to_string()),
        SyncStatus::Offline { pending_count } => {
            ("📴", format!("Offline - {} pendientes", pending_count))
        }
    };

    let onclick = Callback::from(move |_| {
        if let Some(services) = &services {
            services.data_synchronizer.trigger_now();
        }
    });

    html! {
        <div class="sync-indicator" {onclick} title="Click para sincronizar ahora">
            <span>{icon}</span>
            <span>{text}</span>
        </div>
    }
}
