// ============================================================================
// MONITOR DE ESTADO DE CONEXIÓN
// ============================================================================
// Responde "¿el backend está accesible?" y avisa al resto SOLO cuando la
// respuesta cambia. Cadencia fija de 30s, sin backoff en esta capa.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Event};

use crate::config::CONFIG;
use crate::models::{ConnectionEvent, ConnectionState, NotificationKind};
use crate::services::api_client::ApiClient;
use crate::services::notification_service::notify;
use crate::state::SyncStateHandle;
use crate::utils::browser::navigator_online;
use crate::utils::events::{dispatch_json, ConnectionPayload, CONNECTION_EVENT};

#[derive(Clone)]
pub struct ConnectionMonitor {
    state: Rc<RefCell<ConnectionState>>,
    api_client: ApiClient,
    sync_state: SyncStateHandle,
    interval: Rc<RefCell<Option<Interval>>>,
    // Previene registros duplicados de los listeners de window
    monitoring_started: Rc<RefCell<bool>>,
}

impl ConnectionMonitor {
    pub fn new(api_client: ApiClient, sync_state: SyncStateHandle) -> Self {
        // Estado inicial desde navigator.onLine; el primer health check lo corrige
        let initial = navigator_online().unwrap_or(true);
        sync_state.set_connected(initial);

        Self {
            state: Rc::new(RefCell::new(ConnectionState::new(initial))),
            api_client,
            sync_state,
            interval: Rc::new(RefCell::new(None)),
            monitoring_started: Rc::new(RefCell::new(false)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    /// Registra los listeners online/offline y arranca el poll periódico.
    /// Solo puede llamarse una vez; llamadas duplicadas se ignoran.
    pub fn start(&self) {
        {
            let mut started = self.monitoring_started.borrow_mut();
            if *started {
                log::warn!("⚠️ ConnectionMonitor: start ya fue llamado, ignorando");
                return;
            }
            *started = true;
        }

        let Some(win) = window() else { return };

        // Evento "online": check inmediato en vez de esperar al poll
        let online_closure = Closure::wrap(Box::new({
            let monitor = self.clone();
            move |_event: Event| {
                log::info!("🌐 Browser online");
                monitor.handle_event(ConnectionEvent::BrowserOnline);
            }
        }) as Box<dyn FnMut(Event)>);

        // Evento "offline": desconectado inmediato, sin esperar al poll
        let offline_closure = Closure::wrap(Box::new({
            let monitor = self.clone();
            move |_event: Event| {
                log::warn!("📴 Browser offline");
                monitor.handle_event(ConnectionEvent::BrowserOffline);
            }
        }) as Box<dyn FnMut(Event)>);

        let _ = win.add_event_listener_with_callback(
            "online",
            online_closure.as_ref().unchecked_ref(),
        );
        let _ = win.add_event_listener_with_callback(
            "offline",
            offline_closure.as_ref().unchecked_ref(),
        );

        // Listeners globales de window: viven toda la vida de la app
        online_closure.forget();
        offline_closure.forget();

        // Check inicial + poll de cadencia fija
        self.spawn_check();

        let interval = Interval::new(
            CONFIG.sync_config.health_check_interval_secs * 1_000,
            {
                let monitor = self.clone();
                move || monitor.spawn_check()
            },
        );
        *self.interval.borrow_mut() = Some(interval);

        log::info!("✅ ConnectionMonitor activo: health check cada {}s",
                   CONFIG.sync_config.health_check_interval_secs);
    }

    fn spawn_check(&self) {
        let monitor = self.clone();
        spawn_local(async move {
            monitor.check_connection().await;
        });
    }

    /// Health check. Nunca propaga error: cualquier fallo (timeout incluido)
    /// degrada a desconectado.
    pub async fn check_connection(&self) {
        let event = match self.api_client.check_health().await {
            Ok(()) => ConnectionEvent::CheckSucceeded,
            Err(e) => {
                log::warn!("📡 Health check fallido: {}", e);
                ConnectionEvent::CheckFailed
            }
        };

        self.handle_event(event);
    }

    fn handle_event(&self, event: ConnectionEvent) {
        let transition = { self.state.borrow_mut().apply(event) };
        let connected = self.state.borrow().connected;

        self.sync_state.set_connected(connected);

        if transition.changed {
            log::info!("🔁 Conexión: {}", if connected { "online" } else { "offline" });
            dispatch_json(CONNECTION_EVENT, &ConnectionPayload { connected });

            // Notificación única por transición a desconectado; los polls
            // siguientes mientras sigue caído no repiten el aviso
            if !connected {
                notify(NotificationKind::Warning, "Sin conexión con el servidor");
            }
        }

        if transition.check_now {
            self.spawn_check();
        }
    }
}
