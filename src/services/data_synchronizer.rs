// ============================================================================
// SINCRONIZADOR DE DATOS
// ============================================================================
// Refresco periódico de balance, precios e historial, más el buffering de
// escrituras offline. Una pasada en curso hace que cualquier trigger nuevo
// se descarte (no se difiere).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Event};

use crate::config::CONFIG;
use crate::models::{NotificationKind, QueuedWrite};
use crate::services::api_client::ApiClient;
use crate::services::notification_service::notify;
use crate::services::offline_queue::OfflineQueueService;
use crate::services::session;
use crate::state::SyncStateHandle;
use crate::utils::events::{
    dispatch_json, parse_detail, BalancePayload, ConnectionPayload, SyncedPayload,
    BALANCE_EVENT, CONNECTION_EVENT, PRICES_EVENT, SYNCED_EVENT, TRANSACTIONS_EVENT,
};
use crate::utils::storage::{save_to_storage, KEY_COIN_PRICES, KEY_LAST_SYNC};

/// Pequeña espera tras recuperar conexión antes de resincronizar,
/// para dejar que la red se asiente
const RESYNC_SETTLE_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
pub struct DataSynchronizer {
    api_client: ApiClient,
    offline_queue: OfflineQueueService,
    sync_state: SyncStateHandle,
    sync_in_progress: Rc<RefCell<bool>>,
    interval: Rc<RefCell<Option<Interval>>>,
    listeners_started: Rc<RefCell<bool>>,
}

impl DataSynchronizer {
    pub fn new(
        api_client: ApiClient,
        offline_queue: OfflineQueueService,
        sync_state: SyncStateHandle,
    ) -> Self {
        Self {
            api_client,
            offline_queue,
            sync_state,
            sync_in_progress: Rc::new(RefCell::new(false)),
            interval: Rc::new(RefCell::new(None)),
            listeners_started: Rc::new(RefCell::new(false)),
        }
    }

    /// Registra triggers y arranca el timer si hay conexión
    pub fn start(&self) {
        {
            let mut started = self.listeners_started.borrow_mut();
            if *started {
                log::warn!("⚠️ DataSynchronizer: start ya fue llamado, ignorando");
                return;
            }
            *started = true;
        }

        let Some(win) = window() else { return };

        // Volvió la conexión del browser → resync inmediato (con settle delay)
        let online_closure = Closure::wrap(Box::new({
            let synchronizer = self.clone();
            move |_event: Event| {
                synchronizer.schedule_resync();
            }
        }) as Box<dyn FnMut(Event)>);

        // El browser quedó offline → parar el timer
        let offline_closure = Closure::wrap(Box::new({
            let synchronizer = self.clone();
            move |_event: Event| {
                synchronizer.stop_interval();
            }
        }) as Box<dyn FnMut(Event)>);

        // Broadcast del ConnectionMonitor → arrancar/parar + resync
        let connection_closure = Closure::wrap(Box::new({
            let synchronizer = self.clone();
            move |event: Event| {
                let Some(payload) = parse_detail::<ConnectionPayload>(&event) else {
                    return;
                };

                if payload.connected {
                    log::info!("🌐 Conectividad restaurada: resync inmediato");
                    synchronizer.start_interval();
                    synchronizer.schedule_resync();
                } else {
                    synchronizer.stop_interval();
                }
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
        let _ = win.add_event_listener_with_callback(
            CONNECTION_EVENT,
            connection_closure.as_ref().unchecked_ref(),
        );

        // Listeners globales de window: viven toda la vida de la app
        online_closure.forget();
        offline_closure.forget();
        connection_closure.forget();

        if self.sync_state.connected() {
            self.start_interval();
            self.trigger_now();
        }

        log::info!("🚀 DataSynchronizer activo");
    }

    fn start_interval(&self) {
        let interval = Interval::new(
            CONFIG.sync_config.data_sync_interval_secs * 1_000,
            {
                let synchronizer = self.clone();
                move || synchronizer.trigger_now()
            },
        );
        *self.interval.borrow_mut() = Some(interval);
    }

    fn stop_interval(&self) {
        if self.interval.borrow_mut().take().is_some() {
            log::info!("📴 Timer de sincronización detenido");
        }
    }

    /// Dispara una pasada ya (sin settle delay)
    pub fn trigger_now(&self) {
        let synchronizer = self.clone();
        spawn_local(async move {
            synchronizer.run_sync().await;
        });
    }

    fn schedule_resync(&self) {
        let synchronizer = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(RESYNC_SETTLE_DELAY_MS).await;
            synchronizer.run_sync().await;
        });
    }

    async fn run_sync(&self) {
        if let Err(e) = self.sync_data().await {
            log::error!("❌ Error en la pasada de sincronización: {}", e);
            notify(NotificationKind::Error, "Error sincronizando datos");
        }
    }

    /// Una pasada completa. Si ya hay una en curso, el trigger se descarta.
    pub async fn sync_data(&self) -> Result<(), String> {
        {
            let mut in_progress = self.sync_in_progress.borrow_mut();
            if *in_progress {
                log::info!("🔄 Sincronización ya en progreso, saltando");
                return Ok(());
            }
            *in_progress = true;
        }

        let result = self.sync_pass().await;

        // El flag se limpia en todos los caminos de salida
        *self.sync_in_progress.borrow_mut() = false;

        result
    }

    /// Tres fetches independientes: el fallo de red de uno se loguea y no
    /// aborta los demás. Solo errores inesperados (storage) cortan la pasada.
    async fn sync_pass(&self) -> Result<(), String> {
        // Primero drenar las escrituras pendientes
        self.send_offline_data().await;

        // Balance: actualiza la copia local sin notificar (las notificaciones
        // de delta son del reconciliador) y republica
        if let (Some(token), Some(user_id)) = (session::auth_token(), session::user_id()) {
            match self.api_client.get_balance(&user_id, &token).await {
                Ok(balance) => {
                    if let Some(mut user) = session::load_user() {
                        user.balance = balance;
                        user.balance_synced_at = Some(chrono::Utc::now().timestamp());
                        session::save_user(&user)?;
                    }
                    dispatch_json(BALANCE_EVENT, &BalancePayload { balance });
                }
                Err(e) => log::warn!("⚠️ Sync de balance fallido: {}", e),
            }
        }

        // Precios públicos
        match self.api_client.get_public_coins().await {
            Ok(coins) => {
                save_to_storage(KEY_COIN_PRICES, &coins)?;
                dispatch_json(PRICES_EVENT, &coins);
            }
            Err(e) => log::warn!("⚠️ Sync de precios fallido: {}", e),
        }

        // Historial (403/404 ya vienen filtrados como None)
        if let (Some(token), Some(user_id)) = (session::auth_token(), session::user_id()) {
            match self.api_client.get_transactions(&user_id, &token).await {
                Ok(Some(transactions)) => dispatch_json(TRANSACTIONS_EVENT, &transactions),
                Ok(None) => {}
                Err(e) => log::warn!("⚠️ Sync de historial fallido: {}", e),
            }
        }

        // Pasada completa
        let timestamp = chrono::Utc::now().timestamp();
        save_to_storage(KEY_LAST_SYNC, &timestamp)?;
        self.sync_state.set_last_sync(timestamp);

        dispatch_json(SYNCED_EVENT, &SyncedPayload { timestamp });
        notify(NotificationKind::Success, "Datos sincronizados");

        Ok(())
    }

    /// Guarda una escritura pendiente para el próximo flush
    pub fn save_offline_data(&self, write: QueuedWrite) -> Result<(), String> {
        self.offline_queue.enqueue(write)
    }

    /// Reenvía la queue al inicio de cada pasada. Cada entrada sale de la
    /// queue SOLO con reenvío confirmado; un fallo la deja para la próxima.
    pub async fn send_offline_data(&self) {
        let queue = self.offline_queue.load();
        if queue.is_empty() {
            return;
        }

        log::info!("📤 Reenviando {} escrituras offline", queue.len());

        for write in &queue.entries {
            match self.api_client.replay(write).await {
                Ok(()) => {
                    if let Err(e) = self.offline_queue.remove(&write.key) {
                        log::error!("❌ Error quitando {} de la queue: {}", write.key, e);
                    } else {
                        log::info!("✅ Escritura {} confirmada", write.key);
                    }
                }
                Err(e) => {
                    log::warn!("⚠️ Reenvío de {} fallido, queda en la queue: {}", write.key, e);
                }
            }
        }
    }
}
