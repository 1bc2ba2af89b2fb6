use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::models::{CachedBalance, QueuedWrite};
use crate::services::api_client::ApiClient;
use crate::services::offline_queue::OfflineQueueService;
use crate::services::session;
use crate::state::SyncStateHandle;
use crate::utils::events::{dispatch_json, BalancePayload, BALANCE_EVENT};

/// Punto de entrada ÚNICO para toda escritura local del balance. El contrato
/// del repositorio garantiza que el backend se entera de cada mutación local:
/// persiste la copia, la republica y empuja el PUT (encolándolo si no hay
/// conexión o si falla).
#[derive(Clone)]
pub struct BalanceRepository {
    api_client: ApiClient,
    offline_queue: OfflineQueueService,
    sync_state: SyncStateHandle,
}

impl BalanceRepository {
    pub fn new(
        api_client: ApiClient,
        offline_queue: OfflineQueueService,
        sync_state: SyncStateHandle,
    ) -> Self {
        Self {
            api_client,
            offline_queue,
            sync_state,
        }
    }

    /// Escribe el balance local y dispara el push al backend
    pub fn set_balance(&self, new_balance: f64) -> Result<(), String> {
        let mut user = session::load_user().ok_or("No hay usuario en sesión")?;

        user.apply_balance(CachedBalance {
            amount: new_balance,
            last_synced_at: chrono::Utc::now().timestamp(),
        });
        session::save_user(&user)?;

        dispatch_json(BALANCE_EVENT, &BalancePayload { balance: new_balance });

        self.push_local_balance(user.id, new_balance);
        Ok(())
    }

    /// Empuja la mutación local al backend en background
    fn push_local_balance(&self, user_id: String, new_balance: f64) {
        let repository = self.clone();

        spawn_local(async move {
            let Some(token) = session::auth_token() else {
                return;
            };

            if !repository.sync_state.connected() {
                log::info!("📴 Sin conexión: push de balance encolado");
                repository.queue_push(&user_id, &token, new_balance);
                return;
            }

            match repository
                .api_client
                .set_balance(&user_id, &token, new_balance)
                .await
            {
                Ok(()) => log::info!("✅ Balance local empujado al backend"),
                Err(e) => {
                    log::warn!("⚠️ Push de balance fallido, se encola: {}", e);
                    repository.queue_push(&user_id, &token, new_balance);
                }
            }
        });
    }

    fn queue_push(&self, user_id: &str, token: &str, new_balance: f64) {
        let write = QueuedWrite::new(
            format!("balance:{}", user_id),
            "PUT",
            format!("{}/api/users/{}/balance", CONFIG.backend_url(), user_id),
            vec![
                ("Authorization".to_string(), format!("Bearer {}", token)),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            Some(serde_json::json!({ "balance": new_balance }).to_string()),
        );

        if let Err(e) = self.offline_queue.enqueue(write) {
            log::error!("❌ Error encolando push de balance: {}", e);
        }
    }
}
