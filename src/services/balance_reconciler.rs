// ============================================================================
// RECONCILIADOR DE BALANCE
// ============================================================================
// Mantiene la copia local del balance consistente con el backend, con
// notificaciones de bajo ruido (epsilon 0.01). El backoff estira la cadencia
// del propio poll; una petición fallida no se reintenta inline.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::models::{
    compare_balances, CachedBalance, NotificationKind, ReconcileOutcome, SyncFailureState,
};
use crate::services::api_client::ApiClient;
use crate::services::notification_service::notify;
use crate::services::session;
use crate::utils::browser::navigator_online;
use crate::utils::events::{dispatch_json, BalancePayload, BALANCE_EVENT};
use crate::utils::format::format_signed_usd;

#[derive(Clone)]
pub struct BalanceReconciler {
    api_client: ApiClient,
    failure: Rc<RefCell<SyncFailureState>>,
    interval: Rc<RefCell<Option<Interval>>>,
}

impl BalanceReconciler {
    pub fn new(api_client: ApiClient) -> Self {
        Self {
            api_client,
            failure: Rc::new(RefCell::new(SyncFailureState::new(
                CONFIG.sync_config.balance_poll_base_ms,
            ))),
            interval: Rc::new(RefCell::new(None)),
        }
    }

    pub fn start(&self) {
        let delay = self.failure.borrow().current_delay_ms;
        self.restart_interval(delay);
    }

    /// El poll es serial por construcción: un solo timer programa reconciles,
    /// nunca hay dos fetch de balance en vuelo.
    fn restart_interval(&self, delay_ms: u32) {
        let interval = Interval::new(delay_ms, {
            let reconciler = self.clone();
            move || {
                let reconciler = reconciler.clone();
                spawn_local(async move {
                    reconciler.reconcile().await;
                });
            }
        });

        *self.interval.borrow_mut() = Some(interval);
        log::info!("⏰ Reconciliación de balance cada {} ms", delay_ms);
    }

    /// Una pasada de reconciliación. No-op si el browser está offline o no
    /// hay sesión. El estado del ConnectionMonitor no lo bloquea: ambos están
    /// acoplados solo por el broadcast.
    pub async fn reconcile(&self) {
        if navigator_online() == Some(false) {
            return;
        }

        let (Some(token), Some(user_id)) = (session::auth_token(), session::user_id()) else {
            return;
        };

        match self.api_client.get_balance(&user_id, &token).await {
            Ok(remote) => {
                let changed = self.failure.borrow_mut().record_success();
                if changed {
                    let delay = self.failure.borrow().current_delay_ms;
                    log::info!("📉 Backoff reiniciado tras éxito");
                    self.restart_interval(delay);
                }

                self.apply_remote_balance(remote);
            }
            Err(e) => {
                log::warn!("⚠️ Reconciliación fallida: {}", e);

                let changed = self.failure.borrow_mut().record_failure();
                if changed {
                    let delay = self.failure.borrow().current_delay_ms;
                    log::warn!("📈 Backoff: nuevo intervalo de poll {} ms", delay);
                    self.restart_interval(delay);
                }
            }
        }
    }

    fn apply_remote_balance(&self, remote: f64) {
        // Sin registro local no hay nada que reconciliar (lo crea el login)
        let Some(mut user) = session::load_user() else {
            return;
        };

        match compare_balances(user.balance, remote) {
            ReconcileOutcome::InSync => {}
            ReconcileOutcome::Drift { delta } => {
                user.apply_balance(CachedBalance {
                    amount: remote,
                    last_synced_at: chrono::Utc::now().timestamp(),
                });

                if let Err(e) = session::save_user(&user) {
                    log::error!("❌ Error guardando balance reconciliado: {}", e);
                    return;
                }

                // Delta positivo con estilo success, negativo como info
                let kind = if delta > 0.0 {
                    NotificationKind::Success
                } else {
                    NotificationKind::Info
                };
                notify(kind, format!("Balance actualizado: {}", format_signed_usd(delta)));

                dispatch_json(BALANCE_EVENT, &BalancePayload { balance: remote });
            }
        }
    }
}
