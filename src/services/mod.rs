pub mod api_client;
pub mod balance_reconciler;
pub mod balance_repository;
pub mod connection_monitor;
pub mod data_synchronizer;
pub mod notification_service;
pub mod offline_queue;
pub mod session;

pub use api_client::ApiClient;
pub use balance_reconciler::BalanceReconciler;
pub use balance_repository::BalanceRepository;
pub use connection_monitor::ConnectionMonitor;
pub use data_synchronizer::DataSynchronizer;
pub use notification_service::notify;
pub use offline_queue::OfflineQueueService;

use crate::state::SyncStateHandle;

/// Los tres monitores y el repositorio de balance, construidos UNA vez al
/// arrancar la app y compartidos por handle (vía ContextProvider). Sin
/// singletons escondidos: quien necesita un service lo recibe de aquí.
#[derive(Clone)]
pub struct SyncServices {
    pub sync_state: SyncStateHandle,
    pub offline_queue: OfflineQueueService,
    pub connection_monitor: ConnectionMonitor,
    pub balance_reconciler: BalanceReconciler,
    pub balance_repository: BalanceRepository,
    pub data_synchronizer: DataSynchronizer,
}

impl SyncServices {
    /// Construye el grafo de services y arranca los timers/listeners
    pub fn start() -> Self {
        let sync_state = SyncStateHandle::default();
        let api_client = ApiClient::new();
        let offline_queue = OfflineQueueService::new();

        let connection_monitor = ConnectionMonitor::new(api_client.clone(), sync_state.clone());
        let balance_reconciler = BalanceReconciler::new(api_client.clone());
        let balance_repository = BalanceRepository::new(
            api_client.clone(),
            offline_queue.clone(),
            sync_state.clone(),
        );
        let data_synchronizer =
            DataSynchronizer::new(api_client, offline_queue.clone(), sync_state.clone());

        connection_monitor.start();
        balance_reconciler.start();
        data_synchronizer.start();

        log::info!("🚀 Capa de sincronización iniciada");

        Self {
            sync_state,
            offline_queue,
            connection_monitor,
            balance_reconciler,
            balance_repository,
            data_synchronizer,
        }
    }
}

impl PartialEq for SyncServices {
    fn eq(&self, other: &Self) -> bool {
        // Un solo grafo de services por app: basta comparar el estado compartido
        self.sync_state == other.sync_state
    }
}
