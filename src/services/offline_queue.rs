use crate::models::{OfflineWriteQueue, QueuedWrite};
use crate::utils::storage::{load_from_storage, save_to_storage, KEY_OFFLINE_QUEUE};

/// Persistencia de la queue de escrituras offline en localStorage.
/// Las entradas solo salen tras reenvío confirmado; no hay TTL ni tope.
#[derive(Clone)]
pub struct OfflineQueueService;

impl OfflineQueueService {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self) -> OfflineWriteQueue {
        load_from_storage(KEY_OFFLINE_QUEUE).unwrap_or_default()
    }

    pub fn save(&self, queue: &OfflineWriteQueue) -> Result<(), String> {
        save_to_storage(KEY_OFFLINE_QUEUE, queue)
    }

    /// Encola (o reemplaza por key) una escritura pendiente
    pub fn enqueue(&self, write: QueuedWrite) -> Result<(), String> {
        let mut queue = self.load();
        queue.upsert(write);
        self.save(&queue)?;
        log::info!("💾 Escritura encolada, {} pendientes", queue.len());
        Ok(())
    }

    /// Elimina una entrada tras reenvío confirmado
    pub fn remove(&self, key: &str) -> Result<(), String> {
        let mut queue = self.load();
        queue.remove(key);
        self.save(&queue)
    }

    pub fn pending_count(&self) -> usize {
        self.load().len()
    }
}

impl Default for OfflineQueueService {
    fn default() -> Self {
        Self::new()
    }
}

// Los tests de persistencia necesitan localStorage: corren en browser
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn write(key: &str) -> QueuedWrite {
        QueuedWrite::new(key, "PUT", "/api/users/u1/balance", Vec::new(), Some("{}".into()))
    }

    fn clear() {
        let _ = crate::utils::storage::remove_from_storage(KEY_OFFLINE_QUEUE);
    }

    #[wasm_bindgen_test]
    fn la_queue_sobrevive_el_ciclo_de_persistencia() {
        clear();
        let service = OfflineQueueService::new();

        service.enqueue(write("balance:u1")).unwrap();
        service.enqueue(write("profile:u1")).unwrap();

        let loaded = service.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries[0].key, "balance:u1");
        clear();
    }

    #[wasm_bindgen_test]
    fn remove_solo_quita_la_entrada_confirmada() {
        clear();
        let service = OfflineQueueService::new();

        service.enqueue(write("balance:u1")).unwrap();
        service.enqueue(write("profile:u1")).unwrap();

        service.remove("balance:u1").unwrap();

        let loaded = service.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.entries[0].key, "profile:u1");
        clear();
    }
}
