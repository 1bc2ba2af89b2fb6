// ============================================================================
// QUEUE PERSISTENTE DE ESCRITURAS OFFLINE
// ============================================================================

use serde::{Deserialize, Serialize};

/// Descriptor de una petición HTTP pendiente de reenvío
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueuedWrite {
    pub key: String,
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub queued_at: i64,
}

impl QueuedWrite {
    pub fn new(
        key: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            method: method.into(),
            headers,
            body,
            queued_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Mapping ordenado de key → petición pendiente. Reescribir una key existente
/// reemplaza la entrada en su posición original; las entradas solo salen de
/// la queue tras un reenvío confirmado. Sin TTL ni tope de tamaño.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfflineWriteQueue {
    pub entries: Vec<QueuedWrite>,
}

impl OfflineWriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserta o reemplaza la entrada con la misma key
    pub fn upsert(&mut self, write: QueuedWrite) {
        match self.entries.iter_mut().find(|e| e.key == write.key) {
            Some(existing) => *existing = write,
            None => self.entries.push(write),
        }
    }

    /// Elimina una entrada tras reenvío confirmado
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|e| e.key != key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(key: &str, body: &str) -> QueuedWrite {
        QueuedWrite::new(
            key,
            "PUT",
            format!("/api/users/u1/{}", key),
            vec![("Content-Type".to_string(), "application/json".to_string())],
            Some(body.to_string()),
        )
    }

    #[test]
    fn upsert_reemplaza_en_la_misma_posicion() {
        let mut queue = OfflineWriteQueue::new();
        queue.upsert(write("balance:u1", "{\"balance\":100}"));
        queue.upsert(write("profile:u1", "{}"));

        // Reescribir la primera key no la mueve al final
        queue.upsert(write("balance:u1", "{\"balance\":120}"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.entries[0].key, "balance:u1");
        assert_eq!(queue.entries[0].body.as_deref(), Some("{\"balance\":120}"));
        assert_eq!(queue.entries[1].key, "profile:u1");
    }

    #[test]
    fn remove_solo_elimina_la_entrada_confirmada() {
        let mut queue = OfflineWriteQueue::new();
        queue.upsert(write("balance:u1", "{}"));
        queue.upsert(write("profile:u1", "{}"));

        queue.remove("balance:u1");

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.entries[0].key, "profile:u1");
    }

    #[test]
    fn un_reenvio_fallido_deja_la_entrada_en_la_queue() {
        // El flush solo llama a remove() con las keys confirmadas; una key
        // que falla simplemente no se toca.
        let mut queue = OfflineWriteQueue::new();
        queue.upsert(write("balance:u1", "{}"));
        queue.upsert(write("profile:u1", "{}"));

        let confirmed = vec!["profile:u1".to_string()];
        for key in &confirmed {
            queue.remove(key);
        }

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.entries[0].key, "balance:u1");
    }
}
