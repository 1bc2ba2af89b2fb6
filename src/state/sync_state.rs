// ============================================================================
// SYNC STATE - Estado compartido entre los services de sincronización
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Handle clonable al estado que el monitor escribe y el sincronizador lee.
/// El reconciliador NO lee este flag: su guardia es el estado online del
/// browser, para que un backend con health check inestable no lo bloquee.
#[derive(Clone)]
pub struct SyncStateHandle {
    connected: Rc<RefCell<bool>>,
    last_sync: Rc<RefCell<Option<i64>>>,
}

impl SyncStateHandle {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: Rc::new(RefCell::new(connected)),
            last_sync: Rc::new(RefCell::new(None)),
        }
    }

    pub fn connected(&self) -> bool {
        *self.connected.borrow()
    }

    pub fn set_connected(&self, connected: bool) {
        *self.connected.borrow_mut() = connected;
    }

    pub fn last_sync(&self) -> Option<i64> {
        *self.last_sync.borrow()
    }

    pub fn set_last_sync(&self, timestamp: i64) {
        *self.last_sync.borrow_mut() = Some(timestamp);
    }
}

impl PartialEq for SyncStateHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.connected, &other.connected)
    }
}

impl Default for SyncStateHandle {
    fn default() -> Self {
        Self::new(true)
    }
}
