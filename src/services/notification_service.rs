use crate::models::{Notification, NotificationKind};
use crate::utils::events::{dispatch_json, NOTIFICATION_EVENT};

/// Publica una notificación hacia la UI (el toast la renderiza).
/// El sync layer solo emite; nunca espera nada del sink.
pub fn notify(kind: NotificationKind, message: impl Into<String>) {
    let notification = Notification::new(kind, message);

    match kind {
        NotificationKind::Success => log::info!("✅ {}", notification.message),
        NotificationKind::Info => log::info!("ℹ️ {}", notification.message),
        NotificationKind::Warning => log::warn!("⚠️ {}", notification.message),
        NotificationKind::Error => log::error!("❌ {}", notification.message),
    }

    dispatch_json(NOTIFICATION_EVENT, &notification);
}
