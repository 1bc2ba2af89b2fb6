use crate::models::{NotificationKind, User};
use crate::services::notification_service::notify;
use crate::utils::events::{dispatch_simple, LOGOUT_EVENT};
use crate::utils::storage::{
    load_from_storage, load_string, remove_from_storage, save_to_storage,
    KEY_AUTH_TOKEN, KEY_USER, KEY_USER_ID,
};

// El login (fuera de este crate) persiste authToken, userId y user.
// Aquí solo se consumen. El id de usuario sale del registro persistido,
// nunca de decodificar claims del token en el cliente.

pub fn auth_token() -> Option<String> {
    load_string(KEY_AUTH_TOKEN)
}

pub fn user_id() -> Option<String> {
    load_string(KEY_USER_ID)
}

pub fn is_authenticated() -> bool {
    auth_token().is_some() && user_id().is_some()
}

pub fn load_user() -> Option<User> {
    load_from_storage(KEY_USER)
}

pub fn save_user(user: &User) -> Result<(), String> {
    save_to_storage(KEY_USER, user)
}

/// Cierre de sesión forzado ante un 401: limpia credenciales, avisa al
/// usuario y emite el evento que consume el router.
pub fn force_logout() {
    log::warn!("🔒 401 del backend: cerrando sesión");

    let _ = remove_from_storage(KEY_AUTH_TOKEN);
    let _ = remove_from_storage(KEY_USER_ID);
    let _ = remove_from_storage(KEY_USER);

    notify(NotificationKind::Warning, "Tu sesión expiró, vuelve a iniciar sesión");
    dispatch_simple(LOGOUT_EVENT);
}
