use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

// Keys persistidas en localStorage
pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_USER: &str = "user";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_COIN_PRICES: &str = "coin_prices_cache";
pub const KEY_LAST_SYNC: &str = "last_sync";
pub const KEY_OFFLINE_QUEUE: &str = "offline_write_queue";

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Para valores planos (el token bearer se guarda sin envolver en JSON)
pub fn load_string(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
