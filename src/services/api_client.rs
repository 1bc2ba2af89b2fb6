// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un método por endpoint del backend, sin lógica de negocio. Todos los
// errores se devuelven como String con contexto; el 401 fuerza logout aquí
// mismo para que ningún caller tenga que recordarlo.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;

use crate::config::CONFIG;
use crate::models::{Coin, QueuedWrite, Transaction};
use crate::services::session;

#[derive(serde::Deserialize)]
struct BalanceResponse {
    balance: f64,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Health check con timeout acotado. El abort cuenta como fallo normal:
    /// el caller lo degrada a desconectado, nunca a crash.
    pub async fn check_health(&self) -> Result<(), String> {
        let url = format!("{}/api/health", self.base_url);

        let controller = web_sys::AbortController::new()
            .map_err(|_| "AbortController no disponible".to_string())?;
        let signal = controller.signal();

        let timeout = Timeout::new(CONFIG.network_timeout_seconds * 1_000, move || {
            controller.abort();
        });

        let result = Request::get(&url)
            .abort_signal(Some(&signal))
            .send()
            .await;

        // La respuesta llegó (o falló) antes del timeout: cancelar el abort
        drop(timeout);

        let response = result.map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Balance autoritativo del usuario
    pub async fn get_balance(&self, user_id: &str, token: &str) -> Result<f64, String> {
        let url = format!("{}/api/users/{}/balance", self.base_url, user_id);

        let response = self
            .send_authorized(Request::get(&url), token)
            .await?;

        let body = response
            .json::<BalanceResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(body.balance)
    }

    /// Empuja una mutación local del balance al backend
    pub async fn set_balance(&self, user_id: &str, token: &str, balance: f64) -> Result<(), String> {
        let url = format!("{}/api/users/{}/balance", self.base_url, user_id);

        let request = Request::put(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(&serde_json::json!({ "balance": balance }))
            .map_err(|e| format!("Serialization error: {}", e))?;

        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.check_response(response).await.map(|_| ())
    }

    /// Precios públicos de las monedas listadas (sin auth)
    pub async fn get_public_coins(&self) -> Result<Vec<Coin>, String> {
        let url = format!("{}/api/coins/public", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<Coin>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Historial de transacciones. 403/404 no son fatales: se devuelve None
    /// y el caller solo lo loguea.
    pub async fn get_transactions(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Option<Vec<Transaction>>, String> {
        let url = format!("{}/api/users/{}/portfolio/transactions", self.base_url, user_id);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        match response.status() {
            401 => {
                session::force_logout();
                Err("HTTP 401: sesión expirada".to_string())
            }
            403 | 404 => {
                log::warn!("⚠️ Historial no disponible (HTTP {}), se ignora", response.status());
                Ok(None)
            }
            _ if response.ok() => response
                .json::<Vec<Transaction>>()
                .await
                .map(Some)
                .map_err(|e| format!("Parse error: {}", e)),
            status => Err(format!("HTTP {}: {}", status, response.status_text())),
        }
    }

    /// Reenvía una escritura encolada tal cual quedó descrita en la queue
    pub async fn replay(&self, write: &QueuedWrite) -> Result<(), String> {
        let mut builder = match write.method.as_str() {
            "POST" => Request::post(&write.url),
            "PUT" => Request::put(&write.url),
            "DELETE" => Request::delete(&write.url),
            _ => Request::get(&write.url),
        };

        for (name, value) in &write.headers {
            builder = builder.header(name, value);
        }

        let result = match &write.body {
            Some(body) => builder
                .body(body.clone())
                .map_err(|e| format!("Request build error: {}", e))?
                .send()
                .await,
            None => builder.send().await,
        };

        let response = result.map_err(|e| format!("Network error: {}", e))?;
        self.check_response(response).await.map(|_| ())
    }

    async fn send_authorized(
        &self,
        builder: RequestBuilder,
        token: &str,
    ) -> Result<Response, String> {
        let response = builder
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.check_response(response).await
    }

    async fn check_response(&self, response: Response) -> Result<Response, String> {
        if response.status() == 401 {
            session::force_logout();
            return Err("HTTP 401: sesión expirada".to_string());
        }

        if response.ok() {
            Ok(response)
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
