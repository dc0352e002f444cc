//! API utilities for frontend-backend communication.
//!
//! All collaborator access goes through these helpers: they attach the
//! bearer token, classify 401/403 into [`ApiError::Unauthorized`] so
//! screens can route session expiry to the login page, and extract the
//! `{message}` body from error responses.

use contracts::common::ErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// What went wrong talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 401/403 — the session is no longer accepted.
    Unauthorized,
    /// Any other non-2xx status, with the backend's `{message}` if present.
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    Network(String),
    /// The response body was not the expected JSON.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Sessão expirada. Faça login novamente."),
            ApiError::Status {
                message: Some(message),
                ..
            } => f.write_str(message),
            ApiError::Status { status, .. } => {
                write!(f, "Falha na requisição (HTTP {status}).")
            }
            ApiError::Network(_) => {
                write!(f, "Não foi possível conectar ao servidor. Tente novamente.")
            }
            ApiError::Decode(_) => write!(f, "Resposta inesperada do servidor."),
        }
    }
}

/// Base URL for API requests, derived from the current window location.
/// The backend listens on port 3015 and mounts everything under `/api`.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3015/api", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Optional query parameters for the list endpoints. Empty values are
/// omitted; set values are percent-encoded.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.pairs.push((name, value));
        }
        self
    }

    pub fn set_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn apply(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect();
        format!("{}?{}", path, encoded.join("&"))
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Turn a settled response into `Ok` or the classified [`ApiError`].
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(ApiError::Status { status, message });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(token: &str, path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(response).await?).await
}

/// POST a JSON body, ignoring the response body.
pub async fn post_json<B: Serialize>(token: &str, path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

/// POST a JSON body and decode the JSON answer.
pub async fn post_json_returning<B: Serialize, T: DeserializeOwned>(
    token: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(response).await?).await
}

pub async fn put_json<B: Serialize>(token: &str, path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

pub async fn patch_json<B: Serialize>(token: &str, path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::patch(&api_url(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

pub async fn delete(token: &str, path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_empty_values_and_encodes_set_ones() {
        let query = Query::new()
            .set("startDate", "2024-01-01")
            .set("funcionarioNome", "Ana Silva")
            .set("status", "");
        assert_eq!(
            query.apply("/marcacoes"),
            "/marcacoes?startDate=2024-01-01&funcionarioNome=Ana%20Silva"
        );
    }

    #[test]
    fn empty_query_leaves_the_path_alone() {
        assert_eq!(Query::new().apply("/funcionarios"), "/funcionarios");
    }

    #[test]
    fn status_error_prefers_the_backend_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Matrícula já cadastrada.".to_string()),
        };
        assert_eq!(err.to_string(), "Matrícula já cadastrada.");
        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "Falha na requisição (HTTP 500).");
    }
}
