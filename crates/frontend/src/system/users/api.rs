use contracts::common::ListPayload;
use contracts::system::usuario::{AtualizarUsuario, NovoUsuario, Usuario};

use crate::shared::api_utils::{self, ApiError};

/// Fetch all back-office accounts; both list payload shapes are
/// normalized.
pub async fn listar(token: &str) -> Result<Vec<Usuario>, ApiError> {
    let payload: ListPayload<Usuario> = api_utils::get_json(token, "/usuarios").await?;
    Ok(payload.into_records())
}

pub async fn criar(token: &str, novo: &NovoUsuario) -> Result<(), ApiError> {
    api_utils::post_json(token, "/usuarios", novo).await
}

pub async fn atualizar(token: &str, id: i64, body: &AtualizarUsuario) -> Result<(), ApiError> {
    api_utils::put_json(token, &format!("/usuarios/{}", id), body).await
}

pub async fn excluir(token: &str, id: i64) -> Result<(), ApiError> {
    api_utils::delete(token, &format!("/usuarios/{}", id)).await
}
