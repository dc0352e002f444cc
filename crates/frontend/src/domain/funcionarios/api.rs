use contracts::common::ListPayload;
use contracts::domain::funcionario::{Funcionario, FuncionarioForm};

use crate::shared::api_utils::{self, ApiError};

/// Fetch the full roster for the session; both list payload shapes are
/// normalized into a flat vec.
pub async fn listar(token: &str) -> Result<Vec<Funcionario>, ApiError> {
    let payload: ListPayload<Funcionario> = api_utils::get_json(token, "/funcionarios").await?;
    Ok(payload.into_records())
}

pub async fn criar(token: &str, form: &FuncionarioForm) -> Result<(), ApiError> {
    api_utils::post_json(token, "/funcionarios", form).await
}

pub async fn atualizar(token: &str, id: i64, form: &FuncionarioForm) -> Result<(), ApiError> {
    api_utils::put_json(token, &format!("/funcionarios/{}", id), form).await
}
