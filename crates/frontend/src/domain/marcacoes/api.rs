use chrono::NaiveDate;
use contracts::common::ListPayload;
use contracts::domain::marcacao::Marcacao;

use crate::shared::api_utils::{self, ApiError, Query};

/// Time punches inside the given range, optionally narrowed by employee
/// name on the server side.
pub async fn listar(
    token: &str,
    inicio: Option<NaiveDate>,
    fim: Option<NaiveDate>,
    funcionario_nome: Option<String>,
) -> Result<Vec<Marcacao>, ApiError> {
    let path = Query::new()
        .set_opt("startDate", inicio.map(|d| d.to_string()))
        .set_opt("endDate", fim.map(|d| d.to_string()))
        .set_opt("funcionarioNome", funcionario_nome)
        .apply("/marcacoes");
    let payload: ListPayload<Marcacao> = api_utils::get_json(token, &path).await?;
    Ok(payload.into_records())
}
