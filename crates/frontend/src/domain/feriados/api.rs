use chrono::NaiveDate;
use contracts::common::ListPayload;
use contracts::domain::feriado::{Feriado, NovoFeriado};

use crate::shared::api_utils::{self, ApiError, Query};

/// Holidays inside the given range. The bounds are server-side query
/// parameters, passed through verbatim.
pub async fn listar(
    token: &str,
    inicio: Option<NaiveDate>,
    fim: Option<NaiveDate>,
) -> Result<Vec<Feriado>, ApiError> {
    let path = Query::new()
        .set_opt("startDate", inicio.map(|d| d.to_string()))
        .set_opt("endDate", fim.map(|d| d.to_string()))
        .apply("/feriados");
    let payload: ListPayload<Feriado> = api_utils::get_json(token, &path).await?;
    Ok(payload.into_records())
}

pub async fn criar(token: &str, novo: &NovoFeriado) -> Result<(), ApiError> {
    api_utils::post_json(token, "/feriados", novo).await
}
