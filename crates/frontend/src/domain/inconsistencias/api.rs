use chrono::NaiveDate;
use contracts::common::{DataEnvelope, ListPayload};
use contracts::domain::inconsistencia::{
    AtualizarStatus, DetectarRequest, DetectarResultado, Inconsistencia,
};

use crate::shared::api_utils::{self, ApiError, Query};

/// Inconsistencies whose reference date falls inside the given range.
pub async fn listar(
    token: &str,
    inicio: Option<NaiveDate>,
    fim: Option<NaiveDate>,
) -> Result<Vec<Inconsistencia>, ApiError> {
    let path = Query::new()
        .set_opt("dataReferencia", inicio.map(|d| d.to_string()))
        .set_opt("dataReferenciaFim", fim.map(|d| d.to_string()))
        .apply("/inconsistencias");
    let payload: ListPayload<Inconsistencia> = api_utils::get_json(token, &path).await?;
    Ok(payload.into_records())
}

pub async fn atualizar_status(
    token: &str,
    id: i64,
    body: &AtualizarStatus,
) -> Result<(), ApiError> {
    api_utils::patch_json(token, &format!("/inconsistencias/{}/status", id), body).await
}

/// Trigger a detection run for a reference date; answers with the number
/// of new findings.
pub async fn detectar(token: &str, data: NaiveDate) -> Result<DetectarResultado, ApiError> {
    let envelope: DataEnvelope<DetectarResultado> =
        api_utils::post_json_returning(token, "/inconsistencias/detect", &DetectarRequest { data })
            .await?;
    Ok(envelope.data)
}
