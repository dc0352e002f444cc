use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::funcionario::FuncionarioResumo;

/// Time-punch record as served by `/marcacoes`.
///
/// `horaMarcacao` comes preformatted (`HH:MM:SS`) from the extraction job,
/// so it stays a plain string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marcacao {
    pub id: i64,
    pub data_marcacao: NaiveDate,
    pub hora_marcacao: String,
    pub origem: String,
    pub data_extracao: NaiveDate,
    #[serde(default)]
    pub funcionario: Option<FuncionarioResumo>,
}
