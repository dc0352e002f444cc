use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Holiday calendar entry as served by `/feriados`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feriado {
    pub id: i64,
    pub data: NaiveDate,
    pub nome: String,
    pub tipo: String,
}

/// Body for POST `/feriados`.
#[derive(Debug, Clone, Serialize)]
pub struct NovoFeriado {
    pub data: NaiveDate,
    pub nome: String,
    pub tipo: String,
}
