use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::funcionario::FuncionarioResumo;

/// Resolution workflow of a detected inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusInconsistencia {
    #[serde(rename = "Detectado")]
    Detectado,
    #[serde(rename = "Em Análise")]
    EmAnalise,
    #[serde(rename = "Resolvido")]
    Resolvido,
}

impl StatusInconsistencia {
    pub const ALL: [StatusInconsistencia; 3] = [
        StatusInconsistencia::Detectado,
        StatusInconsistencia::EmAnalise,
        StatusInconsistencia::Resolvido,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusInconsistencia::Detectado => "Detectado",
            StatusInconsistencia::EmAnalise => "Em Análise",
            StatusInconsistencia::Resolvido => "Resolvido",
        }
    }
}

impl fmt::Display for StatusInconsistencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected scheduling inconsistency as served by `/inconsistencias`.
///
/// `funcionario` is `None` when the linked employee failed to load on the
/// backend side; screens must tolerate the gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inconsistencia {
    pub id: i64,
    pub data_referencia: NaiveDate,
    pub tipo_inconsistencia: String,
    pub mensagem_gerada: String,
    pub status: StatusInconsistencia,
    pub detectado_em: DateTime<Utc>,
    #[serde(default)]
    pub observacoes_resolucao: Option<String>,
    #[serde(default)]
    pub funcionario: Option<FuncionarioResumo>,
}

/// Body for PATCH `/inconsistencias/:id/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarStatus {
    pub new_status: StatusInconsistencia,
    pub observacoes: String,
    pub resolvido_por_id: i64,
}

/// Body for POST `/inconsistencias/detect`.
#[derive(Debug, Clone, Serialize)]
pub struct DetectarRequest {
    pub data: NaiveDate,
}

/// `{data: {inconsistenciasDetectadas}}` answer of a detection run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectarResultado {
    pub inconsistencias_detectadas: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_nested_funcionario() {
        let json = r#"{
            "id": 3,
            "dataReferencia": "2024-05-20",
            "tipoInconsistencia": "Marcação Incompleta",
            "mensagemGerada": "Apenas 3 marcações no dia.",
            "status": "Em Análise",
            "detectadoEm": "2024-05-21T03:00:00Z",
            "observacoesResolucao": null,
            "funcionario": {"id": 9, "matricula": "1042", "nome": "Ana Silva"}
        }"#;
        let inc: Inconsistencia = serde_json::from_str(json).unwrap();
        assert_eq!(inc.status, StatusInconsistencia::EmAnalise);
        assert_eq!(inc.funcionario.unwrap().nome, "Ana Silva");
    }

    #[test]
    fn tolerates_missing_funcionario() {
        let json = r#"{
            "id": 4,
            "dataReferencia": "2024-05-20",
            "tipoInconsistencia": "Ausência de Marcação",
            "mensagemGerada": "Nenhuma marcação no dia.",
            "status": "Detectado",
            "detectadoEm": "2024-05-21T03:00:00Z"
        }"#;
        let inc: Inconsistencia = serde_json::from_str(json).unwrap();
        assert!(inc.funcionario.is_none());
        assert!(inc.observacoes_resolucao.is_none());
    }

    #[test]
    fn status_serializes_with_wire_labels() {
        let body = AtualizarStatus {
            new_status: StatusInconsistencia::EmAnalise,
            observacoes: String::new(),
            resolvido_por_id: 1,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""newStatus":"Em Análise""#));
        assert!(json.contains(r#""resolvidoPorId":1"#));
    }
}
