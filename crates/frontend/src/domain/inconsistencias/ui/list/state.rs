use contracts::domain::inconsistencia::{Inconsistencia, StatusInconsistencia};
use leptos::prelude::*;

use crate::shared::list_view::{FilterCriteria, ListRecord, ListViewModel, DEFAULT_PAGE_SIZE};

pub const TIPOS_INCONSISTENCIA: [&str; 3] = [
    "Ausência de Marcação",
    "Marcação Incompleta",
    "Intervalo de Almoço Insuficiente",
];

impl ListRecord for Inconsistencia {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

/// Employee-name substring plus status/type selectors (`None` = "Todos").
///
/// A record without its nested employee never matches a non-empty name
/// search: the filter references a field the record cannot answer for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltroInconsistencias {
    pub funcionario: String,
    pub status: Option<StatusInconsistencia>,
    pub tipo: Option<String>,
}

impl FilterCriteria for FiltroInconsistencias {
    type Record = Inconsistencia;

    fn matches(&self, inconsistencia: &Inconsistencia) -> bool {
        let busca = self.funcionario.trim().to_lowercase();
        let funcionario_ok = busca.is_empty()
            || inconsistencia
                .funcionario
                .as_ref()
                .map(|f| f.nome.to_lowercase().contains(&busca))
                .unwrap_or(false);
        let status_ok = self
            .status
            .map(|status| inconsistencia.status == status)
            .unwrap_or(true);
        let tipo_ok = self
            .tipo
            .as_ref()
            .map(|tipo| inconsistencia.tipo_inconsistencia == *tipo)
            .unwrap_or(true);
        funcionario_ok && status_ok && tipo_ok
    }
}

pub fn create_state() -> RwSignal<ListViewModel<FiltroInconsistencias>> {
    RwSignal::new(ListViewModel::new(DEFAULT_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::funcionario::FuncionarioResumo;

    fn inconsistencia(
        id: i64,
        nome: Option<&str>,
        tipo: &str,
        status: StatusInconsistencia,
    ) -> Inconsistencia {
        Inconsistencia {
            id,
            data_referencia: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            tipo_inconsistencia: tipo.to_string(),
            mensagem_gerada: String::new(),
            status,
            detectado_em: "2024-05-21T03:00:00Z".parse().unwrap(),
            observacoes_resolucao: None,
            funcionario: nome.map(|nome| FuncionarioResumo {
                id: 1,
                matricula: "1001".to_string(),
                nome: nome.to_string(),
                escala: None,
            }),
        }
    }

    #[test]
    fn missing_funcionario_is_excluded_from_name_search() {
        let filtro = FiltroInconsistencias {
            funcionario: "ana".to_string(),
            ..Default::default()
        };
        let sem_funcionario = inconsistencia(
            1,
            None,
            "Ausência de Marcação",
            StatusInconsistencia::Detectado,
        );
        assert!(!filtro.matches(&sem_funcionario));

        // But it still shows up when the name criterion is empty.
        assert!(FiltroInconsistencias::default().matches(&sem_funcionario));
    }

    #[test]
    fn criteria_are_anded_together() {
        let filtro = FiltroInconsistencias {
            funcionario: "ana".to_string(),
            status: Some(StatusInconsistencia::Detectado),
            tipo: Some("Marcação Incompleta".to_string()),
        };
        let alvo = inconsistencia(
            1,
            Some("Ana Silva"),
            "Marcação Incompleta",
            StatusInconsistencia::Detectado,
        );
        assert!(filtro.matches(&alvo));

        let status_errado = inconsistencia(
            2,
            Some("Ana Silva"),
            "Marcação Incompleta",
            StatusInconsistencia::Resolvido,
        );
        assert!(!filtro.matches(&status_errado));
    }
}
