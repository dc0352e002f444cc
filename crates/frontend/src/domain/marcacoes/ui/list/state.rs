use contracts::domain::marcacao::Marcacao;
use leptos::prelude::*;

use crate::shared::list_view::{FilterCriteria, ListRecord, ListViewModel, DEFAULT_PAGE_SIZE};

impl ListRecord for Marcacao {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

/// One search box matching the punched employee's name OR registration
/// number. Punches without their nested employee never match a non-empty
/// search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltroMarcacoes {
    pub busca: String,
}

impl FilterCriteria for FiltroMarcacoes {
    type Record = Marcacao;

    fn matches(&self, marcacao: &Marcacao) -> bool {
        let busca = self.busca.trim().to_lowercase();
        if busca.is_empty() {
            return true;
        }
        marcacao
            .funcionario
            .as_ref()
            .map(|f| {
                f.nome.to_lowercase().contains(&busca) || f.matricula.to_lowercase().contains(&busca)
            })
            .unwrap_or(false)
    }
}

pub fn create_state() -> RwSignal<ListViewModel<FiltroMarcacoes>> {
    RwSignal::new(ListViewModel::new(DEFAULT_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::funcionario::FuncionarioResumo;

    fn marcacao(id: i64, funcionario: Option<(&str, &str)>) -> Marcacao {
        Marcacao {
            id,
            data_marcacao: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            hora_marcacao: "08:01:12".to_string(),
            origem: "REP".to_string(),
            data_extracao: NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(),
            funcionario: funcionario.map(|(matricula, nome)| FuncionarioResumo {
                id: 1,
                matricula: matricula.to_string(),
                nome: nome.to_string(),
                escala: Some("12x36".to_string()),
            }),
        }
    }

    #[test]
    fn busca_matches_nested_nome_or_matricula() {
        let filtro = FiltroMarcacoes {
            busca: "1042".to_string(),
        };
        assert!(filtro.matches(&marcacao(1, Some(("1042", "Ana Silva")))));
        assert!(!filtro.matches(&marcacao(2, Some(("1043", "Carlos")))));
    }

    #[test]
    fn missing_funcionario_is_excluded_from_search_but_listed_otherwise() {
        let orfa = marcacao(3, None);
        let filtro = FiltroMarcacoes {
            busca: "ana".to_string(),
        };
        assert!(!filtro.matches(&orfa));
        assert!(FiltroMarcacoes::default().matches(&orfa));
    }
}
