use contracts::domain::funcionario::Funcionario;
use leptos::prelude::*;

use crate::shared::list_view::{FilterCriteria, ListRecord, ListViewModel, DEFAULT_PAGE_SIZE};

impl ListRecord for Funcionario {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

/// Active/inactive selector, "Todos" meaning no constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FiltroAtivo {
    #[default]
    Todos,
    Ativos,
    Inativos,
}

impl FiltroAtivo {
    pub const ALL: [FiltroAtivo; 3] =
        [FiltroAtivo::Todos, FiltroAtivo::Ativos, FiltroAtivo::Inativos];

    pub fn label(&self) -> &'static str {
        match self {
            FiltroAtivo::Todos => "Todos",
            FiltroAtivo::Ativos => "Ativos",
            FiltroAtivo::Inativos => "Inativos",
        }
    }

    pub fn from_label(value: &str) -> FiltroAtivo {
        match value {
            "Ativos" => FiltroAtivo::Ativos,
            "Inativos" => FiltroAtivo::Inativos,
            _ => FiltroAtivo::Todos,
        }
    }
}

/// One search box matching name OR registration number, plus the status
/// selector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltroFuncionarios {
    pub busca: String,
    pub ativo: FiltroAtivo,
}

impl FilterCriteria for FiltroFuncionarios {
    type Record = Funcionario;

    fn matches(&self, funcionario: &Funcionario) -> bool {
        let busca = self.busca.trim().to_lowercase();
        let busca_ok = busca.is_empty()
            || funcionario.nome.to_lowercase().contains(&busca)
            || funcionario.matricula.to_lowercase().contains(&busca);
        let ativo_ok = match self.ativo {
            FiltroAtivo::Todos => true,
            FiltroAtivo::Ativos => funcionario.ativo,
            FiltroAtivo::Inativos => !funcionario.ativo,
        };
        busca_ok && ativo_ok
    }
}

pub fn create_state() -> RwSignal<ListViewModel<FiltroFuncionarios>> {
    RwSignal::new(ListViewModel::new(DEFAULT_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funcionario(id: i64, matricula: &str, nome: &str, ativo: bool) -> Funcionario {
        Funcionario {
            id,
            matricula: matricula.to_string(),
            nome: nome.to_string(),
            escala: "12x36".to_string(),
            cargo: None,
            contrato: None,
            ativo,
        }
    }

    #[test]
    fn busca_matches_nome_or_matricula() {
        let filtro = FiltroFuncionarios {
            busca: "ana".to_string(),
            ..Default::default()
        };
        assert!(filtro.matches(&funcionario(1, "1001", "Ana Silva", true)));
        assert!(filtro.matches(&funcionario(2, "1002", "Mariana Costa", true)));
        assert!(!filtro.matches(&funcionario(3, "1003", "Carlos", true)));

        let por_matricula = FiltroFuncionarios {
            busca: "1003".to_string(),
            ..Default::default()
        };
        assert!(por_matricula.matches(&funcionario(3, "1003", "Carlos", true)));
    }

    #[test]
    fn filtro_ativo_compares_by_value() {
        let apenas_ativos = FiltroFuncionarios {
            ativo: FiltroAtivo::Ativos,
            ..Default::default()
        };
        assert!(apenas_ativos.matches(&funcionario(1, "1001", "Ana", true)));
        assert!(!apenas_ativos.matches(&funcionario(2, "1002", "Bia", false)));

        let inativos = FiltroFuncionarios {
            ativo: FiltroAtivo::Inativos,
            ..Default::default()
        };
        assert!(inativos.matches(&funcionario(2, "1002", "Bia", false)));
    }

    #[test]
    fn default_filtro_matches_everything() {
        let filtro = FiltroFuncionarios::default();
        assert!(filtro.matches(&funcionario(1, "1001", "Ana", true)));
        assert!(filtro.matches(&funcionario(2, "1002", "Bia", false)));
    }
}
