use contracts::domain::feriado::Feriado;
use leptos::prelude::*;

use crate::shared::list_view::{FilterCriteria, ListRecord, ListViewModel, DEFAULT_PAGE_SIZE};

pub const TIPOS_FERIADO: [&str; 4] = [
    "Feriado Nacional",
    "Ponto Facultativo",
    "Feriado Municipal",
    "Feriado Estadual",
];

impl ListRecord for Feriado {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

/// Holiday-type selector, `None` meaning "Todos".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltroFeriados {
    pub tipo: Option<String>,
}

impl FilterCriteria for FiltroFeriados {
    type Record = Feriado;

    fn matches(&self, feriado: &Feriado) -> bool {
        match &self.tipo {
            Some(tipo) => feriado.tipo == *tipo,
            None => true,
        }
    }
}

pub fn create_state() -> RwSignal<ListViewModel<FiltroFeriados>> {
    RwSignal::new(ListViewModel::new(DEFAULT_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn feriado(id: i64, tipo: &str) -> Feriado {
        Feriado {
            id,
            data: NaiveDate::from_ymd_opt(2024, 9, 7).unwrap(),
            nome: "Independência".to_string(),
            tipo: tipo.to_string(),
        }
    }

    #[test]
    fn tipo_filters_by_exact_equality() {
        let filtro = FiltroFeriados {
            tipo: Some("Feriado Nacional".to_string()),
        };
        assert!(filtro.matches(&feriado(1, "Feriado Nacional")));
        assert!(!filtro.matches(&feriado(2, "Ponto Facultativo")));
    }

    #[test]
    fn todos_matches_everything() {
        let filtro = FiltroFeriados::default();
        assert!(filtro.matches(&feriado(1, "Feriado Municipal")));
    }
}
