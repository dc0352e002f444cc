use contracts::system::usuario::Usuario;
use leptos::prelude::*;

use crate::shared::list_view::{FilterCriteria, ListRecord, ListViewModel, DEFAULT_PAGE_SIZE};

impl ListRecord for Usuario {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

/// One search box matching name OR e-mail.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FiltroUsuarios {
    pub busca: String,
}

impl FilterCriteria for FiltroUsuarios {
    type Record = Usuario;

    fn matches(&self, usuario: &Usuario) -> bool {
        let busca = self.busca.trim().to_lowercase();
        busca.is_empty()
            || usuario.nome.to_lowercase().contains(&busca)
            || usuario.email.to_lowercase().contains(&busca)
    }
}

pub fn create_state() -> RwSignal<ListViewModel<FiltroUsuarios>> {
    RwSignal::new(ListViewModel::new(DEFAULT_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::usuario::Papel;

    fn usuario(id: i64, nome: &str, email: &str) -> Usuario {
        Usuario {
            id,
            nome: nome.to_string(),
            email: email.to_string(),
            papel: Papel::User,
            status: true,
        }
    }

    #[test]
    fn busca_matches_nome_or_email() {
        let filtro = FiltroUsuarios {
            busca: "empresa.com".to_string(),
        };
        assert!(filtro.matches(&usuario(1, "Ana", "ana@empresa.com")));
        assert!(!filtro.matches(&usuario(2, "Bia", "bia@outra.org")));

        let por_nome = FiltroUsuarios {
            busca: "BIA".to_string(),
        };
        assert!(por_nome.matches(&usuario(2, "Bia", "bia@outra.org")));
    }
}
