use serde::{Deserialize, Serialize};

use crate::system::usuario::Papel;

/// Body for POST `/usuarios/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credenciais {
    pub email: String,
    pub senha: String,
}

/// `{token, user}` payload delivered inside the login `{data}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SessaoAberta {
    pub token: String,
    pub user: UsuarioSessao,
}

/// Identity of the logged-in user, persisted alongside the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioSessao {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub papel: Papel,
}

impl UsuarioSessao {
    /// First name, for the header greeting.
    pub fn primeiro_nome(&self) -> &str {
        self.nome.split_whitespace().next().unwrap_or(&self.nome)
    }

    pub fn is_admin(&self) -> bool {
        self.papel == Papel::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primeiro_nome_takes_first_word() {
        let user = UsuarioSessao {
            id: 1,
            nome: "Mariana Costa e Silva".to_string(),
            email: "mariana@empresa.com".to_string(),
            papel: Papel::Supervisor,
        };
        assert_eq!(user.primeiro_nome(), "Mariana");
    }
}
