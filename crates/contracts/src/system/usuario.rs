use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role of a back-office account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Papel {
    Admin,
    Supervisor,
    User,
}

impl Papel {
    pub const ALL: [Papel; 3] = [Papel::Admin, Papel::Supervisor, Papel::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Papel::Admin => "admin",
            Papel::Supervisor => "supervisor",
            Papel::User => "user",
        }
    }
}

impl fmt::Display for Papel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Back-office account as served by `/usuarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub papel: Papel,
    pub status: bool,
}

/// Body for POST `/usuarios`.
#[derive(Debug, Clone, Serialize)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub papel: Papel,
    pub status: bool,
}

/// Body for PUT `/usuarios/:id`. `senha` is sent only when being changed.
#[derive(Debug, Clone, Serialize)]
pub struct AtualizarUsuario {
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub papel: Papel,
    pub status: bool,
}
