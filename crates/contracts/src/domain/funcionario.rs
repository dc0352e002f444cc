use serde::{Deserialize, Serialize};

/// Employee roster record as served by `/funcionarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funcionario {
    pub id: i64,
    pub matricula: String,
    pub nome: String,
    pub escala: String,
    pub cargo: Option<String>,
    pub contrato: Option<String>,
    pub ativo: bool,
}

/// Create/update body for POST/PUT `/funcionarios[/:id]`.
#[derive(Debug, Clone, Serialize)]
pub struct FuncionarioForm {
    pub matricula: String,
    pub nome: String,
    pub escala: String,
    pub cargo: Option<String>,
    pub contrato: Option<String>,
    pub ativo: bool,
}

impl From<&Funcionario> for FuncionarioForm {
    fn from(f: &Funcionario) -> Self {
        Self {
            matricula: f.matricula.clone(),
            nome: f.nome.clone(),
            escala: f.escala.clone(),
            cargo: f.cargo.clone(),
            contrato: f.contrato.clone(),
            ativo: f.ativo,
        }
    }
}

/// Reduced employee projection nested inside punches and inconsistencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuncionarioResumo {
    pub id: i64,
    pub matricula: String,
    pub nome: String,
    #[serde(default)]
    pub escala: Option<String>,
}
