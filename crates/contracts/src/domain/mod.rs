pub mod feriado;
pub mod funcionario;
pub mod inconsistencia;
pub mod marcacao;
