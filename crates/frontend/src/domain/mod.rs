pub mod feriados;
pub mod funcionarios;
pub mod inconsistencias;
pub mod marcacoes;
