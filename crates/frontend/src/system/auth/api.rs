use contracts::common::{DataEnvelope, ErrorBody};
use contracts::system::auth::{Credenciais, SessaoAberta};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Open a session with email and password.
///
/// Unlike the authenticated helpers, a 401 here is a wrong password, not
/// an expired session, so every non-2xx answer becomes an inline message.
pub async fn login(email: String, senha: String) -> Result<SessaoAberta, String> {
    let credenciais = Credenciais { email, senha };

    let response = Request::post(&api_url("/usuarios/login"))
        .json(&credenciais)
        .map_err(|e| format!("Falha ao montar a requisição: {}", e))?
        .send()
        .await
        .map_err(|_| "Não foi possível conectar ao servidor. Tente novamente mais tarde.".to_string())?;

    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "E-mail ou senha inválidos".to_string());
        return Err(message);
    }

    response
        .json::<DataEnvelope<SessaoAberta>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Resposta inesperada do servidor: {}", e))
}
