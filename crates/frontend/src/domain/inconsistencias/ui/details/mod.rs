use contracts::domain::inconsistencia::{AtualizarStatus, Inconsistencia, StatusInconsistencia};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::inconsistencias::api;
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session, use_session};

fn nome_funcionario(inconsistencia: &Inconsistencia) -> String {
    inconsistencia
        .funcionario
        .as_ref()
        .map(|f| f.nome.clone())
        .unwrap_or_else(|| "(funcionário não encontrado)".to_string())
}

/// Read-only details modal.
#[component]
pub fn DetalhesInconsistenciaModal(
    inconsistencia: Inconsistencia,
    on_close: Callback<()>,
) -> impl IntoView {
    let observacoes = inconsistencia
        .observacoes_resolucao
        .clone()
        .unwrap_or_else(|| "Nenhuma".to_string());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">"Detalhes da Inconsistência"</h2>
                    <button class="button button--subtle" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal__body">
                    <p><strong>"Data de Referência: "</strong>{format_date(inconsistencia.data_referencia)}</p>
                    <p><strong>"Funcionário: "</strong>{nome_funcionario(&inconsistencia)}</p>
                    <p><strong>"Tipo: "</strong>{inconsistencia.tipo_inconsistencia.clone()}</p>
                    <p><strong>"Mensagem: "</strong>{inconsistencia.mensagem_gerada.clone()}</p>
                    <p><strong>"Status: "</strong>{inconsistencia.status.to_string()}</p>
                    <p><strong>"Detectado em: "</strong>{format_datetime(&inconsistencia.detectado_em)}</p>
                    <p><strong>"Observações: "</strong>{observacoes}</p>
                </div>

                <div class="modal__actions">
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Fechar"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Change-status modal. On success `on_saved` carries the applied
/// `(new status, observações)` so the list can patch the record in place.
#[component]
pub fn MudarStatusModal(
    inconsistencia: Inconsistencia,
    on_close: Callback<()>,
    on_saved: Callback<(StatusInconsistencia, String)>,
) -> impl IntoView {
    let (session, set_session) = use_session();

    let novo_status = RwSignal::new(inconsistencia.status);
    let observacoes = RwSignal::new(
        inconsistencia
            .observacoes_resolucao
            .clone()
            .unwrap_or_default(),
    );
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let resumo = format!(
        "{} - {} ({})",
        nome_funcionario(&inconsistencia),
        inconsistencia.tipo_inconsistencia,
        format_date(inconsistencia.data_referencia),
    );
    let inconsistencia_id = inconsistencia.id;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        let sessao = session.get_untracked();
        let token = sessao.token.unwrap_or_default();
        let Some(usuario) = sessao.user else {
            set_form_error.set(Some("Sessão inválida. Faça login novamente.".to_string()));
            return;
        };

        let body = AtualizarStatus {
            new_status: novo_status.get(),
            observacoes: observacoes.get(),
            resolvido_por_id: usuario.id,
        };
        set_saving.set(true);

        spawn_local(async move {
            match api::atualizar_status(&token, inconsistencia_id, &body).await {
                Ok(()) => on_saved.run((body.new_status, body.observacoes.clone())),
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("falha ao atualizar status da inconsistência: {:?}", err);
                    set_form_error.set(Some(err.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">"Mudar Status da Inconsistência"</h2>
                    <button class="button button--subtle" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label>"Inconsistência:"</label>
                        <input type="text" prop:value=resumo readonly disabled />
                    </div>
                    <div class="form__group">
                        <label for="novo-status">"Novo Status:"</label>
                        <select
                            id="novo-status"
                            on:change=move |ev| {
                                let escolha = event_target_value(&ev);
                                if let Some(status) = StatusInconsistencia::ALL
                                    .iter()
                                    .find(|s| s.as_str() == escolha)
                                {
                                    novo_status.set(*status);
                                }
                            }
                            prop:value=move || novo_status.get().as_str().to_string()
                            disabled=move || saving.get()
                        >
                            {StatusInconsistencia::ALL.iter().map(|status| view! {
                                <option value=status.as_str()>{status.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label for="observacoes">"Observações:"</label>
                        <textarea
                            id="observacoes"
                            rows="4"
                            placeholder="Adicione observações sobre a mudança de status..."
                            prop:value=move || observacoes.get()
                            on:input=move |ev| observacoes.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        ></textarea>
                    </div>

                    {move || form_error.get().map(|e| view! { <p class="alert alert--error">{e}</p> })}

                    <div class="modal__actions">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_close.run(())
                            disabled=move || saving.get()
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" class="button button--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
