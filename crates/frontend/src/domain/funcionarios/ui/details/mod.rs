use contracts::domain::funcionario::{Funcionario, FuncionarioForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::funcionarios::api;
use crate::shared::api_utils::ApiError;
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session, use_session};

fn some_if_filled(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Add/edit modal. `funcionario = None` creates, `Some` edits.
///
/// `on_saved` carries the updated record for edits (so the caller can
/// patch it in place) and `None` for creates (the caller re-fetches).
#[component]
pub fn FuncionarioFormModal(
    funcionario: Option<Funcionario>,
    on_close: Callback<()>,
    on_saved: Callback<Option<Funcionario>>,
) -> impl IntoView {
    let (session, set_session) = use_session();

    let editando = funcionario.clone();
    let titulo = if editando.is_some() {
        "Editar Funcionário"
    } else {
        "Adicionar Novo Funcionário"
    };

    let matricula = RwSignal::new(
        funcionario
            .as_ref()
            .map(|f| f.matricula.clone())
            .unwrap_or_default(),
    );
    let nome = RwSignal::new(funcionario.as_ref().map(|f| f.nome.clone()).unwrap_or_default());
    let escala = RwSignal::new(
        funcionario
            .as_ref()
            .map(|f| f.escala.clone())
            .unwrap_or_default(),
    );
    let cargo = RwSignal::new(
        funcionario
            .as_ref()
            .and_then(|f| f.cargo.clone())
            .unwrap_or_default(),
    );
    let contrato = RwSignal::new(
        funcionario
            .as_ref()
            .and_then(|f| f.contrato.clone())
            .unwrap_or_default(),
    );
    let ativo = RwSignal::new(funcionario.as_ref().map(|f| f.ativo).unwrap_or(true));

    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        if matricula.get().trim().is_empty()
            || nome.get().trim().is_empty()
            || escala.get().trim().is_empty()
        {
            set_form_error.set(Some("Matrícula, nome e escala são obrigatórios.".to_string()));
            return;
        }

        let form = FuncionarioForm {
            matricula: matricula.get().trim().to_string(),
            nome: nome.get().trim().to_string(),
            escala: escala.get().trim().to_string(),
            cargo: some_if_filled(cargo.get()),
            contrato: some_if_filled(contrato.get()),
            ativo: ativo.get(),
        };

        let token = session.get_untracked().token.unwrap_or_default();
        let editando = editando.clone();
        set_saving.set(true);

        spawn_local(async move {
            let result = match &editando {
                Some(existente) => api::atualizar(&token, existente.id, &form).await,
                None => api::criar(&token, &form).await,
            };
            match result {
                Ok(()) => {
                    let salvo = editando.map(|existente| Funcionario {
                        id: existente.id,
                        matricula: form.matricula.clone(),
                        nome: form.nome.clone(),
                        escala: form.escala.clone(),
                        cargo: form.cargo.clone(),
                        contrato: form.contrato.clone(),
                        ativo: form.ativo,
                    });
                    on_saved.run(salvo);
                }
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("falha ao salvar funcionário: {:?}", err);
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
                    <h2 class="modal__title">{titulo}</h2>
                    <button class="button button--subtle" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label for="matricula">"Matrícula:"</label>
                        <input
                            type="text"
                            id="matricula"
                            prop:value=move || matricula.get()
                            on:input=move |ev| matricula.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="nome">"Nome:"</label>
                        <input
                            type="text"
                            id="nome"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="escala">"Escala:"</label>
                        <input
                            type="text"
                            id="escala"
                            prop:value=move || escala.get()
                            on:input=move |ev| escala.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="cargo">"Cargo:"</label>
                        <input
                            type="text"
                            id="cargo"
                            prop:value=move || cargo.get()
                            on:input=move |ev| cargo.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="contrato">"Contrato:"</label>
                        <input
                            type="text"
                            id="contrato"
                            prop:value=move || contrato.get()
                            on:input=move |ev| contrato.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group form__group--inline">
                        <input
                            type="checkbox"
                            id="ativo"
                            prop:checked=move || ativo.get()
                            on:change=move |ev| ativo.set(event_target_checked(&ev))
                            disabled=move || saving.get()
                        />
                        <label for="ativo">"Ativo"</label>
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
