use contracts::system::usuario::{AtualizarUsuario, NovoUsuario, Papel, Usuario};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session, use_session};
use crate::system::users::api;

fn papel_from_label(value: &str) -> Papel {
    Papel::ALL
        .iter()
        .copied()
        .find(|p| p.as_str() == value)
        .unwrap_or(Papel::User)
}

/// Add/edit modal for back-office accounts. `usuario = None` creates.
///
/// The password pair is required on create and optional on edit (blank
/// keeps the current password). A confirmation mismatch is an inline form
/// error and never reaches the backend.
#[component]
pub fn UsuarioFormModal(
    usuario: Option<Usuario>,
    on_close: Callback<()>,
    on_saved: Callback<Option<Usuario>>,
) -> impl IntoView {
    let (session, set_session) = use_session();

    let editando = usuario.clone();
    let titulo = if editando.is_some() {
        "Editar Usuário"
    } else {
        "Adicionar Novo Usuário"
    };

    let nome = RwSignal::new(usuario.as_ref().map(|u| u.nome.clone()).unwrap_or_default());
    let email = RwSignal::new(usuario.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let senha = RwSignal::new(String::new());
    let confirmar_senha = RwSignal::new(String::new());
    let papel = RwSignal::new(usuario.as_ref().map(|u| u.papel).unwrap_or(Papel::User));
    let status = RwSignal::new(usuario.as_ref().map(|u| u.status).unwrap_or(true));

    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        if nome.get().trim().is_empty() || email.get().trim().is_empty() {
            set_form_error.set(Some("Nome e e-mail são obrigatórios.".to_string()));
            return;
        }
        if senha.get() != confirmar_senha.get() {
            set_form_error.set(Some("As senhas não coincidem.".to_string()));
            return;
        }
        if editando.is_none() && senha.get().is_empty() {
            set_form_error.set(Some("A senha é obrigatória para novos usuários.".to_string()));
            return;
        }

        let token = session.get_untracked().token.unwrap_or_default();
        let editando = editando.clone();
        set_saving.set(true);

        spawn_local(async move {
            let result = match &editando {
                Some(existente) => {
                    let body = AtualizarUsuario {
                        nome: nome.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        senha: {
                            let s = senha.get_untracked();
                            if s.is_empty() { None } else { Some(s) }
                        },
                        papel: papel.get_untracked(),
                        status: status.get_untracked(),
                    };
                    api::atualizar(&token, existente.id, &body).await
                }
                None => {
                    let body = NovoUsuario {
                        nome: nome.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        senha: senha.get_untracked(),
                        papel: papel.get_untracked(),
                        status: status.get_untracked(),
                    };
                    api::criar(&token, &body).await
                }
            };
            match result {
                Ok(()) => {
                    let salvo = editando.map(|existente| Usuario {
                        id: existente.id,
                        nome: nome.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        papel: papel.get_untracked(),
                        status: status.get_untracked(),
                    });
                    on_saved.run(salvo);
                }
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("falha ao salvar usuário: {:?}", err);
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
                        <label for="usuario-nome">"Nome:"</label>
                        <input
                            type="text"
                            id="usuario-nome"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="usuario-email">"E-mail:"</label>
                        <input
                            type="email"
                            id="usuario-email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="usuario-senha">"Senha:"</label>
                        <input
                            type="password"
                            id="usuario-senha"
                            prop:value=move || senha.get()
                            on:input=move |ev| senha.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="usuario-confirmar-senha">"Confirmar Senha:"</label>
                        <input
                            type="password"
                            id="usuario-confirmar-senha"
                            prop:value=move || confirmar_senha.get()
                            on:input=move |ev| confirmar_senha.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="usuario-papel">"Papel:"</label>
                        <select
                            id="usuario-papel"
                            on:change=move |ev| papel.set(papel_from_label(&event_target_value(&ev)))
                            prop:value=move || papel.get().as_str().to_string()
                            disabled=move || saving.get()
                        >
                            {Papel::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group form__group--inline">
                        <input
                            type="checkbox"
                            id="usuario-status"
                            prop:checked=move || status.get()
                            on:change=move |ev| status.set(event_target_checked(&ev))
                            disabled=move || saving.get()
                        />
                        <label for="usuario-status">"Ativo"</label>
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
