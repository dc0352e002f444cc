use contracts::domain::feriado::NovoFeriado;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::feriados::api;
use crate::domain::feriados::ui::list::state::TIPOS_FERIADO;
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::parse_input_date;
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session, use_session};

/// Add-holiday modal.
#[component]
pub fn NovoFeriadoModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let (session, set_session) = use_session();

    let data = RwSignal::new(String::new());
    let nome = RwSignal::new(String::new());
    let tipo = RwSignal::new(TIPOS_FERIADO[0].to_string());

    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        let Some(data_feriado) = parse_input_date(&data.get()) else {
            set_form_error.set(Some("Informe uma data válida.".to_string()));
            return;
        };
        if nome.get().trim().is_empty() {
            set_form_error.set(Some("Informe o nome do feriado.".to_string()));
            return;
        }

        let novo = NovoFeriado {
            data: data_feriado,
            nome: nome.get().trim().to_string(),
            tipo: tipo.get(),
        };

        let token = session.get_untracked().token.unwrap_or_default();
        set_saving.set(true);

        spawn_local(async move {
            match api::criar(&token, &novo).await {
                Ok(()) => on_saved.run(()),
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("falha ao salvar feriado: {:?}", err);
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
                    <h2 class="modal__title">"Adicionar Novo Feriado"</h2>
                    <button class="button button--subtle" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label for="feriado-data">"Data:"</label>
                        <input
                            type="date"
                            id="feriado-data"
                            prop:value=move || data.get()
                            on:input=move |ev| data.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="feriado-nome">"Nome do Feriado:"</label>
                        <input
                            type="text"
                            id="feriado-nome"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                            required
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <label for="feriado-tipo">"Tipo:"</label>
                        <select
                            id="feriado-tipo"
                            on:change=move |ev| tipo.set(event_target_value(&ev))
                            prop:value=move || tipo.get()
                            disabled=move || saving.get()
                        >
                            {TIPOS_FERIADO.iter().map(|t| view! {
                                <option value=*t>{*t}</option>
                            }).collect_view()}
                        </select>
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
