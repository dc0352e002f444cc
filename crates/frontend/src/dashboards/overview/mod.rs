use contracts::domain::inconsistencia::StatusInconsistencia;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{funcionarios, inconsistencias, marcacoes};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::{days_ago, format_date, parse_input_date, to_input_date, today};
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session, use_session};

fn fmt_count(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

/// Landing page: KPI counts plus the detection-run trigger.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let (session, set_session) = use_session();

    let (funcionarios_ativos, set_funcionarios_ativos) = signal(Option::<usize>::None);
    let (inconsistencias_abertas, set_inconsistencias_abertas) = signal(Option::<usize>::None);
    let (marcacoes_semana, set_marcacoes_semana) = signal(Option::<usize>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let load_counts = move || {
        let token = session.get_untracked().token.unwrap_or_default();
        set_load_error.set(None);
        spawn_local(async move {
            let funcionarios = funcionarios::api::listar(&token).await;
            let inconsistencias = inconsistencias::api::listar(&token, None, None).await;
            let marcacoes =
                marcacoes::api::listar(&token, Some(days_ago(7)), Some(today()), None).await;

            for err in [
                funcionarios.as_ref().err(),
                inconsistencias.as_ref().err(),
                marcacoes.as_ref().err(),
            ]
            .into_iter()
            .flatten()
            {
                if *err == ApiError::Unauthorized {
                    expire_session(&set_session);
                    return;
                }
                log::error!("falha ao carregar indicadores: {:?}", err);
                set_load_error.set(Some(err.to_string()));
            }

            if let Ok(lista) = funcionarios {
                set_funcionarios_ativos.set(Some(lista.iter().filter(|f| f.ativo).count()));
            }
            if let Ok(lista) = inconsistencias {
                set_inconsistencias_abertas.set(Some(
                    lista
                        .iter()
                        .filter(|i| i.status == StatusInconsistencia::Detectado)
                        .count(),
                ));
            }
            if let Ok(lista) = marcacoes {
                set_marcacoes_semana.set(Some(lista.len()));
            }
        });
    };

    Effect::new(move |_| load_counts());

    // Detection-run modal.
    let (show_detect, set_show_detect) = signal(false);
    let detection_date = RwSignal::new(to_input_date(today()));
    let (detecting, set_detecting) = signal(false);
    let (detect_message, set_detect_message) = signal(Option::<Result<String, String>>::None);

    let run_detection = move || {
        let Some(data) = parse_input_date(&detection_date.get_untracked()) else {
            set_detect_message.set(Some(Err("Informe uma data de referência válida.".to_string())));
            return;
        };
        let token = session.get_untracked().token.unwrap_or_default();
        set_detecting.set(true);
        set_detect_message.set(None);
        spawn_local(async move {
            match inconsistencias::api::detectar(&token, data).await {
                Ok(resultado) => {
                    set_detect_message.set(Some(Ok(format!(
                        "Detecção para {} concluída! {} novas inconsistências encontradas.",
                        format_date(data),
                        resultado.inconsistencias_detectadas
                    ))));
                    load_counts();
                }
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("detecção de inconsistências falhou: {:?}", err);
                    set_detect_message.set(Some(Err(err.to_string())));
                }
            }
            set_detecting.set(false);
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Dashboard"</h1>

            {move || load_error.get().map(|e| view! { <p class="alert alert--error">{e}</p> })}

            <section class="cards">
                <div class="card">
                    {icon("users")}
                    <span class="card__value">{move || fmt_count(funcionarios_ativos.get())}</span>
                    <span class="card__label">"Funcionários ativos"</span>
                </div>
                <div class="card">
                    {icon("alert-triangle")}
                    <span class="card__value">{move || fmt_count(inconsistencias_abertas.get())}</span>
                    <span class="card__label">"Inconsistências em aberto"</span>
                </div>
                <div class="card">
                    {icon("clock")}
                    <span class="card__value">{move || fmt_count(marcacoes_semana.get())}</span>
                    <span class="card__label">"Marcações nos últimos 7 dias"</span>
                </div>
            </section>

            <section class="page__controls">
                <button class="button button--primary" on:click=move |_| {
                    set_detect_message.set(None);
                    set_show_detect.set(true);
                }>
                    {icon("search")}
                    " Detectar Inconsistências"
                </button>
                <button class="button button--secondary" on:click=move |_| load_counts()>
                    {icon("refresh")}
                    " Atualizar"
                </button>
            </section>

            {move || show_detect.get().then(|| view! {
                <div class="modal-overlay" on:click=move |_| {
                    if !detecting.get_untracked() {
                        set_show_detect.set(false);
                    }
                }>
                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                        <div class="modal__header">
                            <h2 class="modal__title">"Executar Detecção de Inconsistências"</h2>
                            <button
                                class="button button--subtle"
                                on:click=move |_| set_show_detect.set(false)
                                disabled=move || detecting.get()
                            >
                                {icon("x")}
                            </button>
                        </div>

                        <div class="form__group">
                            <label for="detection-date">"Data de Referência:"</label>
                            <input
                                type="date"
                                id="detection-date"
                                prop:value=move || detection_date.get()
                                on:input=move |ev| detection_date.set(event_target_value(&ev))
                                disabled=move || detecting.get()
                            />
                        </div>

                        {move || detect_message.get().map(|message| match message {
                            Ok(texto) => view! { <p class="alert alert--success">{texto}</p> }.into_any(),
                            Err(texto) => view! { <p class="alert alert--error">{texto}</p> }.into_any(),
                        })}

                        <div class="modal__actions">
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_show_detect.set(false)
                                disabled=move || detecting.get()
                            >
                                "Fechar"
                            </button>
                            <button
                                class="button button--primary"
                                on:click=move |_| run_detection()
                                disabled=move || detecting.get()
                            >
                                {move || if detecting.get() { "Processando..." } else { "Executar Detecção" }}
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
