pub mod state;

use contracts::domain::marcacao::Marcacao;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::marcacoes::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{days_ago, format_date, parse_input_date, to_input_date, today};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_view::LoadOutcome;
use crate::system::auth::context::{expire_session, use_session};
use state::create_state;

impl CsvExportable for Marcacao {
    fn headers() -> Vec<&'static str> {
        vec![
            "Matrícula",
            "Nome",
            "Escala",
            "Data/Hora da Marcação",
            "Origem",
            "Data Extração",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let (matricula, nome, escala) = match &self.funcionario {
            Some(f) => (
                f.matricula.clone(),
                f.nome.clone(),
                f.escala.clone().unwrap_or_else(|| "-".to_string()),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        vec![
            matricula,
            nome,
            escala,
            format!("{} {}", format_date(self.data_marcacao), self.hora_marcacao),
            self.origem.clone(),
            format_date(self.data_extracao),
        ]
    }
}

/// Punch report screen. `funcionario` seeds the search box when arriving
/// from the employees screen.
#[component]
pub fn RelatoriosPage(funcionario: Option<String>) -> impl IntoView {
    let (session, set_session) = use_session();
    let vm = create_state();
    let (export_error, set_export_error) = signal(Option::<String>::None);

    // Server-side range, seeded with the last 7 days.
    let data_inicio = RwSignal::new(to_input_date(days_ago(7)));
    let data_fim = RwSignal::new(to_input_date(today()));

    if let Some(nome) = funcionario {
        vm.update(|v| v.set_criteria(|c| c.busca = nome));
    }

    let load_data = move || {
        let token = session.get_untracked().token.unwrap_or_default();
        let inicio = parse_input_date(&data_inicio.get_untracked());
        let fim = parse_input_date(&data_fim.get_untracked());
        // The backend also narrows by name; the same term keeps filtering
        // client-side after the fetch.
        let nome = vm.with_untracked(|v| {
            let busca = v.criteria().busca.trim().to_string();
            if busca.is_empty() { None } else { Some(busca) }
        });
        let Some(ticket) = vm.try_update(|v| v.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = api::listar(&token, inicio, fim, nome).await;
            if vm.try_update(|v| v.finish_load(ticket, result)) == Some(LoadOutcome::Reauthenticate)
            {
                expire_session(&set_session);
            }
        });
    };

    Effect::new(move |_| load_data());

    let view_data = move || vm.with(|v| v.derived_view());
    let loading = move || vm.with(|v| v.is_loading());
    let load_error = move || vm.with(|v| v.error().map(str::to_string));

    // Serializes the currently filtered set, not just the visible page.
    let handle_export = move || {
        set_export_error.set(None);
        let filtradas = vm.with_untracked(|v| v.filtered_records());
        if let Err(message) = export_csv(&filtradas, "relatorio_marcacoes.csv") {
            log::error!("exportação de CSV falhou: {}", message);
            set_export_error.set(Some(message));
        }
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Relatório de Marcações de Ponto"</h1>

            <section class="page__controls">
                <div class="filtro__group">
                    <label for="rel-data-inicio">"Data Início:"</label>
                    <input
                        type="date"
                        id="rel-data-inicio"
                        class="filtro__input"
                        prop:value=move || data_inicio.get()
                        on:input=move |ev| data_inicio.set(event_target_value(&ev))
                    />
                </div>
                <div class="filtro__group">
                    <label for="rel-data-fim">"Data Fim:"</label>
                    <input
                        type="date"
                        id="rel-data-fim"
                        class="filtro__input"
                        prop:value=move || data_fim.get()
                        on:input=move |ev| data_fim.set(event_target_value(&ev))
                    />
                </div>
                <div class="filtro__group">
                    <label for="rel-funcionario">"Funcionário:"</label>
                    <input
                        type="text"
                        id="rel-funcionario"
                        class="filtro__input"
                        placeholder="Nome ou Matrícula"
                        prop:value=move || vm.with(|v| v.criteria().busca.clone())
                        on:input=move |ev| {
                            let busca = event_target_value(&ev);
                            vm.update(|v| v.set_criteria(|c| c.busca = busca));
                        }
                    />
                </div>
                <button class="button button--secondary" on:click=move |_| load_data() disabled=loading>
                    {icon("filter")}
                    {move || if loading() { " Filtrando..." } else { " Filtrar" }}
                </button>
                <button class="button button--primary" on:click=move |_| handle_export() disabled=loading>
                    {icon("download")}
                    " Exportar CSV"
                </button>
            </section>

            {move || load_error().map(|e| view! { <p class="alert alert--error">{e}</p> })}
            {move || export_error.get().map(|e| view! { <p class="alert alert--error">{e}</p> })}

            <section class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Matrícula"</th>
                            <th>"Nome"</th>
                            <th>"Escala"</th>
                            <th>"Data/Hora da Marcação"</th>
                            <th>"Origem"</th>
                            <th>"Data Extração"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view = view_data();
                            if loading() {
                                view! { <tr><td colspan="6" class="table__empty">"Carregando..."</td></tr> }.into_any()
                            } else if view.rows.is_empty() {
                                view! { <tr><td colspan="6" class="table__empty">"Nenhuma marcação encontrada para os critérios selecionados."</td></tr> }.into_any()
                            } else {
                                view.rows.into_iter().map(|marcacao| {
                                    let (matricula, nome, escala) = match &marcacao.funcionario {
                                        Some(f) => (
                                            f.matricula.clone(),
                                            f.nome.clone(),
                                            f.escala.clone().unwrap_or_else(|| "-".to_string()),
                                        ),
                                        None => ("-".to_string(), "-".to_string(), "-".to_string()),
                                    };
                                    view! {
                                        <tr>
                                            <td>{matricula}</td>
                                            <td>{nome}</td>
                                            <td>{escala}</td>
                                            <td>{format!("{} {}", format_date(marcacao.data_marcacao), marcacao.hora_marcacao)}</td>
                                            <td>{marcacao.origem.clone()}</td>
                                            <td>{format_date(marcacao.data_extracao)}</td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </section>

            <Show when=move || (view_data().filtered_count > 0)>
                <PaginationControls
                    current_page=Signal::derive(move || view_data().page)
                    total_pages=Signal::derive(move || view_data().total_pages)
                    total_count=Signal::derive(move || view_data().filtered_count)
                    on_page_change=Callback::new(move |page| vm.update(|v| v.set_page(page)))
                />
            </Show>
        </div>
    }
}
