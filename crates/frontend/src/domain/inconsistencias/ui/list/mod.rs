pub mod state;

use contracts::domain::inconsistencia::{Inconsistencia, StatusInconsistencia};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::inconsistencias::api;
use crate::domain::inconsistencias::ui::details::{DetalhesInconsistenciaModal, MudarStatusModal};
use crate::shared::components::flash::{show_flash, FlashMessage};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_datetime, parse_input_date};
use crate::shared::icons::icon;
use crate::shared::list_view::LoadOutcome;
use crate::system::auth::context::{expire_session, use_session};
use state::{create_state, TIPOS_INCONSISTENCIA};

fn status_class(status: StatusInconsistencia) -> &'static str {
    match status {
        StatusInconsistencia::Detectado => "status status--aberto",
        StatusInconsistencia::EmAnalise => "status status--analise",
        StatusInconsistencia::Resolvido => "status status--resolvido",
    }
}

/// Inconsistencies screen. `funcionario` seeds the employee-name filter
/// when arriving from the employees screen.
#[component]
pub fn InconsistenciasPage(funcionario: Option<String>) -> impl IntoView {
    let (session, set_session) = use_session();
    let vm = create_state();
    let flash = RwSignal::new(Option::<String>::None);
    let detalhes: RwSignal<Option<Inconsistencia>> = RwSignal::new(None);
    let mudando_status: RwSignal<Option<Inconsistencia>> = RwSignal::new(None);

    // Server-side reference-date range.
    let data_inicio = RwSignal::new(String::new());
    let data_fim = RwSignal::new(String::new());

    if let Some(nome) = funcionario {
        vm.update(|v| v.set_criteria(|c| c.funcionario = nome));
    }

    let load_data = move || {
        let token = session.get_untracked().token.unwrap_or_default();
        let inicio = parse_input_date(&data_inicio.get_untracked());
        let fim = parse_input_date(&data_fim.get_untracked());
        let Some(ticket) = vm.try_update(|v| v.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = api::listar(&token, inicio, fim).await;
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

    view! {
        <div class="page">
            <h1 class="page__title">"Gestão de Inconsistências"</h1>

            <section class="page__controls">
                <div class="filtro__group">
                    <label for="inc-data-inicio">"Data Ref. Início:"</label>
                    <input
                        type="date"
                        id="inc-data-inicio"
                        class="filtro__input"
                        prop:value=move || data_inicio.get()
                        on:input=move |ev| data_inicio.set(event_target_value(&ev))
                    />
                </div>
                <div class="filtro__group">
                    <label for="inc-data-fim">"Data Ref. Fim:"</label>
                    <input
                        type="date"
                        id="inc-data-fim"
                        class="filtro__input"
                        prop:value=move || data_fim.get()
                        on:input=move |ev| data_fim.set(event_target_value(&ev))
                    />
                </div>
                <div class="filtro__group">
                    <label for="inc-funcionario">"Funcionário:"</label>
                    <input
                        type="text"
                        id="inc-funcionario"
                        class="filtro__input"
                        placeholder="Nome do Funcionário"
                        prop:value=move || vm.with(|v| v.criteria().funcionario.clone())
                        on:input=move |ev| {
                            let nome = event_target_value(&ev);
                            vm.update(|v| v.set_criteria(|c| c.funcionario = nome));
                        }
                    />
                </div>
                <div class="filtro__group">
                    <label for="inc-status">"Status:"</label>
                    <select
                        id="inc-status"
                        class="filtro__input"
                        on:change=move |ev| {
                            let escolha = event_target_value(&ev);
                            let status = StatusInconsistencia::ALL
                                .iter()
                                .find(|s| s.as_str() == escolha)
                                .copied();
                            vm.update(|v| v.set_criteria(|c| c.status = status));
                        }
                        prop:value=move || {
                            vm.with(|v| {
                                v.criteria()
                                    .status
                                    .map(|s| s.as_str().to_string())
                                    .unwrap_or_else(|| "Todos".to_string())
                            })
                        }
                    >
                        <option value="Todos">"Todos"</option>
                        {StatusInconsistencia::ALL.iter().map(|status| view! {
                            <option value=status.as_str()>{status.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="filtro__group">
                    <label for="inc-tipo">"Tipo:"</label>
                    <select
                        id="inc-tipo"
                        class="filtro__input"
                        on:change=move |ev| {
                            let escolha = event_target_value(&ev);
                            let tipo = if escolha == "Todos" { None } else { Some(escolha) };
                            vm.update(|v| v.set_criteria(|c| c.tipo = tipo));
                        }
                        prop:value=move || {
                            vm.with(|v| v.criteria().tipo.clone().unwrap_or_else(|| "Todos".to_string()))
                        }
                    >
                        <option value="Todos">"Todos"</option>
                        {TIPOS_INCONSISTENCIA.iter().map(|tipo| view! {
                            <option value=*tipo>{*tipo}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button class="button button--secondary" on:click=move |_| load_data() disabled=loading>
                    {icon("filter")}
                    {move || if loading() { " Filtrando..." } else { " Filtrar" }}
                </button>
            </section>

            <FlashMessage flash=flash />
            {move || load_error().map(|e| view! { <p class="alert alert--error">{e}</p> })}

            <section class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Data Ref."</th>
                            <th>"Funcionário"</th>
                            <th>"Tipo"</th>
                            <th>"Mensagem"</th>
                            <th>"Status"</th>
                            <th>"Detectado em"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view = view_data();
                            if loading() {
                                view! { <tr><td colspan="7" class="table__empty">"Carregando..."</td></tr> }.into_any()
                            } else if view.rows.is_empty() {
                                view! { <tr><td colspan="7" class="table__empty">"Nenhuma inconsistência encontrada."</td></tr> }.into_any()
                            } else {
                                view.rows.into_iter().map(|inconsistencia| {
                                    let nome = inconsistencia
                                        .funcionario
                                        .as_ref()
                                        .map(|f| f.nome.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    let para_detalhes = inconsistencia.clone();
                                    let para_status = inconsistencia.clone();
                                    view! {
                                        <tr>
                                            <td>{format_date(inconsistencia.data_referencia)}</td>
                                            <td>{nome}</td>
                                            <td>{inconsistencia.tipo_inconsistencia.clone()}</td>
                                            <td>{inconsistencia.mensagem_gerada.clone()}</td>
                                            <td class=status_class(inconsistencia.status)>
                                                {inconsistencia.status.to_string()}
                                            </td>
                                            <td>{format_datetime(&inconsistencia.detectado_em)}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| detalhes.set(Some(para_detalhes.clone()))
                                                >
                                                    "Detalhes"
                                                </button>
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| mudando_status.set(Some(para_status.clone()))
                                                >
                                                    "Mudar Status"
                                                </button>
                                            </td>
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

            {move || detalhes.get().map(|inconsistencia| view! {
                <DetalhesInconsistenciaModal
                    inconsistencia=inconsistencia
                    on_close=Callback::new(move |_| detalhes.set(None))
                />
            })}

            {move || mudando_status.get().map(|inconsistencia| {
                let id = inconsistencia.id;
                view! {
                    <MudarStatusModal
                        inconsistencia=inconsistencia
                        on_close=Callback::new(move |_| mudando_status.set(None))
                        on_saved=Callback::new(move |(status, observacoes): (StatusInconsistencia, String)| {
                            mudando_status.set(None);
                            // Patch the record locally instead of re-fetching.
                            vm.update(|v| {
                                v.patch_record(&id, |inc| {
                                    let mut inc = inc.clone();
                                    inc.status = status;
                                    inc.observacoes_resolucao = if observacoes.is_empty() {
                                        None
                                    } else {
                                        Some(observacoes.clone())
                                    };
                                    inc
                                })
                            });
                            show_flash(flash, "Status atualizado com sucesso!");
                        })
                    />
                }
            })}
        </div>
    }
}
