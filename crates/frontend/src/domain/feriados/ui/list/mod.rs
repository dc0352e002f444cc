pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::feriados::api;
use crate::domain::feriados::ui::details::NovoFeriadoModal;
use crate::shared::components::flash::{show_flash, FlashMessage};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{end_of_year, format_date, parse_input_date, start_of_year, to_input_date};
use crate::shared::icons::icon;
use crate::shared::list_view::LoadOutcome;
use crate::system::auth::context::{expire_session, use_session};
use state::{create_state, TIPOS_FERIADO};

#[component]
pub fn FeriadosPage() -> impl IntoView {
    let (session, set_session) = use_session();
    let vm = create_state();
    let flash = RwSignal::new(Option::<String>::None);
    let (show_create, set_show_create) = signal(false);

    // Server-side range, seeded with the current year.
    let data_inicio = RwSignal::new(to_input_date(start_of_year()));
    let data_fim = RwSignal::new(to_input_date(end_of_year()));

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
            <h1 class="page__title">"Gestão de Feriados e Pontos Facultativos"</h1>

            <section class="page__controls">
                <div class="filtro__group">
                    <label for="data-inicio">"Data Início:"</label>
                    <input
                        type="date"
                        id="data-inicio"
                        class="filtro__input"
                        prop:value=move || data_inicio.get()
                        on:input=move |ev| data_inicio.set(event_target_value(&ev))
                    />
                </div>
                <div class="filtro__group">
                    <label for="data-fim">"Data Fim:"</label>
                    <input
                        type="date"
                        id="data-fim"
                        class="filtro__input"
                        prop:value=move || data_fim.get()
                        on:input=move |ev| data_fim.set(event_target_value(&ev))
                    />
                </div>
                <div class="filtro__group">
                    <label for="filtro-tipo">"Tipo de Feriado:"</label>
                    <select
                        id="filtro-tipo"
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
                        {TIPOS_FERIADO.iter().map(|tipo| view! {
                            <option value=*tipo>{*tipo}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button class="button button--secondary" on:click=move |_| load_data() disabled=loading>
                    {icon("filter")}
                    {move || if loading() { " Filtrando..." } else { " Filtrar" }}
                </button>
                <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                    {icon("plus")}
                    " Adicionar Novo Feriado"
                </button>
            </section>

            <FlashMessage flash=flash />
            {move || load_error().map(|e| view! { <p class="alert alert--error">{e}</p> })}

            <section class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Data"</th>
                            <th>"Nome do Feriado"</th>
                            <th>"Tipo"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view = view_data();
                            if loading() {
                                view! { <tr><td colspan="3" class="table__empty">"Carregando..."</td></tr> }.into_any()
                            } else if view.rows.is_empty() {
                                view! { <tr><td colspan="3" class="table__empty">"Nenhum feriado encontrado."</td></tr> }.into_any()
                            } else {
                                view.rows.into_iter().map(|feriado| view! {
                                    <tr>
                                        <td>{format_date(feriado.data)}</td>
                                        <td>{feriado.nome}</td>
                                        <td>{feriado.tipo}</td>
                                    </tr>
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

            {move || show_create.get().then(|| view! {
                <NovoFeriadoModal
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_saved=Callback::new(move |_| {
                        set_show_create.set(false);
                        show_flash(flash, "Feriado adicionado com sucesso!");
                        // Reload with the current range so the new entry shows up.
                        load_data();
                    })
                />
            })}
        </div>
    }
}
