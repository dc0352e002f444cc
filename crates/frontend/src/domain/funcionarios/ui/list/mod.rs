pub mod state;

use contracts::domain::funcionario::{Funcionario, FuncionarioForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::funcionarios::api;
use crate::domain::funcionarios::ui::details::FuncionarioFormModal;
use crate::layout::navigation::{use_navigator, Route};
use crate::shared::api_utils::ApiError;
use crate::shared::components::flash::{show_flash, FlashMessage};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_view::LoadOutcome;
use crate::system::auth::context::{expire_session, use_session};
use state::{create_state, FiltroAtivo};

#[component]
pub fn FuncionariosPage() -> impl IntoView {
    let (session, set_session) = use_session();
    let navigator = use_navigator();
    let vm = create_state();
    let flash = RwSignal::new(Option::<String>::None);
    let (action_error, set_action_error) = signal(Option::<String>::None);
    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Funcionario>> = RwSignal::new(None);

    let load_data = move || {
        let token = session.get_untracked().token.unwrap_or_default();
        let Some(ticket) = vm.try_update(|v| v.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = api::listar(&token).await;
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

    let toggle_ativo = move |funcionario: Funcionario| {
        let confirmado = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Tem certeza que deseja {} o funcionário {}?",
                    if funcionario.ativo { "DESATIVAR" } else { "ATIVAR" },
                    funcionario.nome
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmado {
            return;
        }

        let token = session.get_untracked().token.unwrap_or_default();
        set_action_error.set(None);
        spawn_local(async move {
            let mut form = FuncionarioForm::from(&funcionario);
            form.ativo = !funcionario.ativo;
            match api::atualizar(&token, funcionario.id, &form).await {
                Ok(()) => {
                    // Reflect the change locally instead of re-fetching.
                    vm.update(|v| {
                        v.patch_record(&funcionario.id, |f| {
                            let mut f = f.clone();
                            f.ativo = !f.ativo;
                            f
                        })
                    });
                    show_flash(
                        flash,
                        if form.ativo {
                            "Funcionário ativado com sucesso!"
                        } else {
                            "Funcionário desativado com sucesso!"
                        },
                    );
                }
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("falha ao alternar status do funcionário: {:?}", err);
                    set_action_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Gestão de Funcionários"</h1>

            <section class="page__controls">
                <div class="filtro__group">
                    <input
                        type="text"
                        class="filtro__input"
                        placeholder="Buscar por Nome ou Matrícula"
                        prop:value=move || vm.with(|v| v.criteria().busca.clone())
                        on:input=move |ev| {
                            let busca = event_target_value(&ev);
                            vm.update(|v| v.set_criteria(|c| c.busca = busca));
                        }
                    />
                </div>
                <div class="filtro__group">
                    <label for="filtro-ativo">"Status:"</label>
                    <select
                        id="filtro-ativo"
                        class="filtro__input"
                        on:change=move |ev| {
                            let escolha = FiltroAtivo::from_label(&event_target_value(&ev));
                            vm.update(|v| v.set_criteria(|c| c.ativo = escolha));
                        }
                        prop:value=move || vm.with(|v| v.criteria().ativo.label().to_string())
                    >
                        {FiltroAtivo::ALL.iter().map(|opcao| view! {
                            <option value=opcao.label()>{opcao.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button class="button button--secondary" on:click=move |_| load_data() disabled=loading>
                    {icon("refresh")}
                    " Atualizar"
                </button>
                <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                    {icon("plus")}
                    " Adicionar Novo Funcionário"
                </button>
            </section>

            <FlashMessage flash=flash />
            {move || load_error().map(|e| view! { <p class="alert alert--error">{e}</p> })}
            {move || action_error.get().map(|e| view! { <p class="alert alert--error">{e}</p> })}

            <section class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Matrícula"</th>
                            <th>"Nome"</th>
                            <th>"Escala"</th>
                            <th>"Cargo"</th>
                            <th>"Contrato"</th>
                            <th>"Status"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view = view_data();
                            if loading() {
                                view! { <tr><td colspan="7" class="table__empty">"Carregando..."</td></tr> }.into_any()
                            } else if view.rows.is_empty() {
                                view! { <tr><td colspan="7" class="table__empty">"Nenhum funcionário encontrado."</td></tr> }.into_any()
                            } else {
                                view.rows.into_iter().map(|funcionario| {
                                    let para_editar = funcionario.clone();
                                    let para_toggle = funcionario.clone();
                                    let nome_marcacoes = funcionario.nome.clone();
                                    let nome_inconsistencias = funcionario.nome.clone();
                                    view! {
                                        <tr>
                                            <td>{funcionario.matricula.clone()}</td>
                                            <td>{funcionario.nome.clone()}</td>
                                            <td>{funcionario.escala.clone()}</td>
                                            <td>{funcionario.cargo.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{funcionario.contrato.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td class=if funcionario.ativo { "status status--ativo" } else { "status status--inativo" }>
                                                {if funcionario.ativo { "Ativo" } else { "Inativo" }}
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| editing.set(Some(para_editar.clone()))
                                                >
                                                    {icon("edit")}
                                                    " Editar"
                                                </button>
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| toggle_ativo(para_toggle.clone())
                                                >
                                                    {if funcionario.ativo { "Desativar" } else { "Ativar" }}
                                                </button>
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| navigator.go(Route::Relatorios {
                                                        funcionario: Some(nome_marcacoes.clone()),
                                                    })
                                                >
                                                    "Marcações"
                                                </button>
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| navigator.go(Route::Inconsistencias {
                                                        funcionario: Some(nome_inconsistencias.clone()),
                                                    })
                                                >
                                                    "Inconsist."
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

            {move || show_create.get().then(|| view! {
                <FuncionarioFormModal
                    funcionario=None
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_saved=Callback::new(move |_salvo: Option<Funcionario>| {
                        set_show_create.set(false);
                        show_flash(flash, "Funcionário adicionado com sucesso!");
                        load_data();
                    })
                />
            })}

            {move || editing.get().map(|funcionario| view! {
                <FuncionarioFormModal
                    funcionario=Some(funcionario)
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |salvo: Option<Funcionario>| {
                        editing.set(None);
                        if let Some(atualizado) = salvo {
                            vm.update(|v| v.patch_record(&atualizado.id, |_| atualizado.clone()));
                        }
                        show_flash(flash, "Funcionário atualizado com sucesso!");
                    })
                />
            })}
        </div>
    }
}
