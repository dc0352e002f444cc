pub mod state;

use contracts::system::usuario::Usuario;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::components::flash::{show_flash, FlashMessage};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_view::LoadOutcome;
use crate::system::auth::context::{expire_session, use_session};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use crate::system::users::ui::details::UsuarioFormModal;
use state::create_state;

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsuariosList />
        </RequireAdmin>
    }
}

#[component]
fn UsuariosList() -> impl IntoView {
    let (session, set_session) = use_session();
    let vm = create_state();
    let flash = RwSignal::new(Option::<String>::None);
    let (action_error, set_action_error) = signal(Option::<String>::None);
    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Usuario>> = RwSignal::new(None);

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

    let excluir = move |usuario: Usuario| {
        let confirmado = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Tem certeza que deseja EXCLUIR o usuário {}?",
                    usuario.nome
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
            match api::excluir(&token, usuario.id).await {
                Ok(()) => {
                    // Drop locally; the derived view clamps the page if the
                    // removal emptied it.
                    vm.update(|v| v.remove_record(&usuario.id));
                    show_flash(flash, "Usuário excluído com sucesso!");
                }
                Err(ApiError::Unauthorized) => expire_session(&set_session),
                Err(err) => {
                    log::error!("falha ao excluir usuário: {:?}", err);
                    set_action_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Gestão de Usuários"</h1>

            <section class="page__controls">
                <div class="filtro__group">
                    <input
                        type="text"
                        class="filtro__input"
                        placeholder="Buscar por Nome ou E-mail"
                        prop:value=move || vm.with(|v| v.criteria().busca.clone())
                        on:input=move |ev| {
                            let busca = event_target_value(&ev);
                            vm.update(|v| v.set_criteria(|c| c.busca = busca));
                        }
                    />
                </div>
                <button class="button button--secondary" on:click=move |_| load_data() disabled=loading>
                    {icon("refresh")}
                    " Atualizar"
                </button>
                <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                    {icon("plus")}
                    " Adicionar Novo Usuário"
                </button>
            </section>

            <FlashMessage flash=flash />
            {move || load_error().map(|e| view! { <p class="alert alert--error">{e}</p> })}
            {move || action_error.get().map(|e| view! { <p class="alert alert--error">{e}</p> })}

            <section class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"E-mail"</th>
                            <th>"Papel"</th>
                            <th>"Status"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let view = view_data();
                            if loading() {
                                view! { <tr><td colspan="5" class="table__empty">"Carregando..."</td></tr> }.into_any()
                            } else if view.rows.is_empty() {
                                view! { <tr><td colspan="5" class="table__empty">"Nenhum usuário encontrado."</td></tr> }.into_any()
                            } else {
                                view.rows.into_iter().map(|usuario| {
                                    let para_editar = usuario.clone();
                                    let para_excluir = usuario.clone();
                                    view! {
                                        <tr>
                                            <td>{usuario.nome.clone()}</td>
                                            <td>{usuario.email.clone()}</td>
                                            <td>{usuario.papel.to_string()}</td>
                                            <td class=if usuario.status { "status status--ativo" } else { "status status--inativo" }>
                                                {if usuario.status { "Ativo" } else { "Inativo" }}
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
                                                    class="button button--small button--danger"
                                                    on:click=move |_| excluir(para_excluir.clone())
                                                >
                                                    {icon("x")}
                                                    " Excluir"
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
                <UsuarioFormModal
                    usuario=None
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_saved=Callback::new(move |_salvo: Option<Usuario>| {
                        set_show_create.set(false);
                        show_flash(flash, "Usuário adicionado com sucesso!");
                        load_data();
                    })
                />
            })}

            {move || editing.get().map(|usuario| view! {
                <UsuarioFormModal
                    usuario=Some(usuario)
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |salvo: Option<Usuario>| {
                        editing.set(None);
                        if let Some(atualizado) = salvo {
                            vm.update(|v| v.patch_record(&atualizado.id, |_| atualizado.clone()));
                        }
                        show_flash(flash, "Usuário atualizado com sucesso!");
                    })
                />
            })}
        </div>
    }
}
