use leptos::prelude::*;

use super::context::use_session;

/// Component that requires the `admin` role.
/// Shows an access-denied notice otherwise.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().is_admin()
            fallback=|| view! {
                <div class="alert alert--error">
                    "Acesso negado. Você não tem permissão para ver esta página."
                </div>
            }
        >
            {children()}
        </Show>
    }
}
