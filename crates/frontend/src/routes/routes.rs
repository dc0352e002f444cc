use leptos::prelude::*;

use crate::dashboards::overview::OverviewPage;
use crate::domain::feriados::ui::list::FeriadosPage;
use crate::domain::funcionarios::ui::list::FuncionariosPage;
use crate::domain::inconsistencias::ui::list::InconsistenciasPage;
use crate::domain::marcacoes::ui::list::RelatoriosPage;
use crate::layout::header::Header;
use crate::layout::navigation::{use_navigator, Route};
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsuariosPage;

#[component]
fn MainLayout() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <Header />
        <main class="app__content">
            {move || match navigator.current() {
                Route::Dashboard => view! { <OverviewPage /> }.into_any(),
                Route::Relatorios { funcionario } => {
                    view! { <RelatoriosPage funcionario=funcionario /> }.into_any()
                }
                Route::Inconsistencias { funcionario } => {
                    view! { <InconsistenciasPage funcionario=funcionario /> }.into_any()
                }
                Route::Funcionarios => view! { <FuncionariosPage /> }.into_any(),
                Route::Usuarios => view! { <UsuariosPage /> }.into_any(),
                Route::Feriados => view! { <FeriadosPage /> }.into_any(),
            }}
        </main>
    }
}

/// Root switch: a stored session shows the back office, anything else the
/// login screen. Session expiry flips this back automatically.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
