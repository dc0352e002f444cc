use leptos::prelude::*;

use crate::layout::navigation::{use_navigator, Route};
use crate::shared::icons::icon;
use crate::system::auth::context::{close_session, use_session};

const LINKS: [(&str, fn() -> Route); 6] = [
    ("Dashboard", || Route::Dashboard),
    ("Relatórios", || Route::Relatorios { funcionario: None }),
    ("Inconsistências", || Route::Inconsistencias { funcionario: None }),
    ("Funcionários", || Route::Funcionarios),
    ("Usuários", || Route::Usuarios),
    ("Feriados", || Route::Feriados),
];

/// Top navigation bar: screen links, greeting, logout.
#[component]
pub fn Header() -> impl IntoView {
    let (session, set_session) = use_session();
    let navigator = use_navigator();

    let primeiro_nome = move || {
        session
            .get()
            .user
            .map(|u| u.primeiro_nome().to_string())
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <span class="header__logo" on:click=move |_| navigator.go(Route::Dashboard)>
                "Ponto Certo"
            </span>
            <nav class="header__nav">
                {LINKS.into_iter().map(|(label, target)| {
                    let is_active = move || navigator.current().same_screen(&target());
                    view! {
                        <a
                            class="header__link"
                            class:header__link--active=is_active
                            on:click=move |_| navigator.go(target())
                        >
                            {label}
                        </a>
                    }
                }).collect_view()}
            </nav>
            <div class="header__session">
                <span class="header__user">{move || format!("Olá, {}", primeiro_nome())}</span>
                <button class="header__logout" on:click=move |_| close_session(&set_session)>
                    {icon("logout")}
                    " Sair"
                </button>
            </div>
        </header>
    }
}
