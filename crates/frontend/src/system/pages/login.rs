use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::navigation::{use_navigator, Route};
use crate::system::auth::{api, context::open_session, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (mostrar_senha, set_mostrar_senha) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_session) = use_session();
    let navigator = use_navigator();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let senha_val = senha.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, senha_val).await {
                Ok(sessao) => {
                    open_session(&set_session, sessao);
                    navigator.go(Route::Dashboard);
                    set_is_loading.set(false);
                }
                Err(message) => {
                    log::error!("login falhou: {}", message);
                    set_error_message.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login">
            <div class="login__card">
                <h1 class="login__title">"Bem-vindo!"</h1>
                <p class="login__subtitle">"Faça login para continuar"</p>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="seu.email@empresa.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label for="senha">"Senha"</label>
                        <div class="login__password">
                            <input
                                type=move || if mostrar_senha.get() { "text" } else { "password" }
                                id="senha"
                                placeholder="********"
                                prop:value=move || senha.get()
                                on:input=move |ev| set_senha.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="login__toggle-senha"
                                on:click=move |_| set_mostrar_senha.update(|v| *v = !*v)
                                disabled=move || is_loading.get()
                            >
                                {move || if mostrar_senha.get() { "Ocultar" } else { "Mostrar" }}
                            </button>
                        </div>
                    </div>

                    {move || error_message.get().map(|message| view! {
                        <p class="alert alert--error">{message}</p>
                    })}

                    <button type="submit" class="login__submit" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
