use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FLASH_MS: u32 = 4000;

/// Show a success message and clear it after a few seconds.
pub fn show_flash(flash: RwSignal<Option<String>>, message: impl Into<String>) {
    flash.set(Some(message.into()));
    spawn_local(async move {
        TimeoutFuture::new(FLASH_MS).await;
        flash.set(None);
    });
}

/// Banner rendered while a flash message is set.
#[component]
pub fn FlashMessage(flash: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || flash.get().map(|message| view! {
            <div class="alert alert--success">{message}</div>
        })}
    }
}
