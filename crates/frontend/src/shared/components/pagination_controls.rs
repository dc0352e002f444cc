use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev/next pagination strip: "Página X de Y (N registros)".
///
/// Pages are 1-based. The buttons disable at the bounds; the view model
/// still ignores out-of-range requests that race past a stale total.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Página anterior"
            >
                {icon("chevron-left")}
                " Anterior"
            </button>
            <span class="pagination__info">
                {move || {
                    format!(
                        "Página {} de {} ({} registros)",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination__button"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Próxima página"
            >
                "Próxima "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
