use leptos::prelude::*;

use crate::layout::navigation::Navigator;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // In-app navigation context for the whole back office.
    provide_context(Navigator::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
