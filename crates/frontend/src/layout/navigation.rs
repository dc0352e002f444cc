use leptos::prelude::*;

/// The screens of the back office. The employee-name payloads carry the
/// cross-page filter ("show punches / inconsistencies for this employee")
/// into the target screen's initial criteria.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Dashboard,
    Relatorios { funcionario: Option<String> },
    Inconsistencias { funcionario: Option<String> },
    Funcionarios,
    Usuarios,
    Feriados,
}

impl Route {
    /// Same screen, ignoring any seeded filter parameter.
    pub fn same_screen(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// In-app navigation handle, provided as context at the root.
#[derive(Clone, Copy)]
pub struct Navigator(RwSignal<Route>);

impl Navigator {
    pub fn new() -> Self {
        Self(RwSignal::new(Route::Dashboard))
    }

    pub fn go(&self, route: Route) {
        self.0.set(route);
    }

    pub fn current(&self) -> Route {
        self.0.get()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in context")
}
