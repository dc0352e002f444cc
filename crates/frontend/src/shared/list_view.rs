//! Generic client-side filter-and-paginate view model.
//!
//! Every record-listing screen (funcionários, feriados, inconsistências,
//! marcações, usuários) holds one [`ListViewModel`] in an `RwSignal`: the
//! full record set fetched for the current server-side query, the screen's
//! filter criteria, and the 1-based page number. The filtered and paged
//! view is recomputed on demand by [`ListViewModel::derived_view`], never
//! stored, so it cannot drift out of sync with its inputs.
//!
//! The model is pure and synchronous. The async fetch lives in the UI
//! layer; [`ListViewModel::begin_load`]/[`ListViewModel::finish_load`]
//! only do the bookkeeping, and the generation ticket makes the last
//! *issued* load win when responses resolve out of order.

use crate::shared::api_utils::ApiError;

/// Rows per page on every listing screen.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A record that can live in a [`ListViewModel`].
pub trait ListRecord: Clone {
    type Id: PartialEq + Clone;

    fn record_id(&self) -> Self::Id;
}

/// A screen's filter state: a pure predicate over its record type.
///
/// The `Default` value must match every record (all criteria "Todos" /
/// empty).
pub trait FilterCriteria: Clone + Default {
    type Record: ListRecord;

    fn matches(&self, record: &Self::Record) -> bool;
}

/// Ticket identifying one issued load; stale tickets are ignored on
/// completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What a completed load did to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records replaced, page reset to 1.
    Loaded,
    /// The backend rejected the session (401/403): the caller must clear
    /// credentials and route to the login screen.
    Reauthenticate,
    /// Load failed; [`ListViewModel::error`] carries the user message.
    Failed,
    /// A newer load was issued meanwhile; this response was discarded.
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadPhase {
    Idle,
    Loading,
    Failed(String),
}

/// The filtered-and-paged slice actually rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedView<R> {
    pub filtered_count: usize,
    pub total_pages: usize,
    /// Effective page, clamped into `[1, total_pages]`.
    pub page: usize,
    pub rows: Vec<R>,
}

#[derive(Clone)]
pub struct ListViewModel<C: FilterCriteria> {
    records: Vec<C::Record>,
    criteria: C,
    page: usize,
    page_size: usize,
    phase: LoadPhase,
    issued: u64,
}

impl<C: FilterCriteria> ListViewModel<C> {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            criteria: C::default(),
            page: 1,
            page_size: page_size.max(1),
            phase: LoadPhase::Idle,
            issued: 0,
        }
    }

    /// Mark a load as in flight and hand out its ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.phase = LoadPhase::Loading;
        LoadTicket(self.issued)
    }

    /// Settle a load. Responses for anything but the latest issued ticket
    /// are stale and leave the model untouched — the newer in-flight load
    /// still owns the loading flag.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<C::Record>, ApiError>,
    ) -> LoadOutcome {
        if ticket.0 != self.issued {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.page = 1;
                self.phase = LoadPhase::Idle;
                LoadOutcome::Loaded
            }
            Err(ApiError::Unauthorized) => {
                self.records.clear();
                self.phase = LoadPhase::Idle;
                LoadOutcome::Reauthenticate
            }
            Err(err) => {
                self.records.clear();
                self.phase = LoadPhase::Failed(err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    /// Requested page. Rendering uses [`DerivedView::page`], which is the
    /// same value clamped against the current filtered count.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Update one or more criteria fields. Any criteria change invalidates
    /// the meaning of the current page, so the page always resets to 1.
    pub fn set_criteria(&mut self, apply: impl FnOnce(&mut C)) {
        apply(&mut self.criteria);
        self.page = 1;
    }

    /// Move to `page` if it exists; out-of-range requests are ignored
    /// (prev/next affordances disable at the bounds, but a stale
    /// `total_pages` can still race past them).
    pub fn set_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.page = page;
        }
    }

    /// Replace the record with `id` by `updater`'s result, keeping its
    /// position. Used to reflect a successful update mutation without a
    /// re-fetch.
    pub fn patch_record(
        &mut self,
        id: &<C::Record as ListRecord>::Id,
        updater: impl FnOnce(&C::Record) -> C::Record,
    ) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.record_id() == *id) {
            *slot = updater(slot);
        }
    }

    /// Drop the record with `id`. Page clamping is left to
    /// [`Self::derived_view`].
    pub fn remove_record(&mut self, id: &<C::Record as ListRecord>::Id) {
        self.records.retain(|r| r.record_id() != *id);
    }

    /// The full filtered set in record order (e.g. for CSV export).
    pub fn filtered_records(&self) -> Vec<C::Record> {
        self.filtered().cloned().collect()
    }

    pub fn total_pages(&self) -> usize {
        pages_for(self.filtered().count(), self.page_size)
    }

    /// Recompute the rendered view from scratch: filter, clamp the page,
    /// slice. Pure and cheap enough to call per render.
    pub fn derived_view(&self) -> DerivedView<C::Record> {
        let filtered: Vec<&C::Record> = self.filtered().collect();
        let filtered_count = filtered.len();
        let total_pages = pages_for(filtered_count, self.page_size);
        let page = self.page.clamp(1, total_pages);
        let rows = filtered
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();
        DerivedView {
            filtered_count,
            total_pages,
            page,
            rows,
        }
    }

    fn filtered(&self) -> impl Iterator<Item = &C::Record> + '_ {
        self.records.iter().filter(|r| self.criteria.matches(r))
    }
}

fn pages_for(count: usize, page_size: usize) -> usize {
    if count == 0 {
        1
    } else {
        count.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Pessoa {
        id: i64,
        nome: String,
        ativo: bool,
    }

    impl ListRecord for Pessoa {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Filtro {
        busca: String,
        apenas_ativos: bool,
    }

    impl FilterCriteria for Filtro {
        type Record = Pessoa;

        fn matches(&self, p: &Pessoa) -> bool {
            let busca = self.busca.trim().to_lowercase();
            let busca_ok = busca.is_empty() || p.nome.to_lowercase().contains(&busca);
            busca_ok && (!self.apenas_ativos || p.ativo)
        }
    }

    fn pessoa(id: i64, nome: &str) -> Pessoa {
        Pessoa {
            id,
            nome: nome.to_string(),
            ativo: true,
        }
    }

    fn loaded(records: Vec<Pessoa>) -> ListViewModel<Filtro> {
        let mut vm = ListViewModel::new(DEFAULT_PAGE_SIZE);
        let ticket = vm.begin_load();
        assert_eq!(vm.finish_load(ticket, Ok(records)), LoadOutcome::Loaded);
        vm
    }

    fn roster(n: i64) -> Vec<Pessoa> {
        (1..=n).map(|i| pessoa(i, &format!("Pessoa {i}"))).collect()
    }

    #[test]
    fn identity_filter_returns_everything_in_order() {
        let vm = loaded(vec![pessoa(1, "Bia"), pessoa(2, "Ana"), pessoa(3, "Caio")]);
        let view = vm.derived_view();
        assert_eq!(view.filtered_count, 3);
        let ids: Vec<i64> = view.rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn substring_filter_is_case_insensitive_and_order_preserving() {
        let mut vm = loaded(vec![
            pessoa(1, "Ana Silva"),
            pessoa(2, "Carlos"),
            pessoa(3, "Mariana Costa"),
        ]);
        vm.set_criteria(|c| c.busca = "ana".to_string());
        let view = vm.derived_view();
        let nomes: Vec<&str> = view.rows.iter().map(|p| p.nome.as_str()).collect();
        assert_eq!(nomes, vec!["Ana Silva", "Mariana Costa"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut vm = loaded(vec![
            pessoa(1, "Ana Silva"),
            pessoa(2, "Carlos"),
            pessoa(3, "Mariana Costa"),
        ]);
        vm.set_criteria(|c| c.busca = "ana".to_string());
        let once = vm.filtered_records();
        let mut again = loaded(once.clone());
        again.set_criteria(|c| c.busca = "ana".to_string());
        assert_eq!(again.filtered_records(), once);
    }

    #[test]
    fn empty_filtered_set_still_has_one_page() {
        let mut vm = loaded(roster(5));
        vm.set_criteria(|c| c.busca = "zzz".to_string());
        let view = vm.derived_view();
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn twenty_five_records_paginate_into_three_pages() {
        let mut vm = loaded(roster(25));
        assert_eq!(vm.derived_view().total_pages, 3);

        vm.set_page(3);
        let view = vm.derived_view();
        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, 21);

        vm.set_page(4);
        assert_eq!(vm.derived_view().page, 3);
        vm.set_page(0);
        assert_eq!(vm.derived_view().page, 3);
    }

    #[test]
    fn criteria_change_resets_page() {
        let mut vm = loaded(roster(25));
        vm.set_page(3);
        assert_eq!(vm.page(), 3);
        vm.set_criteria(|c| c.apenas_ativos = true);
        assert_eq!(vm.page(), 1);
    }

    #[test]
    fn setting_the_same_criteria_twice_is_idempotent() {
        let mut vm = loaded(roster(25));
        vm.set_criteria(|c| c.busca = "pessoa".to_string());
        let first = vm.derived_view();
        vm.set_criteria(|c| c.busca = "pessoa".to_string());
        assert_eq!(vm.derived_view(), first);
    }

    #[test]
    fn patch_record_touches_only_the_matching_record() {
        let mut vm = loaded(roster(10));
        vm.patch_record(&7, |p| {
            let mut p = p.clone();
            p.ativo = false;
            p
        });
        let view = vm.derived_view();
        for p in &view.rows {
            assert_eq!(p.ativo, p.id != 7, "only id 7 should be inactive");
        }
        assert_eq!(view.rows[6].id, 7);
    }

    #[test]
    fn remove_record_clamps_the_page_in_the_derived_view() {
        let mut vm = loaded(roster(11));
        vm.set_page(2);
        assert_eq!(vm.derived_view().rows.len(), 1);
        vm.remove_record(&11);
        // Page 2 no longer exists; the derived view falls back to page 1.
        let view = vm.derived_view();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn last_issued_load_wins() {
        let mut vm: ListViewModel<Filtro> = ListViewModel::new(DEFAULT_PAGE_SIZE);
        let first = vm.begin_load();
        let second = vm.begin_load();

        // The older request resolves after the newer one was issued.
        let outcome = vm.finish_load(first, Ok(vec![pessoa(1, "Velho")]));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(vm.is_loading(), "newer load still owns the loading flag");

        let outcome = vm.finish_load(second, Ok(vec![pessoa(2, "Novo")]));
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert!(!vm.is_loading());
        let view = vm.derived_view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].nome, "Novo");
    }

    #[test]
    fn unauthorized_load_requests_reauthentication() {
        let mut vm = loaded(roster(3));
        let ticket = vm.begin_load();
        let outcome = vm.finish_load(ticket, Err(ApiError::Unauthorized));
        assert_eq!(outcome, LoadOutcome::Reauthenticate);
        assert!(!vm.is_loading());
        assert!(vm.error().is_none());
        assert_eq!(vm.derived_view().filtered_count, 0);
    }

    #[test]
    fn failed_load_clears_records_and_keeps_the_message() {
        let mut vm = loaded(roster(3));
        let ticket = vm.begin_load();
        let outcome = vm.finish_load(ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(!vm.is_loading());
        assert!(vm.error().is_some());
        assert_eq!(vm.derived_view().filtered_count, 0);
    }

    #[test]
    fn successful_load_resets_the_page() {
        let mut vm = loaded(roster(25));
        vm.set_page(3);
        let ticket = vm.begin_load();
        vm.finish_load(ticket, Ok(roster(25)));
        assert_eq!(vm.page(), 1);
    }
}
