//! In-memory [`PaginationDataService`] that can be snapshotted for persistence.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::services::{PaginationData, PaginationDataService, ViewType};

pub type PaginationSnapshot = BTreeMap<String, PaginationData>;

#[derive(Debug, Default)]
pub struct InMemoryPaginationDataService {
    pages: Mutex<PaginationSnapshot>,
}

impl InMemoryPaginationDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously persisted state.
    pub fn restore(pages: PaginationSnapshot) -> Self {
        Self {
            pages: Mutex::new(pages),
        }
    }

    pub fn snapshot(&self) -> PaginationSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PaginationSnapshot> {
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_page<R>(&self, page_name: &str, f: impl FnOnce(&mut PaginationData) -> R) -> R {
        let mut pages = self.lock();
        f(pages.entry(page_name.to_owned()).or_default())
    }

    fn read_page<R>(&self, page_name: &str, f: impl FnOnce(Option<&PaginationData>) -> R) -> R {
        let pages = self.lock();
        f(pages.get(page_name))
    }
}

impl PaginationDataService for InMemoryPaginationDataService {
    fn pagination_data(&self, page_name: &str) -> PaginationData {
        self.with_page(page_name, |page| page.clone())
    }

    fn set_rows_per_page_options(&self, page_name: &str, options: &[&str]) {
        self.with_page(page_name, |page| {
            page.rows_per_page_options = options.iter().map(|o| (*o).to_owned()).collect();
        });
    }

    fn set_rows_per_page(&self, page_name: &str, rows_per_page: usize) {
        debug!("{page_name}: {rows_per_page} rows per page");
        self.with_page(page_name, |page| page.rows_per_page = rows_per_page.max(1));
    }

    fn current_page(&self, page_name: &str, tab: Option<&str>) -> Option<usize> {
        self.read_page(page_name, |page| {
            let page = page?;
            match tab {
                Some(tab) => page.tab_pages.get(tab).copied(),
                None => page.current_page,
            }
        })
    }

    fn set_current_page(&self, page_name: &str, tab: Option<&str>, current: usize) {
        debug!("{page_name}: page {current} (tab {tab:?})");
        self.with_page(page_name, |page| match tab {
            Some(tab) => {
                page.tab_pages.insert(tab.to_owned(), current);
            }
            None => page.current_page = Some(current),
        });
    }

    fn filter(&self, page_name: &str) -> String {
        self.read_page(page_name, |page| {
            page.map(|page| page.filter.clone()).unwrap_or_default()
        })
    }

    fn set_filter(&self, page_name: &str, filter: &str) {
        self.with_page(page_name, |page| filter.clone_into(&mut page.filter));
    }

    fn view_type(&self, page_name: &str) -> ViewType {
        self.read_page(page_name, |page| {
            page.map(|page| page.view_type).unwrap_or_default()
        })
    }

    fn set_view_type(&self, page_name: &str, view_type: ViewType) {
        debug!("{page_name}: view type {view_type:?}");
        self.with_page(page_name, |page| page.view_type = view_type);
    }

    fn sort(&self, page_name: &str, sort: &str) {
        debug!("{page_name}: sort {sort}");
        self.with_page(page_name, |page| page.sort = Some(sort.to_owned()));
    }
}
