//! Default [`TableOptionsService`]: sort options kept per page in memory.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::services::{SortDirection, SortOption, TableOptionsService, parse_sort_string};

#[derive(Debug, Default, Clone)]
struct PageSort {
    options: Vec<SortOption>,
    /// Last sort string chosen on the page.
    saved: Option<String>,
}

impl PageSort {
    /// Activate the option keyed `value` in `direction`; every other option
    /// is cleared. Unknown keys leave the options untouched.
    fn activate(&mut self, value: &str, direction: SortDirection) -> bool {
        if !self.options.iter().any(|option| option.value == value) {
            return false;
        }
        for option in &mut self.options {
            option.direction = (option.value == value).then_some(direction);
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct DefaultTableOptionsService {
    pages: Mutex<BTreeMap<String, PageSort>>,
}

impl DefaultTableOptionsService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, PageSort>> {
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_page<R>(&self, page_name: &str, f: impl FnOnce(&mut PageSort) -> R) -> R {
        let mut pages = self.lock();
        f(pages.entry(page_name.to_owned()).or_default())
    }
}

impl TableOptionsService for DefaultTableOptionsService {
    fn new_sort_options(
        &self,
        page_name: &str,
        fields: &[(&str, &str)],
        default_field: &str,
        default_direction: SortDirection,
    ) -> Vec<SortOption> {
        self.with_page(page_name, |page| {
            page.options = fields
                .iter()
                .map(|(label, value)| SortOption::new(*label, *value))
                .collect();

            let restored = page.saved.clone().is_some_and(|saved| {
                let (value, direction) = parse_sort_string(&saved);
                page.activate(value, direction)
            });
            if !restored {
                page.activate(default_field, default_direction);
            }
            page.options.clone()
        })
    }

    fn sort_options(&self, page_name: &str) -> Vec<SortOption> {
        self.lock()
            .get(page_name)
            .map(|page| page.options.clone())
            .unwrap_or_default()
    }

    fn current_sort(&self, page_name: &str) -> Option<SortOption> {
        self.lock()
            .get(page_name)
            .and_then(|page| page.options.iter().find(|o| o.is_active()).cloned())
    }

    fn save_sort_option(&self, page_name: &str, option: &SortOption) {
        let sort = option.to_sort_string();
        debug!("{page_name}: saving sort {sort}");
        self.with_page(page_name, |page| {
            page.activate(&option.value, option.direction.unwrap_or(SortDirection::Asc));
            page.saved = Some(sort);
        });
    }

    fn set_sort_option(&self, page_name: &str, sort: &str) {
        let (value, direction) = parse_sort_string(sort);
        self.with_page(page_name, |page| {
            page.activate(value, direction);
            page.saved = Some(sort.to_owned());
        });
    }

    fn toggle_sort(&self, page_name: &str, option: &SortOption) {
        let direction = option.direction.unwrap_or(SortDirection::Asc);
        self.with_page(page_name, |page| {
            page.activate(&option.value, direction);
        });
    }
}
