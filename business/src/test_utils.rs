//! Fakes and fixtures for testing the users table page without a server.
//!
//! [`Fixture`] wires a [`UsersTableController`] to recording collaborators
//! and a [`StaticUserService`], then lets the test settle the two fetches:
//!
//! ```ignore
//! let mut fixture = Fixture::new();
//! fixture.mount(StaticUserService::new(users, groups));
//! fixture.settle().await;
//! assert!(!fixture.controller().is_loading());
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use authadmin_states::StateCtx;

use crate::add_button::AddButtonRegistry;
use crate::pagination::InMemoryPaginationDataService;
use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::services::{
    PaginationData, PaginationDataService, UserNavigator, UserService, UsersTableServices,
    ViewType,
};
use crate::table_options::DefaultTableOptionsService;
use crate::user_service::UserServiceError;
use crate::users_table::UsersTableController;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn user(system_name: &str, display_name: Option<&str>, groups: &[&str]) -> UserPrincipal {
    let mut user = UserPrincipal::new(system_name);
    user.display_name = display_name.map(str::to_owned);
    user.groups = groups.iter().map(|g| (*g).to_owned()).collect();
    user
}

pub fn group(system_name: &str, title: Option<&str>) -> GroupPrincipal {
    let group = GroupPrincipal::new(system_name);
    match title {
        Some(title) => group.with_title(title),
        None => group,
    }
}

// ============================================================================
// User service
// ============================================================================

/// Answers every fetch with fixed results.
#[derive(Debug, Clone)]
pub struct StaticUserService {
    users: Result<Vec<UserPrincipal>, UserServiceError>,
    groups: Result<Vec<GroupPrincipal>, UserServiceError>,
}

impl Default for StaticUserService {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl StaticUserService {
    pub fn new(users: Vec<UserPrincipal>, groups: Vec<GroupPrincipal>) -> Self {
        Self {
            users: Ok(users),
            groups: Ok(groups),
        }
    }

    pub fn failing_users(err: UserServiceError) -> Self {
        Self {
            users: Err(err),
            groups: Ok(Vec::new()),
        }
    }

    pub fn failing_groups(users: Vec<UserPrincipal>, err: UserServiceError) -> Self {
        Self {
            users: Ok(users),
            groups: Err(err),
        }
    }
}

#[async_trait]
impl UserService for StaticUserService {
    async fn get_users(&self) -> Result<Vec<UserPrincipal>, UserServiceError> {
        self.users.clone()
    }

    async fn get_groups(&self) -> Result<Vec<GroupPrincipal>, UserServiceError> {
        self.groups.clone()
    }
}

// ============================================================================
// Recording collaborators
// ============================================================================

/// A mutating call made on [`RecordingPagination`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationCall {
    SetRowsPerPageOptions(Vec<String>),
    SetRowsPerPage(usize),
    SetCurrentPage(Option<String>, usize),
    SetFilter(String),
    SetViewType(ViewType),
    Sort(String),
}

/// In-memory pagination that also records every mutating call.
#[derive(Debug, Default)]
pub struct RecordingPagination {
    inner: InMemoryPaginationDataService,
    calls: Mutex<Vec<PaginationCall>>,
}

impl RecordingPagination {
    /// The wrapped service; calls made on it directly are not recorded.
    pub fn inner(&self) -> &InMemoryPaginationDataService {
        &self.inner
    }

    pub fn calls(&self) -> Vec<PaginationCall> {
        lock(&self.calls).clone()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }

    fn record(&self, call: PaginationCall) {
        lock(&self.calls).push(call);
    }
}

impl PaginationDataService for RecordingPagination {
    fn pagination_data(&self, page_name: &str) -> PaginationData {
        self.inner.pagination_data(page_name)
    }

    fn set_rows_per_page_options(&self, page_name: &str, options: &[&str]) {
        self.record(PaginationCall::SetRowsPerPageOptions(
            options.iter().map(|o| (*o).to_owned()).collect(),
        ));
        self.inner.set_rows_per_page_options(page_name, options);
    }

    fn set_rows_per_page(&self, page_name: &str, rows_per_page: usize) {
        self.record(PaginationCall::SetRowsPerPage(rows_per_page));
        self.inner.set_rows_per_page(page_name, rows_per_page);
    }

    fn current_page(&self, page_name: &str, tab: Option<&str>) -> Option<usize> {
        self.inner.current_page(page_name, tab)
    }

    fn set_current_page(&self, page_name: &str, tab: Option<&str>, page: usize) {
        self.record(PaginationCall::SetCurrentPage(tab.map(str::to_owned), page));
        self.inner.set_current_page(page_name, tab, page);
    }

    fn filter(&self, page_name: &str) -> String {
        self.inner.filter(page_name)
    }

    fn set_filter(&self, page_name: &str, filter: &str) {
        self.record(PaginationCall::SetFilter(filter.to_owned()));
        self.inner.set_filter(page_name, filter);
    }

    fn view_type(&self, page_name: &str) -> ViewType {
        self.inner.view_type(page_name)
    }

    fn set_view_type(&self, page_name: &str, view_type: ViewType) {
        self.record(PaginationCall::SetViewType(view_type));
        self.inner.set_view_type(page_name, view_type);
    }

    fn sort(&self, page_name: &str, sort: &str) {
        self.record(PaginationCall::Sort(sort.to_owned()));
        self.inner.sort(page_name, sort);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Option<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Option<String>> {
        lock(&self.visits).clone()
    }
}

impl UserNavigator for RecordingNavigator {
    fn navigate_to_user_details(&self, system_name: Option<&str>) {
        lock(&self.visits).push(system_name.map(str::to_owned));
    }
}

// ============================================================================
// Fixture
// ============================================================================

pub struct Fixture {
    pub ctx: StateCtx,
    pub pagination: Arc<RecordingPagination>,
    pub table_options: Arc<DefaultTableOptionsService>,
    pub add_buttons: Arc<AddButtonRegistry>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            ctx: StateCtx::new(),
            pagination: Arc::new(RecordingPagination::default()),
            table_options: Arc::new(DefaultTableOptionsService::new()),
            add_buttons: Arc::new(AddButtonRegistry::new()),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    pub fn services(&self, users: StaticUserService) -> UsersTableServices {
        UsersTableServices {
            add_button: self.add_buttons.clone(),
            pagination: self.pagination.clone(),
            navigator: self.navigator.clone(),
            table_options: self.table_options.clone(),
            users: Arc::new(users),
        }
    }

    /// Build the controller and register it in the context. Must run inside
    /// a Tokio runtime since the fetches are spawned right away.
    pub fn mount(&mut self, users: StaticUserService) {
        let controller = UsersTableController::new(self.services(users), &self.ctx.updater());
        self.ctx.add_state(controller);
    }

    /// Wait until both fetches have reported back.
    pub async fn settle(&mut self) {
        let mut applied = 0;
        while applied < 2 {
            applied += tokio::time::timeout(Duration::from_secs(5), self.ctx.sync_next())
                .await
                .expect("fetches did not report back in time");
        }
    }

    pub fn controller(&self) -> &UsersTableController {
        self.ctx.state::<UsersTableController>()
    }

    pub fn controller_mut(&mut self) -> &mut UsersTableController {
        self.ctx.state_mut::<UsersTableController>()
    }
}
