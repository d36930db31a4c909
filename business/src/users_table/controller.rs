use std::collections::HashMap;
use std::sync::Arc;

use authadmin_states::{State, Updater, spawn};
use log::{debug, error, info};
use thiserror::Error;

use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::services::{PaginationData, SortDirection, SortOption, UsersTableServices, ViewType};
use crate::user_service::UserServiceError;

/// Identifier under which the page's table state is persisted.
pub const PAGE_NAME: &str = "users";

pub const CARD_TITLE: &str = "Users";

pub const ROWS_PER_PAGE_OPTIONS: [&str; 4] = ["5", "10", "20", "50"];

/// Sortable columns as (label, field key).
pub const SORT_FIELDS: [(&str, &str); 4] = [
    ("Display Name", "displayName"),
    ("Email Address", "email"),
    ("State", "enabled"),
    ("Groups", "groups"),
];

pub const DEFAULT_SORT_FIELD: &str = "displayName";

/// A fetch that failed while the page was loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to load groups: {0}")]
    Groups(UserServiceError),
    #[error("Failed to load users: {0}")]
    Users(UserServiceError),
}

/// View-model of the users table page.
///
/// Construction restores the page's table state, registers the "add user"
/// button and starts two independent fetches (groups and users). Each fetch
/// reports back as exactly one patch through the [`Updater`]; the owner of the
/// `StateCtx` applies it on its next sync.
#[derive(Debug)]
pub struct UsersTableController {
    current_page: usize,
    filter: String,
    /// Groups keyed by system name.
    groups: HashMap<String, GroupPrincipal>,
    loading: bool,
    sort_options: Vec<SortOption>,
    users: Vec<UserPrincipal>,
    view_type: ViewType,
    errors: Vec<LoadError>,

    services: UsersTableServices,
}

impl State for UsersTableController {}

impl UsersTableController {
    pub fn new(services: UsersTableServices, updater: &Updater) -> Self {
        let pagination = Arc::clone(&services.pagination);

        let mut controller = Self {
            current_page: pagination
                .current_page(PAGE_NAME, None)
                .filter(|page| *page > 0)
                .unwrap_or(1),
            filter: pagination.filter(PAGE_NAME),
            groups: HashMap::new(),
            loading: true,
            sort_options: Vec::new(),
            users: Vec::new(),
            view_type: pagination.view_type(PAGE_NAME),
            errors: Vec::new(),
            services,
        };

        pagination.set_rows_per_page_options(PAGE_NAME, &ROWS_PER_PAGE_OPTIONS);
        controller.sort_options = controller.init_sort_options();
        controller.register_add_button();
        controller.load(updater);

        controller
    }

    fn init_sort_options(&self) -> Vec<SortOption> {
        let table_options = &self.services.table_options;
        if let Some(sort) = self.services.pagination.pagination_data(PAGE_NAME).sort {
            debug!("{PAGE_NAME}: restoring sort {sort}");
            table_options.set_sort_option(PAGE_NAME, &sort);
        }
        let options = table_options.new_sort_options(
            PAGE_NAME,
            &SORT_FIELDS,
            DEFAULT_SORT_FIELD,
            SortDirection::Asc,
        );
        if let Some(current) = table_options.current_sort(PAGE_NAME) {
            table_options.save_sort_option(PAGE_NAME, &current);
        }
        options
    }

    fn register_add_button(&self) {
        let navigator = Arc::clone(&self.services.navigator);
        self.services.add_button.register_add_button(
            PAGE_NAME,
            Arc::new(move || navigator.navigate_to_user_details(None)),
        );
    }

    fn load(&self, updater: &Updater) {
        let service = Arc::clone(&self.services.users);
        let groups_updater = updater.clone();
        spawn(async move {
            info!("Loading groups for the {PAGE_NAME} page");
            let result = service.get_groups().await;
            groups_updater.update::<Self, _>(move |controller| controller.apply_groups(result));
        });

        let service = Arc::clone(&self.services.users);
        let users_updater = updater.clone();
        spawn(async move {
            info!("Loading users for the {PAGE_NAME} page");
            let result = service.get_users().await;
            users_updater.update::<Self, _>(move |controller| controller.apply_users(result));
        });
    }

    /// Replace the group mapping with the outcome of a groups fetch.
    pub fn apply_groups(&mut self, result: Result<Vec<GroupPrincipal>, UserServiceError>) {
        match result {
            Ok(groups) => {
                info!("Loaded {} group(s)", groups.len());
                self.groups = groups
                    .into_iter()
                    .map(|group| (group.system_name.clone(), group))
                    .collect();
            }
            Err(err) => {
                error!("Failed to load groups: {err}");
                self.errors.push(LoadError::Groups(err));
            }
        }
    }

    /// Replace the user list with the outcome of a users fetch and stop loading.
    pub fn apply_users(&mut self, result: Result<Vec<UserPrincipal>, UserServiceError>) {
        match result {
            Ok(users) => {
                info!("Loaded {} user(s)", users.len());
                self.users = users;
            }
            Err(err) => {
                error!("Failed to load users: {err}");
                self.errors.push(LoadError::Users(err));
            }
        }
        self.loading = false;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn groups(&self) -> &HashMap<String, GroupPrincipal> {
        &self.groups
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sort_options(&self) -> &[SortOption] {
        &self.sort_options
    }

    pub fn active_sort(&self) -> Option<&SortOption> {
        self.sort_options.iter().find(|option| option.is_active())
    }

    pub fn users(&self) -> &[UserPrincipal] {
        &self.users
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Fetch failures, in the order they were reported.
    pub fn errors(&self) -> &[LoadError] {
        &self.errors
    }

    pub fn pagination_data(&self) -> PaginationData {
        self.services.pagination.pagination_data(PAGE_NAME)
    }

    pub fn rows_per_page(&self) -> usize {
        self.pagination_data().rows_per_page.max(1)
    }

    /// Title of each of the user's groups, or the group's identifier when the
    /// group is unknown or has no title.
    pub fn group_titles<'a>(&'a self, user: &'a UserPrincipal) -> Vec<&'a str> {
        user.groups
            .iter()
            .map(|name| {
                self.groups
                    .get(name)
                    .and_then(|group| group.title.as_deref())
                    .unwrap_or(name.as_str())
            })
            .collect()
    }

    /// The table header asked for a new order, given as a sort string.
    pub fn on_order_change(&mut self, order: &str) {
        debug!("{PAGE_NAME}: order changed to {order}");
        self.services.pagination.sort(PAGE_NAME, order);
        self.services.table_options.set_sort_option(PAGE_NAME, order);
        self.refresh_sort_options();
    }

    pub fn on_pagination_change(&mut self, page: usize) {
        self.services.pagination.set_current_page(PAGE_NAME, None, page);
        self.current_page = page;
    }

    /// A sort option was picked from the sort menu.
    pub fn selected_table_option(&mut self, option: &SortOption) {
        let table_options = &self.services.table_options;
        let sort = table_options.to_sort_string(option);
        debug!("{PAGE_NAME}: sort option {sort} selected");

        self.services.pagination.sort(PAGE_NAME, &sort);
        table_options.toggle_sort(PAGE_NAME, option);
        table_options.set_sort_option(PAGE_NAME, &sort);
        self.refresh_sort_options();
    }

    fn refresh_sort_options(&mut self) {
        self.sort_options = self.services.table_options.sort_options(PAGE_NAME);
    }

    /// Persist a new filter text and go back to the first page.
    pub fn set_filter(&mut self, filter: &str) {
        if self.filter == filter {
            return;
        }
        self.services.pagination.set_filter(PAGE_NAME, filter);
        filter.clone_into(&mut self.filter);
        self.on_pagination_change(1);
    }

    /// Switch the layout; the pagination service is told once per change.
    pub fn set_view_type(&mut self, view_type: ViewType) {
        if self.view_type == view_type {
            return;
        }
        self.view_type = view_type;
        self.services.pagination.set_view_type(PAGE_NAME, view_type);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.services.pagination.set_rows_per_page(PAGE_NAME, rows_per_page);
        self.on_pagination_change(1);
    }

    /// Open the details page of `user`.
    pub fn user_details(&self, user: &UserPrincipal) {
        self.services
            .navigator
            .navigate_to_user_details(Some(&user.system_name));
    }
}
