//! Business layer of the user administration console.
//!
//! Holds the users table view-model, the collaborator contracts it is wired
//! to, and their default implementations (in-memory pagination and sort
//! state, the add-button registry, route navigation and the HTTP user
//! service).

mod add_button;
mod config;
pub mod http;
mod pagination;
mod principal;
mod route;
mod services;
mod table_options;
mod user_service;
mod users_table;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use add_button::AddButtonRegistry;
pub use config::{BusinessConfig, ConfigError};
pub use pagination::{InMemoryPaginationDataService, PaginationSnapshot};
pub use principal::{GroupPrincipal, UserPrincipal};
pub use route::{Route, RouteNavigator};
pub use services::{
    AddButtonAction, AddButtonService, DEFAULT_ROWS_PER_PAGE, PaginationData,
    PaginationDataService, SortDirection, SortOption, TableOptionsService, UserNavigator,
    UserService, UsersTableServices, ViewType, parse_sort_string,
};
pub use table_options::DefaultTableOptionsService;
pub use user_service::{GROUPS_PATH, HttpUserService, USERS_PATH, UserServiceError};
pub use users_table::{
    CARD_TITLE, DEFAULT_SORT_FIELD, LoadError, PAGE_NAME, ROWS_PER_PAGE_OPTIONS, SORT_FIELDS,
    UserRow, UsersTableController,
};
