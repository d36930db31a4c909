//! Contracts of the collaborators a table page is wired to.
//!
//! Every collaborator is shared behind an `Arc`, so methods take `&self` and
//! implementations keep their own interior mutability.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::user_service::UserServiceError;

// ============================================================================
// Add button
// ============================================================================

/// Callback run when the user presses a page's "add" button.
pub type AddButtonAction = Arc<dyn Fn() + Send + Sync>;

pub trait AddButtonService: Send + Sync {
    /// Register `action` for `page_name`, replacing any earlier registration.
    fn register_add_button(&self, page_name: &str, action: AddButtonAction);
}

// ============================================================================
// Pagination, filter and view type
// ============================================================================

/// How a table page lays out its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    List,
    Table,
}

impl ViewType {
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Table => "Table",
        }
    }
}

pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Per-page table state kept by a [`PaginationDataService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationData {
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<String>,
    /// 1-based page index, `None` until a page was chosen.
    pub current_page: Option<usize>,
    /// Page index per tab, for pages split into tabs.
    #[serde(default)]
    pub tab_pages: BTreeMap<String, usize>,
    #[serde(default)]
    pub filter: String,
    /// Sort string, see [`SortOption::to_sort_string`].
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub view_type: ViewType,
}

impl Default for PaginationData {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: ["5", "10", "20", "50", "100"]
                .iter()
                .map(|option| (*option).to_owned())
                .collect(),
            current_page: None,
            tab_pages: BTreeMap::new(),
            filter: String::new(),
            sort: None,
            view_type: ViewType::default(),
        }
    }
}

/// Persists table state per page identifier.
pub trait PaginationDataService: Send + Sync {
    fn pagination_data(&self, page_name: &str) -> PaginationData;

    fn set_rows_per_page_options(&self, page_name: &str, options: &[&str]);

    fn set_rows_per_page(&self, page_name: &str, rows_per_page: usize);

    /// The remembered page index, for `tab` when given.
    fn current_page(&self, page_name: &str, tab: Option<&str>) -> Option<usize>;

    fn set_current_page(&self, page_name: &str, tab: Option<&str>, page: usize);

    fn filter(&self, page_name: &str) -> String;

    fn set_filter(&self, page_name: &str, filter: &str);

    fn view_type(&self, page_name: &str) -> ViewType;

    fn set_view_type(&self, page_name: &str, view_type: ViewType);

    /// Remember the sort string for `page_name`.
    fn sort(&self, page_name: &str, sort: &str);
}

// ============================================================================
// Sort options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Split a sort string into field key and direction: `-email` is email descending.
pub fn parse_sort_string(sort: &str) -> (&str, SortDirection) {
    match sort.strip_prefix('-') {
        Some(key) => (key, SortDirection::Desc),
        None => (sort, SortDirection::Asc),
    }
}

/// One sortable column of a table page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub label: String,
    /// Field key the rows are ordered by.
    pub value: String,
    /// Set on the active option only.
    pub direction: Option<SortDirection>,
}

impl SortOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            direction: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.direction.is_some()
    }

    pub fn to_sort_string(&self) -> String {
        match self.direction {
            Some(SortDirection::Desc) => format!("-{}", self.value),
            _ => self.value.clone(),
        }
    }

    /// The option as it becomes when the user picks it again: an inactive
    /// option starts ascending, an active one flips direction.
    pub fn next_selection(&self) -> Self {
        let direction = self
            .direction
            .map_or(SortDirection::Asc, SortDirection::reversed);
        Self {
            direction: Some(direction),
            ..self.clone()
        }
    }
}

/// Builds and remembers the sort options of table pages.
pub trait TableOptionsService: Send + Sync {
    /// Build the options for `fields` (label, key pairs) with `default_field`
    /// active in `default_direction`, unless a sort was saved for the page.
    fn new_sort_options(
        &self,
        page_name: &str,
        fields: &[(&str, &str)],
        default_field: &str,
        default_direction: SortDirection,
    ) -> Vec<SortOption>;

    fn sort_options(&self, page_name: &str) -> Vec<SortOption>;

    fn current_sort(&self, page_name: &str) -> Option<SortOption>;

    fn save_sort_option(&self, page_name: &str, option: &SortOption);

    /// Activate the option named by a sort string.
    fn set_sort_option(&self, page_name: &str, sort: &str);

    /// Make `option`, with its direction, the only active option.
    fn toggle_sort(&self, page_name: &str, option: &SortOption);

    fn to_sort_string(&self, option: &SortOption) -> String {
        option.to_sort_string()
    }
}

// ============================================================================
// Navigation and data
// ============================================================================

pub trait UserNavigator: Send + Sync {
    /// Open the user-details view; `None` opens it for a new user.
    fn navigate_to_user_details(&self, system_name: Option<&str>);
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_users(&self) -> Result<Vec<UserPrincipal>, UserServiceError>;

    async fn get_groups(&self) -> Result<Vec<GroupPrincipal>, UserServiceError>;
}

/// Everything a users table page is wired to.
#[derive(Clone)]
pub struct UsersTableServices {
    pub add_button: Arc<dyn AddButtonService>,
    pub pagination: Arc<dyn PaginationDataService>,
    pub navigator: Arc<dyn UserNavigator>,
    pub table_options: Arc<dyn TableOptionsService>,
    pub users: Arc<dyn UserService>,
}

impl Debug for UsersTableServices {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersTableServices").finish_non_exhaustive()
    }
}
