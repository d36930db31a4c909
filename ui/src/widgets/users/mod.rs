//! Widgets of the users table page.
//!
//! Widgets only read the [`UsersTableController`]; what the user asked for
//! comes back as a [`UsersAction`] that the page applies after rendering.
//!
//! [`UsersTableController`]: authadmin_business::UsersTableController

mod list;
mod pager;
pub mod table;
mod toolbar;

use authadmin_business::{SortDirection, SortOption, UserPrincipal, ViewType};
use egui::RichText;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

pub use list::users_list;
pub use pager::pager;
pub use table::users_table;
pub use toolbar::toolbar;

/// A request made through one of the page's widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersAction {
    AddUser,
    OpenUser(UserPrincipal),
    Filter(String),
    ViewType(ViewType),
    /// Sort string picked from a column header.
    Order(String),
    /// Option picked from the sort menu, already in its next direction.
    SelectSort(SortOption),
    Page(usize),
    RowsPerPage(usize),
}

/// Column or menu label with the sort direction appended.
pub fn sort_label(label: &str, direction: Option<SortDirection>) -> String {
    match direction {
        Some(SortDirection::Asc) => format!("{label} ▲"),
        Some(SortDirection::Desc) => format!("{label} ▼"),
        None => label.to_owned(),
    }
}

/// Text for the enabled/disabled state of an account.
pub fn state_text(enabled: bool) -> RichText {
    if enabled {
        RichText::new("Enabled").color(COLOR_GREEN)
    } else {
        RichText::new("Disabled").color(COLOR_RED)
    }
}
