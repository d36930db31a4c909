//! Users table page.
//!
//! `controller` holds the view-model and the delegation to the page's
//! collaborators; `rows` projects the loaded users into the rows the table
//! shows (filter, order, page).

mod controller;
mod rows;

pub use controller::{
    CARD_TITLE, DEFAULT_SORT_FIELD, LoadError, PAGE_NAME, ROWS_PER_PAGE_OPTIONS, SORT_FIELDS,
    UsersTableController,
};
pub use rows::UserRow;
