mod load_errors;
pub mod users;

pub use load_errors::load_errors;
pub use users::{UsersAction, pager, sort_label, state_text, toolbar, users_list, users_table};
