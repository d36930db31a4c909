//! Pages module for the application.
//!
//! One page per [`Route`](authadmin_business::Route):
//! - `users_page`: the users table
//! - `user_details_page`: a single user, or a blank one being added

mod user_details_page;
mod users_page;

pub use user_details_page::user_details_page;
pub use users_page::users_page;
