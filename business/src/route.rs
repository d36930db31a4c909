//! Route state for page navigation.

use authadmin_states::{State, Updater};
use log::info;
use ustr::Ustr;

use crate::services::UserNavigator;

/// The page currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    UsersTable,
    /// Details of an existing user, or a blank form when `None`.
    UserDetails(Option<Ustr>),
}

impl State for Route {}

/// [`UserNavigator`] that switches the [`Route`] held in the `StateCtx`.
#[derive(Debug, Clone)]
pub struct RouteNavigator {
    updater: Updater,
}

impl RouteNavigator {
    pub fn new(updater: Updater) -> Self {
        Self { updater }
    }
}

impl UserNavigator for RouteNavigator {
    fn navigate_to_user_details(&self, system_name: Option<&str>) {
        info!("Navigating to user details for {system_name:?}");
        self.updater
            .set(Route::UserDetails(system_name.map(Ustr::from)));
    }
}
