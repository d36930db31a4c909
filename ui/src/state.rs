use std::sync::Arc;

use authadmin_business::{
    AddButtonRegistry, BusinessConfig, DefaultTableOptionsService, HttpUserService,
    InMemoryPaginationDataService, PaginationSnapshot, Route, RouteNavigator,
    UsersTableController, UsersTableServices,
};
use authadmin_states::StateCtx;
use log::warn;

/// The main application state.
///
/// Building it opens the users table page, which starts loading users and
/// groups right away, so it must be created where tasks can be spawned
/// (inside a Tokio runtime on native).
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Actions behind the toolbar's "add" button, per page.
    pub add_buttons: Arc<AddButtonRegistry>,
    /// Table state of every page, persisted between runs.
    pub pagination: Arc<InMemoryPaginationDataService>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_snapshot(PaginationSnapshot::new())
    }
}

impl State {
    pub fn new(config: BusinessConfig, snapshot: PaginationSnapshot) -> Self {
        let mut ctx = StateCtx::new();
        ctx.add_state(Route::default());
        ctx.add_state(config.clone());

        let add_buttons = Arc::new(AddButtonRegistry::new());
        let pagination = Arc::new(InMemoryPaginationDataService::restore(snapshot));

        let services = UsersTableServices {
            add_button: add_buttons.clone(),
            pagination: pagination.clone(),
            navigator: Arc::new(RouteNavigator::new(ctx.updater())),
            table_options: Arc::new(DefaultTableOptionsService::new()),
            users: Arc::new(HttpUserService::new(config)),
        };
        let controller = UsersTableController::new(services, &ctx.updater());
        ctx.add_state(controller);

        Self {
            ctx,
            add_buttons,
            pagination,
        }
    }

    /// Configuration from the environment, with restored table state.
    pub fn with_snapshot(snapshot: PaginationSnapshot) -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("Falling back to the default configuration: {err}");
            BusinessConfig::default()
        });
        Self::new(config, snapshot)
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url), PaginationSnapshot::new())
    }
}
