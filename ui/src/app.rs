use std::time::Duration;

use authadmin_business::{PaginationSnapshot, Route, UsersTableController};

use crate::{pages, state::State};

/// Storage key of the persisted table state.
pub const PAGINATION_KEY: &str = "authadmin.pagination";

/// How often to repaint while a fetch is outstanding.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct AdminApp {
    state: State,
}

impl AdminApp {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Called once before the first frame; restores the table state saved by
    /// [`eframe::App::save`].
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let snapshot = cc
            .storage
            .and_then(|storage| eframe::get_value::<PaginationSnapshot>(storage, PAGINATION_KEY))
            .unwrap_or_default();
        Self::new(State::with_snapshot(snapshot))
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("User administration");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = self.state.ctx.state::<Route>().clone();
            match route {
                Route::UsersTable => pages::users_page(&mut self.state, ui),
                Route::UserDetails(system_name) => {
                    pages::user_details_page(&self.state, ui, system_name)
                }
            };
        });

        // Navigation made during this frame shows on the next one.
        if self.state.ctx.sync() > 0 {
            ctx.request_repaint();
        } else if self.state.ctx.state::<UsersTableController>().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PAGINATION_KEY, &self.state.pagination.snapshot());
    }
}
