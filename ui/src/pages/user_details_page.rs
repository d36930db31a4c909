//! Details of a single user.

use authadmin_business::{Route, UsersTableController};
use egui::{Grid, Response, Ui};
use ustr::Ustr;

use crate::state::State;
use crate::widgets::state_text;

/// Renders the details of `system_name`, or the page for adding a user when
/// `None`.
pub fn user_details_page(state: &State, ui: &mut Ui, system_name: Option<Ustr>) -> Response {
    ui.vertical(|ui| {
        if ui.button("Back to users").clicked() {
            state.ctx.updater().set(Route::UsersTable);
        }
        ui.separator();

        let Some(system_name) = system_name else {
            ui.heading("New user");
            return;
        };

        let controller = state.ctx.state::<UsersTableController>();
        let Some(user) = controller
            .users()
            .iter()
            .find(|user| user.system_name == system_name.as_str())
        else {
            ui.heading(system_name.as_str());
            ui.label("This user is not loaded.");
            return;
        };

        ui.heading(user.display_name());
        Grid::new("user_details")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.label("System name");
                ui.label(&user.system_name);
                ui.end_row();

                ui.label("Email address");
                ui.label(user.email());
                ui.end_row();

                ui.label("State");
                ui.label(state_text(user.enabled));
                ui.end_row();

                ui.label("Groups");
                ui.label(controller.group_titles(user).join(", "));
                ui.end_row();
            });
    })
    .response
}
