//! Row rendering for the users table.

use authadmin_business::UserRow;
use egui_extras::TableRow;

use crate::widgets::users::state_text;

/// Renders the cells of one user. Returns whether the display name was clicked.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRow<'_>) -> bool {
    let mut open = false;

    row.col(|ui| {
        open = ui.link(user.display_name).clicked();
    });
    row.col(|ui| {
        ui.label(&user.user.system_name);
    });
    row.col(|ui| {
        ui.label(user.email);
    });
    row.col(|ui| {
        ui.label(state_text(user.enabled));
    });
    row.col(|ui| {
        ui.label(user.group_titles.join(", "));
    });

    open
}
