use authadmin_business::UsersTableController;
use egui::{Align, Frame, Layout, RichText, Ui};

use super::{UsersAction, state_text};

/// The current page as a list of cards.
pub fn users_list(controller: &UsersTableController, ui: &mut Ui) -> Option<UsersAction> {
    let mut action = None;

    for row in controller.rows() {
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                if ui.link(RichText::new(row.display_name).strong()).clicked() {
                    action = Some(UsersAction::OpenUser(row.user.clone()));
                }
                if row.display_name != row.user.system_name {
                    ui.label(RichText::new(&row.user.system_name).weak());
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(state_text(row.enabled));
                });
            });

            if !row.email.is_empty() {
                ui.label(row.email);
            }
            if !row.group_titles.is_empty() {
                ui.label(format!("Groups: {}", row.group_titles.join(", ")));
            }
        });
    }

    action
}
