use authadmin_business::{UsersTableController, ViewType};
use egui::{Align, ComboBox, Layout, TextEdit, Ui};

use super::{UsersAction, sort_label};

const FILTER_WIDTH: f32 = 220.0;

/// Filter box, layout switch, sort menu and the "add" button.
pub fn toolbar(controller: &UsersTableController, ui: &mut Ui) -> Option<UsersAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let mut filter = controller.filter().to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut filter)
                .hint_text("Filter users")
                .desired_width(FILTER_WIDTH),
        );
        if response.changed() {
            action = Some(UsersAction::Filter(filter));
        }

        ui.separator();

        let mut view_type = controller.view_type();
        for choice in [ViewType::List, ViewType::Table] {
            ui.selectable_value(&mut view_type, choice, choice.label());
        }
        if view_type != controller.view_type() {
            action = Some(UsersAction::ViewType(view_type));
        }

        ui.separator();

        let selected = controller.active_sort().map_or_else(
            || "Sort by".to_owned(),
            |option| sort_label(&option.label, option.direction),
        );
        ComboBox::from_id_salt("users_sort")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for option in controller.sort_options() {
                    let label = sort_label(&option.label, option.direction);
                    if ui.selectable_label(option.is_active(), label).clicked() {
                        action = Some(UsersAction::SelectSort(option.next_selection()));
                    }
                }
            });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Add user").clicked() {
                action = Some(UsersAction::AddUser);
            }
        });
    });

    action
}
