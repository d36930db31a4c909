use authadmin_business::UsersTableController;
use egui::{Button, ComboBox, Ui};

use super::UsersAction;

/// Page navigation and the rows-per-page choice.
pub fn pager(controller: &UsersTableController, ui: &mut Ui) -> Option<UsersAction> {
    let mut action = None;
    let page_count = controller.page_count();
    let current = controller.current_page().clamp(1, page_count);
    let data = controller.pagination_data();

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 1, Button::new("Previous")).clicked() {
            action = Some(UsersAction::Page(current - 1));
        }
        ui.label(format!("Page {current} of {page_count}"));
        if ui
            .add_enabled(current < page_count, Button::new("Next"))
            .clicked()
        {
            action = Some(UsersAction::Page(current + 1));
        }

        ui.separator();

        ui.label("Rows per page");
        ComboBox::from_id_salt("users_rows_per_page")
            .selected_text(data.rows_per_page.to_string())
            .show_ui(ui, |ui| {
                for option in &data.rows_per_page_options {
                    let Ok(rows) = option.parse::<usize>() else {
                        continue;
                    };
                    let selected = rows == data.rows_per_page;
                    if ui.selectable_label(selected, option).clicked() && !selected {
                        action = Some(UsersAction::RowsPerPage(rows));
                    }
                }
            });

        ui.separator();
        ui.label(format!("{} user(s)", controller.filtered_count()));
    });

    action
}
