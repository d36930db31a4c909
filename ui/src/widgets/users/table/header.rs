//! Table header rendering for the users table.

use authadmin_business::SortOption;
use egui::RichText;
use egui_extras::TableRow;

use super::columns::COLUMNS;
use crate::widgets::users::sort_label;

/// Renders the header; sortable columns are buttons. Returns the sort string
/// of the column clicked this frame.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort_options: &[SortOption],
) -> Option<String> {
    let mut order = None;

    for (label, key) in COLUMNS {
        header.col(|ui| {
            let Some(key) = key else {
                ui.strong(label);
                return;
            };

            let option = sort_options.iter().find(|option| option.value == key);
            let text = sort_label(label, option.and_then(|option| option.direction));
            if ui.button(RichText::new(text).strong()).clicked() {
                order = Some(option.map_or_else(
                    || key.to_owned(),
                    |option| option.next_selection().to_sort_string(),
                ));
            }
        });
    }

    order
}
