use authadmin_business::LoadError;
use egui::Ui;

use crate::utils::colors::COLOR_RED;

/// One line per failed fetch.
pub fn load_errors(errors: &[LoadError], ui: &mut Ui) {
    for error in errors {
        ui.colored_label(COLOR_RED, error.to_string());
    }
}
