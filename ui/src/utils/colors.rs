//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for enabled accounts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for disabled accounts and load failures.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
