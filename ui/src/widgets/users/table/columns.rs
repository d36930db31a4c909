//! Column definitions for the users table.

use egui_extras::Column;

pub const STATE_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Header label and, for sortable columns, the sort key.
pub const COLUMNS: [(&str, Option<&str>); 5] = [
    ("Display Name", Some("displayName")),
    ("System Name", None),
    ("Email Address", Some("email")),
    ("State", Some("enabled")),
    ("Groups", Some("groups")),
];

/// One definition per entry of [`COLUMNS`], in the same order.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::initial(180.0).at_least(100.0), // Display name
        Column::initial(140.0).at_least(80.0),  // System name
        Column::initial(220.0).at_least(100.0), // Email
        Column::exact(STATE_WIDTH),             // State
        Column::remainder().at_least(100.0),    // Groups - flexible
    ]
}
