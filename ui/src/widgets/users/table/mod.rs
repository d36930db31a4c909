//! Table layout of the users page.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header cells
//! - `row`: Cells of one user

pub mod columns;
pub mod header;
pub mod row;

use authadmin_business::UsersTableController;
use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::render_user_row;
use super::UsersAction;

/// The current page as a table with sortable columns.
pub fn users_table(controller: &UsersTableController, ui: &mut Ui) -> Option<UsersAction> {
    let rows = controller.rows();
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    let table = builder.header(HEADER_HEIGHT, |mut header| {
        if let Some(order) = render_table_header(&mut header, controller.sort_options()) {
            action = Some(UsersAction::Order(order));
        }
    });

    table.body(|mut body| {
        for user in &rows {
            body.row(ROW_HEIGHT, |mut row| {
                if render_user_row(&mut row, user) {
                    action = Some(UsersAction::OpenUser(user.user.clone()));
                }
            });
        }
    });

    action
}
