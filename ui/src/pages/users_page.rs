//! The users table page.

use authadmin_business::{AddButtonRegistry, CARD_TITLE, PAGE_NAME, UsersTableController, ViewType};
use egui::{Response, ScrollArea, Ui};

use crate::state::State;
use crate::widgets::{self, UsersAction};

/// Renders the users page and applies what the user did on it.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    let add_buttons = state.add_buttons.clone();
    let controller = state.ctx.state_mut::<UsersTableController>();

    let response = ui.vertical(|ui| {
        ui.heading(CARD_TITLE);

        let mut action = widgets::toolbar(controller, ui);
        widgets::load_errors(controller.errors(), ui);
        ui.separator();

        if controller.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
        } else if controller.filtered_count() == 0 {
            ui.label("No users found");
        } else {
            let body = ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| match controller.view_type() {
                    ViewType::Table => widgets::users_table(controller, ui),
                    ViewType::List => widgets::users_list(controller, ui),
                })
                .inner;
            action = action.or(body);
        }

        ui.separator();
        action.or(widgets::pager(controller, ui))
    });

    if let Some(action) = response.inner {
        apply(action, controller, &add_buttons);
    }
    response.response
}

fn apply(
    action: UsersAction,
    controller: &mut UsersTableController,
    add_buttons: &AddButtonRegistry,
) {
    log::debug!("users page: {action:?}");
    match action {
        UsersAction::AddUser => {
            add_buttons.trigger(PAGE_NAME);
        }
        UsersAction::OpenUser(user) => controller.user_details(&user),
        UsersAction::Filter(filter) => controller.set_filter(&filter),
        UsersAction::ViewType(view_type) => controller.set_view_type(view_type),
        UsersAction::Order(order) => controller.on_order_change(&order),
        UsersAction::SelectSort(option) => controller.selected_table_option(&option),
        UsersAction::Page(page) => controller.on_pagination_change(page),
        UsersAction::RowsPerPage(rows) => controller.set_rows_per_page(rows),
    }
}
