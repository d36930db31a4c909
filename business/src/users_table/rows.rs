use std::cmp::Ordering;

use crate::principal::UserPrincipal;
use crate::services::SortDirection;

use super::UsersTableController;

/// A user as the table shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow<'a> {
    pub user: &'a UserPrincipal,
    pub display_name: &'a str,
    pub email: &'a str,
    pub enabled: bool,
    pub group_titles: Vec<&'a str>,
}

impl<'a> UserRow<'a> {
    fn new(user: &'a UserPrincipal, group_titles: Vec<&'a str>) -> Self {
        Self {
            user,
            display_name: user.display_name(),
            email: user.email(),
            enabled: user.enabled,
            group_titles,
        }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(needle);
        contains(self.display_name)
            || contains(&self.user.system_name)
            || contains(self.email)
            || self.group_titles.iter().any(|title| contains(title))
    }
}

type RowOrder = fn(&UserRow<'_>, &UserRow<'_>) -> Ordering;

fn text_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn by_display_name(a: &UserRow<'_>, b: &UserRow<'_>) -> Ordering {
    text_order(a.display_name, b.display_name)
}

fn by_email(a: &UserRow<'_>, b: &UserRow<'_>) -> Ordering {
    text_order(a.email, b.email)
}

fn by_enabled(a: &UserRow<'_>, b: &UserRow<'_>) -> Ordering {
    a.enabled.cmp(&b.enabled)
}

fn by_groups(a: &UserRow<'_>, b: &UserRow<'_>) -> Ordering {
    text_order(&a.group_titles.join(", "), &b.group_titles.join(", "))
}

fn row_order(field: &str) -> Option<RowOrder> {
    let order: RowOrder = match field {
        "displayName" => by_display_name,
        "email" => by_email,
        "enabled" => by_enabled,
        "groups" => by_groups,
        _ => return None,
    };
    Some(order)
}

impl UsersTableController {
    /// Every user matching the filter, in the active sort order.
    fn filtered_rows(&self) -> Vec<UserRow<'_>> {
        let needle = self.filter().trim().to_lowercase();
        let mut rows: Vec<UserRow<'_>> = self
            .users()
            .iter()
            .map(|user| UserRow::new(user, self.group_titles(user)))
            .filter(|row| needle.is_empty() || row.matches(&needle))
            .collect();

        let order = self.active_sort().and_then(|option| {
            let order = row_order(&option.value)?;
            Some((order, option.direction.unwrap_or(SortDirection::Asc)))
        });
        if let Some((order, direction)) = order {
            match direction {
                SortDirection::Asc => rows.sort_by(order),
                SortDirection::Desc => rows.sort_by(|a, b| order(b, a)),
            }
        }

        rows
    }

    /// Number of users matching the filter.
    pub fn filtered_count(&self) -> usize {
        self.filtered_rows().len()
    }

    /// Number of pages the filtered users span; at least one.
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.rows_per_page()).max(1)
    }

    /// The rows of the current page. A page beyond the last one shows the
    /// last page.
    pub fn rows(&self) -> Vec<UserRow<'_>> {
        let rows = self.filtered_rows();
        let rows_per_page = self.rows_per_page();
        let pages = rows.len().div_ceil(rows_per_page).max(1);
        let page = self.current_page().clamp(1, pages);

        rows.into_iter()
            .skip((page - 1) * rows_per_page)
            .take(rows_per_page)
            .collect()
    }
}
