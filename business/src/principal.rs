//! User and group principals as returned by the security REST API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keep a field only when it is a JSON string; numbers, objects and `null`
/// all read as absent.
fn text_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrincipal {
    /// Unique, stable login name.
    pub system_name: String,
    #[serde(default, deserialize_with = "text_only")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "text_only")]
    pub email: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// System names of the groups this user belongs to.
    #[serde(default)]
    pub groups: Vec<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl UserPrincipal {
    pub fn new(system_name: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            display_name: None,
            email: None,
            enabled: true,
            groups: Vec::new(),
        }
    }

    /// The display name when it is non-empty, otherwise the system name.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.system_name,
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// A group of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPrincipal {
    pub system_name: String,
    #[serde(default, deserialize_with = "text_only")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_only")]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: Option<u32>,
}

impl GroupPrincipal {
    pub fn new(system_name: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            title: None,
            description: None,
            member_count: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_system_name() {
        let mut user = UserPrincipal::new("jdoe");
        assert_eq!(user.display_name(), "jdoe");

        user.display_name = Some(String::new());
        assert_eq!(user.display_name(), "jdoe");

        user.display_name = Some("John Doe".to_owned());
        assert_eq!(user.display_name(), "John Doe");
    }

    #[test]
    fn test_display_name_is_returned_verbatim() {
        let mut user = UserPrincipal::new("jdoe");
        user.display_name = Some("  ".to_owned());
        assert_eq!(user.display_name(), "  ");
    }

    #[test]
    fn test_user_deserializes_camel_case() {
        let user: UserPrincipal = serde_json::from_value(serde_json::json!({
            "systemName": "dladmin",
            "displayName": "Data Lake Administrator",
            "email": "admin@example.com",
            "enabled": false,
            "groups": ["admin", "user"]
        }))
        .unwrap();

        assert_eq!(user.system_name, "dladmin");
        assert_eq!(user.display_name(), "Data Lake Administrator");
        assert_eq!(user.email(), "admin@example.com");
        assert!(!user.enabled);
        assert_eq!(user.groups, vec!["admin", "user"]);
    }

    #[test]
    fn test_non_textual_display_name_is_absent() {
        let user: UserPrincipal = serde_json::from_value(serde_json::json!({
            "systemName": "jdoe",
            "displayName": 42
        }))
        .unwrap();

        assert_eq!(user.display_name, None);
        assert_eq!(user.display_name(), "jdoe");
        assert!(user.enabled);
        assert!(user.groups.is_empty());
    }

    #[test]
    fn test_non_textual_group_title_is_absent() {
        let group: GroupPrincipal = serde_json::from_value(serde_json::json!({
            "systemName": "g1",
            "title": {"en": "Admins"},
            "memberCount": 3
        }))
        .unwrap();

        assert_eq!(group.title, None);
        assert_eq!(group.member_count, Some(3));
    }
}
