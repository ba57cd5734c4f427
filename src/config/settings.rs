use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub firm: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john.smith@legallens.com".into(),
            phone: "+1 (555) 123-4567".into(),
            title: "Partner".into(),
            firm: "Smith & Associates Law Firm".into(),
        }
    }
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NotificationSettings {
    pub email_alerts: bool,
    pub push_notifications: bool,
    pub case_updates: bool,
    pub client_messages: bool,
    pub deadline_reminders: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            email_alerts: true,
            push_notifications: true,
            case_updates: true,
            client_messages: true,
            deadline_reminders: true,
            weekly_reports: false,
        }
    }
}

impl NotificationSettings {
    /// Toggle entries as `(key, enabled)`, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("email-alerts", self.email_alerts),
            ("push-notifications", self.push_notifications),
            ("case-updates", self.case_updates),
            ("client-messages", self.client_messages),
            ("deadline-reminders", self.deadline_reminders),
            ("weekly-reports", self.weekly_reports),
        ]
    }

    /// Flip a toggle by key. Returns the new value, or `None` for an unknown key.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let slot = match key {
            "email-alerts" => &mut self.email_alerts,
            "push-notifications" => &mut self.push_notifications,
            "case-updates" => &mut self.case_updates,
            "client-messages" => &mut self.client_messages,
            "deadline-reminders" => &mut self.deadline_reminders,
            "weekly-reports" => &mut self.weekly_reports,
            _ => return None,
        };
        *slot = !*slot;
        Some(*slot)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Preferences {
    pub dark_mode: bool,
    pub compact_view: bool,
    pub auto_save: bool,
    pub show_tips: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            dark_mode: false,
            compact_view: false,
            auto_save: true,
            show_tips: true,
        }
    }
}

/// User settings: profile, notification toggles and display preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: Profile,
    pub notifications: NotificationSettings,
    pub preferences: Preferences,
}

impl Settings {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        super::from_toml_str(source)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        super::from_toml_file(path)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
