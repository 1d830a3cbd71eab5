//! UI Configuration
//!
//! Read from a `<script id="todo-config" type="application/json">` block in the host page.
//! Missing keys fall back to defaults; a missing block means all defaults.

use serde::Deserialize;

use crate::error::{TodoError, TodoResult};

const CONFIG_ELEMENT_ID: &str = "todo-config";

/// What the form does with whitespace-only input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlankPolicy {
    #[default]
    Reject,
    Accept,
}

impl BlankPolicy {
    pub fn check(self, text: &str) -> TodoResult<()> {
        match self {
            BlankPolicy::Reject if text.trim().is_empty() => Err(TodoError::BlankText),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub placeholder: String,
    pub blank_submissions: BlankPolicy,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: "What needs to be done?".to_string(),
            blank_submissions: BlankPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> TodoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from the host page, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                // Logger is not up yet; this goes straight to the console.
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
