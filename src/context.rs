//! Application Context
//!
//! Shared, read-only UI settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{BlankPolicy, UiConfig};

#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<UiConfig>,
}

impl AppContext {
    pub fn new(config: UiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn placeholder(&self) -> String {
        self.config.with_value(|c| c.placeholder.clone())
    }

    /// How the form treats whitespace-only submissions
    pub fn blank_policy(&self) -> BlankPolicy {
        self.config.with_value(|c| c.blank_submissions)
    }
}
