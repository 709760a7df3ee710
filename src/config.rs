//! Page Configuration
//!
//! Delays, limits and the markup contract with the server templates. Templates
//! may override any of it with a JSON block:
//!
//! ```html
//! <script type="application/json" id="page-config">{"alert_fade_delay_ms": 8000}</script>
//! ```

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{PageError, PageResult};
use crate::host::Dom;
use crate::models::EntityKind;
use crate::validation::TITLE_MAX_CHARS;

/// Id of the optional JSON config block
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Selectors locating one kind of row (task card or subtask item)
///
/// Replaced as a whole when present in the config block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityMarkup {
    /// Checkbox id is `{prefix}{id}`
    pub checkbox_id_prefix: String,
    /// Container enclosing the checkbox
    pub container: String,
    /// Attribute carrying the id on the container
    pub id_attribute: String,
    /// Title element inside the container
    pub title: String,
}

impl EntityMarkup {
    pub fn task() -> Self {
        Self {
            checkbox_id_prefix: "task-".to_string(),
            container: ".task-card".to_string(),
            id_attribute: "data-task-id".to_string(),
            title: ".task-title".to_string(),
        }
    }

    pub fn subtask() -> Self {
        Self {
            checkbox_id_prefix: "subtask-".to_string(),
            container: ".subtask-item".to_string(),
            id_attribute: "data-subtask-id".to_string(),
            title: ".subtask-title".to_string(),
        }
    }

    pub fn checkbox_id(&self, id: u32) -> String {
        format!("{}{}", self.checkbox_id_prefix, id)
    }

    pub fn container_selector(&self, id: u32) -> String {
        format!("[{}=\"{}\"]", self.id_attribute, id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Flash banners to auto-dismiss
    pub alert_selector: String,
    /// Time from load until an alert starts fading
    pub alert_fade_delay_ms: u32,
    /// Fade length; the alert is removed when it ends
    pub alert_fade_duration_ms: u32,
    /// Delete animation length before navigating
    pub delete_delay_ms: u32,
    pub title_max_chars: usize,
    /// Id of the title field inside each validated form
    pub title_field_id: String,
    /// Forms validated before submit
    pub form_ids: Vec<String>,
    /// Inputs counted toward the completed total
    pub checkbox_selector: String,
    pub completed_class: String,
    pub completed_count_id: String,
    /// Anchors given smooth scrolling
    pub anchor_selector: String,
    pub task: EntityMarkup,
    pub subtask: EntityMarkup,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alert_selector: ".alert".to_string(),
            alert_fade_delay_ms: 5000,
            alert_fade_duration_ms: 500,
            delete_delay_ms: 300,
            title_max_chars: TITLE_MAX_CHARS,
            title_field_id: "title".to_string(),
            form_ids: vec![
                "addTaskForm".to_string(),
                "editTaskForm".to_string(),
                "addSubtaskForm".to_string(),
            ],
            checkbox_selector: "input[type=\"checkbox\"]".to_string(),
            completed_class: "completed".to_string(),
            completed_count_id: "completed-count".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            task: EntityMarkup::task(),
            subtask: EntityMarkup::subtask(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> PageResult<Self> {
        serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))
    }

    /// Read the config block from the page, falling back to defaults
    pub fn load<D: Dom>(dom: &D) -> Self {
        let raw = dom
            .element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| dom.text_content(&el))
            .unwrap_or_default();
        if raw.trim().is_empty() {
            return Self::default();
        }

        match Self::from_json(&raw) {
            Ok(config) => {
                debug!("[PAGE] using config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(err) => {
                warn!("[PAGE] {}; using defaults", err);
                Self::default()
            }
        }
    }

    pub fn markup(&self, kind: EntityKind) -> &EntityMarkup {
        match kind {
            EntityKind::Task => &self.task,
            EntityKind::Subtask => &self.subtask,
        }
    }

    pub fn title_selector(&self) -> String {
        format!("#{}", self.title_field_id)
    }

    pub fn checked_selector(&self) -> String {
        self.checkbox_selector
            .split(',')
            .map(|part| format!("{}:checked", part.trim()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
