//! Question value objects
//!
//! A [`Question`] is immutable once a session has been created with it. The
//! serde names follow the wire format consumed by the form renderer
//! (`question`, `type`, `options`, `allowCustom`).

use serde::{Deserialize, Serialize};

/// Input kind for a question, selecting the form control to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text (textarea)
    #[default]
    Text,
    /// Single choice among `choices` (radio group)
    Select,
    /// Multiple choice among `choices` (checkboxes)
    Multiselect,
    /// Yes/no pair
    Boolean,
}

/// A single question within a batch (Value Object)
///
/// Only `id` and `prompt` are mandatory; everything else is a rendering
/// hint for the client. The server never validates submitted answers
/// against these hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the batch; keys the answer map
    pub id: String,
    /// The question text shown to the human
    #[serde(rename = "question")]
    pub prompt: String,
    /// Optional additional context shown under the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input kind; free text when absent
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    /// Choice labels for select/multiselect kinds
    #[serde(rename = "options", default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Whether choice kinds offer a free-text write-in ("Other")
    #[serde(
        rename = "allowCustom",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_custom: Option<bool>,
    /// Whether multiselect offers a mutually exclusive "None of the above"
    /// choice; on unless explicitly disabled
    #[serde(rename = "allowNone", default, skip_serializing_if = "Option::is_none")]
    pub allow_none: Option<bool>,
    /// Whether an answer must be provided before submitting
    #[serde(default = "default_required")]
    pub required: bool,
    /// Value to pre-fill in the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

fn default_required() -> bool {
    true
}

impl Question {
    /// Create a free-text question with the default flags
    pub fn new(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            description: None,
            kind: QuestionKind::Text,
            choices: None,
            allow_custom: None,
            allow_none: None,
            required: true,
            default: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn with_allow_custom(mut self, allow: bool) -> Self {
        self.allow_custom = Some(allow);
        self
    }

    pub fn with_allow_none(mut self, allow: bool) -> Self {
        self.allow_none = Some(allow);
        self
    }

    /// Mark the question as optional (required defaults to true)
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}
