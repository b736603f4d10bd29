//! Human-readable answer summaries.
//!
//! The wait loop hands the caller a text rendering of each question paired
//! with its submitted answer, in batch order.

use crate::question::Question;
use crate::session::entities::AnswerMap;
use serde_json::Value;

/// Render a single answer value for the summary.
///
/// Missing or null answers become an explicit `(not answered)` marker,
/// booleans render as `yes`/`no`, and arrays are joined with `", "`.
pub fn render_answer(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "(not answered)".to_string(),
        Some(Value::Bool(true)) => "yes".to_string(),
        Some(Value::Bool(false)) => "no".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Format the full submission summary returned to the caller.
///
/// One line per question in batch order, keyed by question id. Questions
/// the human skipped still appear, with the not-answered marker.
pub fn format_summary(questions: &[Question], answers: &AnswerMap) -> String {
    let mut lines = Vec::with_capacity(questions.len() + 1);
    lines.push(format!(
        "User submitted answers for {} questions:\n",
        questions.len()
    ));

    for question in questions {
        lines.push(format!(
            "- {}: {}",
            question.id,
            render_answer(answers.get(&question.id))
        ));
    }

    lines.join("\n")
}
