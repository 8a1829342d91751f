//! Output Rendering
//!
//! Renders option lists and selection values as text or JSON.

use multiselect::{OptionsSnapshot, SelectionEntry};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render the option list with checked markers
pub fn render_options(snapshot: &OptionsSnapshot, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({
            "options": snapshot.options,
            "selected": snapshot.selected,
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            for option in &snapshot.options {
                let mark = if option.checked { "[x]" } else { "[ ]" };
                out.push_str(&format!("{} {} ({})\n", mark, option.value, option.id));
            }
            out.push_str(&format!(
                "{} of {} selected\n",
                snapshot.selected.len(),
                snapshot.options.len()
            ));
            out
        }
    }
}

/// Render the selection value, one entry per line
pub fn render_value(value: &[SelectionEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!({ "value": value }).to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in value {
                match entry {
                    SelectionEntry::Resolved(object) => {
                        out.push_str(&format!("✓ {} ({})\n", object.name, object.id))
                    }
                    SelectionEntry::CacheMiss { id } => {
                        out.push_str(&format!("✗ {} (not in cache)\n", id))
                    }
                }
            }
            if value.is_empty() {
                out.push_str("nothing selected\n");
            }
            out
        }
    }
}
