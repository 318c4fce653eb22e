//! Property panel document: the form rendered from a folder type's property
//! schema, plus the messages exchanged between the panel and its host.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::schema::{FieldSpec, Properties};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormControl {
    Text { value: String },
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
    Toggle { checked: bool },
    /// Read-only text plus a search trigger.
    Reference { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    pub control: FormControl,
}

impl FormField {
    fn from_spec(key: &str, spec: &FieldSpec) -> Self {
        let control = match spec {
            FieldSpec::Input(value) => FormControl::Text {
                value: value.clone(),
            },
            FieldSpec::Dropdown(options) => FormControl::Select {
                options: options.clone(),
                selected: None,
            },
            FieldSpec::Checkbox(checked) => FormControl::Toggle { checked: *checked },
            FieldSpec::Reference(value) => FormControl::Reference {
                value: value.clone(),
            },
        };
        Self {
            key: key.to_string(),
            control,
        }
    }

    /// The value the control currently shows. A select with nothing chosen
    /// shows its first option.
    pub fn display_value(&self) -> String {
        match &self.control {
            FormControl::Text { value } | FormControl::Reference { value } => value.clone(),
            FormControl::Select { options, selected } => selected
                .or(if options.is_empty() { None } else { Some(0) })
                .and_then(|i| options.get(i))
                .cloned()
                .unwrap_or_default(),
            FormControl::Toggle { checked } => checked.to_string(),
        }
    }

    pub fn is_searchable(&self) -> bool {
        matches!(
            self.control,
            FormControl::Select { .. } | FormControl::Reference { .. }
        )
    }

    /// Values the host may offer when this field asks for a search. Selects
    /// offer their own options; references offer the known folder types.
    pub fn search_candidates<'a, I>(&self, known_types: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match &self.control {
            FormControl::Select { options, .. } => Some(options.clone()),
            FormControl::Reference { .. } => {
                Some(known_types.into_iter().map(str::to_string).collect())
            }
            FormControl::Text { .. } | FormControl::Toggle { .. } => None,
        }
    }

    fn set_value(&mut self, new_value: &str) -> bool {
        match &mut self.control {
            FormControl::Text { value } | FormControl::Reference { value } => {
                if value == new_value {
                    return false;
                }
                *value = new_value.to_string();
                true
            }
            FormControl::Select { options, selected } => {
                let Some(index) = options.iter().position(|o| o == new_value) else {
                    return false;
                };
                let prev = selected.replace(index);
                prev != Some(index)
            }
            FormControl::Toggle { checked } => {
                let Ok(next) = new_value.parse::<bool>() else {
                    return false;
                };
                let prev = std::mem::replace(checked, next);
                prev != next
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum PanelMessage {
    /// Panel -> host: let the user pick a value for `key`.
    #[serde(alias = "navigate")]
    Search { key: String },
    /// Host -> panel: show `value` in field `key`.
    Update { key: String, value: String },
}

impl PanelMessage {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn key(&self) -> &str {
        match self {
            PanelMessage::Search { key } | PanelMessage::Update { key, .. } => key,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDocument {
    fields: Vec<FormField>,
}

/// Builds the form for a property schema; `None` renders an empty document.
pub fn render(properties: Option<&Properties>) -> FormDocument {
    let fields = properties
        .map(|props| {
            props
                .iter()
                .map(|(key, spec)| FormField::from_spec(key, spec))
                .collect()
        })
        .unwrap_or_default();
    FormDocument { fields }
}

impl FormDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn display_value(&self, key: &str) -> Option<String> {
        self.field(key).map(FormField::display_value)
    }

    /// Applies an `update` in place. Anything else, an unknown key, or a value
    /// the field cannot show leaves the document untouched.
    pub fn apply(&mut self, message: &PanelMessage) -> bool {
        let PanelMessage::Update { key, value } = message else {
            return false;
        };
        match self.fields.iter_mut().find(|f| &f.key == key) {
            Some(field) => field.set_value(value),
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<html><body>");

        for field in &self.fields {
            let key = escape_html(&field.key);
            let _ = write!(out, "<label for=\"{key}\">{key}</label><br>");
            match &field.control {
                FormControl::Text { value } => {
                    let _ = write!(
                        out,
                        "<input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\"><br>",
                        escape_html(value)
                    );
                }
                FormControl::Select { options, .. } => {
                    let shown = field.display_value();
                    let _ = write!(out, "<select id=\"{key}\" name=\"{key}\">");
                    for option in options {
                        let option_html = escape_html(option);
                        let selected = if *option == shown { " selected" } else { "" };
                        let _ = write!(
                            out,
                            "<option value=\"{option_html}\"{selected}>{option_html}</option>"
                        );
                    }
                    out.push_str("</select><br>");
                }
                FormControl::Toggle { checked } => {
                    let checked = if *checked { " checked" } else { "" };
                    let _ = write!(
                        out,
                        "<input type=\"checkbox\" id=\"{key}\" name=\"{key}\"{checked}><br>"
                    );
                }
                FormControl::Reference { value } => {
                    let _ = write!(
                        out,
                        "<input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\" readonly>",
                        escape_html(value)
                    );
                    let _ = write!(
                        out,
                        "<button type=\"button\" id=\"searchButton_{key}\" data-search-key=\"{key}\">Search</button><br>"
                    );
                }
            }
        }

        out.push_str(PANEL_SCRIPT);
        out.push_str("</body></html>");
        out
    }
}

const PANEL_SCRIPT: &str = r#"<script>
const host = acquireHostApi();
document.querySelectorAll('[data-search-key]').forEach(button => {
  button.addEventListener('click', () => {
    host.postMessage({ command: 'search', key: button.dataset.searchKey });
  });
});
window.addEventListener('message', event => {
  const msg = event.data;
  if (msg.command !== 'update') return;
  const el = document.getElementById(msg.key);
  if (!el) return;
  if (el.type === 'checkbox') { el.checked = msg.value === 'true'; } else { el.value = msg.value; }
});
</script>"#;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/models/form.rs"]
mod tests;
