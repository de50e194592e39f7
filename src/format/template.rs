//! User-supplied output templates
//!
//! Templates use Tera syntax. Placeholders are the camelCase field names of
//! the record being rendered, the same names used by `--format json`.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATE_NAME: &str = "output";

/// Default template for a single build status record
pub const DEFAULT_STATE_TEMPLATE: &str = "\
Name:  {{ name }}     Key: {{ key }}
State: {{ state }}
URL:   {{ url }}
Date:  {{ dateAdded }}

   {{ description }}
";

/// Default template for one `log` line
pub const DEFAULT_LOG_TEMPLATE: &str = "\
{{ id }} {{ message }}
{% if hasStatus %}   Successful: {{ status.successful }}, In Progress: {{ status.inProgress }}, Failed: {{ status.failed }}{% else %}   No build status{% endif %}
";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid template: {0}")]
    Parse(#[source] tera::Error),

    #[error("Failed to render template: {0}")]
    Render(#[source] tera::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A parsed output template
#[derive(Debug, Clone)]
pub struct Template {
    tera: Tera,
    source: String,
}

impl Template {
    /// Parses `source`, failing on malformed syntax
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(FormatError::Parse)?;

        Ok(Self {
            tera,
            source: source.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders one record. Referencing a field the record lacks is an error.
    pub fn render<T: Serialize>(&self, record: &T) -> Result<String, FormatError> {
        let context = Context::from_serialize(record).map_err(FormatError::Render)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(FormatError::Render)
    }
}
