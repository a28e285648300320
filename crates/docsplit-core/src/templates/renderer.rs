//! Handlebars-based renderer for the output preambles.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so a
//! `{{variable}}` missing from the data context is an error instead of an empty
//! string. HTML escaping is turned off: the output is markdown, and URLs such as
//! `badge.svg?branch=main&event=push` must come through untouched.

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{DocsplitError, Result};

/// Template renderer used for the static header and the dynamic front matter.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| DocsplitError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
