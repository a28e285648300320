//! Preamble templates for the two outputs.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{title}}`, `{{tagline}}`: static header text
//! - `{{site_url}}`, `{{site_label}}`: project page link (label is the URL without scheme)
//! - `{{badge_label}}`, `{{badge_url}}`: CI badge
//! - `{{layout}}`: Jekyll layout in the front matter
//!
//! Only the preambles go through Handlebars. The document body is never
//! template-rendered; see [`crate::expander`].

pub mod embedded;
pub mod renderer;

use crate::config::ProjectInfo;
use crate::error::Result;
use crate::expander::Preamble;

use renderer::TemplateRenderer;

/// Render both preambles from project metadata.
pub fn render_preamble(project: &ProjectInfo) -> Result<Preamble> {
    let renderer = TemplateRenderer::new();
    let data = serde_json::json!({
        "title": project.title,
        "site_url": project.site_url,
        "site_label": project.site_label(),
        "tagline": project.tagline,
        "badge_label": project.badge_label,
        "badge_url": project.badge_url,
        "layout": project.layout,
    });

    Ok(Preamble {
        static_header: renderer.render(embedded::STATIC_PREAMBLE, &data)?,
        dynamic_header: renderer.render(embedded::DYNAMIC_PREAMBLE, &data)?,
    })
}
