//! The placeholder table: which template lines get substituted, and with what.
//!
//! A placeholder line is a line whose entire text is `{{ <name> }}`. Keys are
//! derived from the entry name, so a key can never disagree with the capture
//! variable it produces in the dynamic output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DocsplitError, Result};

/// One substitution rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Capture variable name, e.g. `ex0`.
    pub name: String,
    /// Page fragment pulled in with `include_relative` on the dynamic host.
    pub include: String,
    /// Screenshot embedded on the static host. Without one, the static
    /// output drops the placeholder line entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Placeholder {
    pub fn new(name: &str, include: &str, image: Option<&str>) -> Self {
        Self {
            name: name.into(),
            include: include.into(),
            image: image.map(Into::into),
        }
    }

    /// The exact line text that triggers this rule.
    pub fn key(&self) -> String {
        format!("{{{{ {} }}}}", self.name)
    }

    /// `![name](image)` followed by a newline, if this rule has an image.
    pub fn image_line(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(|image| format!("![{}]({})\n", self.name, image))
    }

    /// Capture/include/endcapture directive for the dynamic output.
    pub fn capture_directive(&self) -> String {
        format!(
            "{{% capture {} %}}{{% include_relative {} %}}{{% endcapture %}}\n",
            self.name, self.include
        )
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| DocsplitError::InvalidPlaceholder {
            name: self.name.clone(),
            reason: reason.into(),
        };

        if self.name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if self
            .name
            .chars()
            .any(|c| c.is_whitespace() || c == '{' || c == '}' || c == '%')
        {
            return Err(invalid("name must not contain whitespace, braces or '%'"));
        }
        if self.include.trim().is_empty() {
            return Err(invalid("include path is empty"));
        }
        if self.image.as_deref().is_some_and(|i| i.trim().is_empty()) {
            return Err(invalid("image path is empty (omit the field instead)"));
        }
        Ok(())
    }
}

/// Immutable lookup from placeholder line text to its rule.
///
/// Declaration order is kept so listings match the config file.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTable {
    entries: Vec<Placeholder>,
    by_key: HashMap<String, usize>,
}

impl PlaceholderTable {
    /// Build a table, rejecting malformed or duplicate entries.
    pub fn new(entries: Vec<Placeholder>) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if by_key.insert(entry.key(), idx).is_some() {
                return Err(DocsplitError::InvalidPlaceholder {
                    name: entry.name.clone(),
                    reason: "declared more than once".into(),
                });
            }
        }
        Ok(Self { entries, by_key })
    }

    /// Look up a line. One trailing `\n` or `\r\n` is ignored; nothing else is.
    pub fn lookup(&self, line: &str) -> Option<&Placeholder> {
        let text = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);
        self.by_key.get(text).map(|&idx| &self.entries[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The placeholders used by the timeline-range-slider docs.
pub fn default_placeholders() -> Vec<Placeholder> {
    vec![
        Placeholder::new("deps", "docs/deps.html", None),
        Placeholder::new("ex0", "docs/example-0-teaser.html", Some("docs/images/ex0.png")),
        Placeholder::new("ex1", "docs/example-1-default.html", Some("docs/images/ex0.png")),
        Placeholder::new("ex2", "docs/example-2-darkmode.html", Some("docs/images/ex2.png")),
        Placeholder::new("ex3", "docs/example-3-small.html", Some("docs/images/ex3.png")),
        Placeholder::new(
            "ex4",
            "docs/example-4-custom-tick-text.html",
            Some("docs/images/ex4.png"),
        ),
    ]
}
