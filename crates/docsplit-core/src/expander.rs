//! Single-pass expansion of a markdown template into the static and dynamic outputs.
//!
//! Lines that are not placeholders are copied byte-for-byte to both outputs,
//! terminators included. A placeholder line becomes:
//!
//! ```text
//! static:   ![ex0](docs/images/ex0.png)
//!           [demo](<site_url>)            <- no newline; next line continues here
//! dynamic:  {% capture ex0 %}{% include_relative docs/example-0.html %}{% endcapture %}
//!           {{ ex0 }}
//! ```
//!
//! The unterminated demo link is what the published README has always looked
//! like, so it is reproduced exactly.

use crate::placeholder::PlaceholderTable;

/// Fixed text each output starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    pub static_header: String,
    pub dynamic_header: String,
}

/// The two generated documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// For hosts without server-side includes; images are embedded.
    pub static_doc: String,
    /// For the templating host; uses capture/include directives.
    pub dynamic_doc: String,
    /// Number of placeholder lines that were substituted.
    pub substitutions: usize,
}

/// Expand `input` against `table`.
///
/// `demo_url` is the target of the `[demo](...)` link emitted after each image.
pub fn expand(
    input: &str,
    table: &PlaceholderTable,
    preamble: &Preamble,
    demo_url: &str,
) -> Expansion {
    let mut static_doc = String::with_capacity(preamble.static_header.len() + input.len());
    let mut dynamic_doc = String::with_capacity(preamble.dynamic_header.len() + input.len());
    static_doc.push_str(&preamble.static_header);
    dynamic_doc.push_str(&preamble.dynamic_header);

    let mut substitutions = 0;
    for line in input.split_inclusive('\n') {
        let Some(placeholder) = table.lookup(line) else {
            static_doc.push_str(line);
            dynamic_doc.push_str(line);
            continue;
        };

        tracing::debug!(name = %placeholder.name, "substituting placeholder");
        substitutions += 1;

        if let Some(image_line) = placeholder.image_line() {
            static_doc.push_str(&image_line);
            static_doc.push_str(&format!("[demo]({demo_url})"));
        }

        dynamic_doc.push_str(&placeholder.capture_directive());
        dynamic_doc.push_str(line);
    }

    Expansion {
        static_doc,
        dynamic_doc,
        substitutions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::Placeholder;

    const DEMO: &str = "https://example.org/demo";

    fn preamble() -> Preamble {
        Preamble {
            static_header: "# Title\n\n".into(),
            dynamic_header: "---\nlayout: default\n---\n".into(),
        }
    }

    fn table() -> PlaceholderTable {
        PlaceholderTable::new(vec![
            Placeholder::new("deps", "deps.html", None),
            Placeholder::new("ex0", "example-0-teaser.html", Some("images/ex0.png")),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_placeholders_passes_through() {
        let input = "intro\n\n  indented line\r\nlast line without newline";
        let out = expand(input, &table(), &preamble(), DEMO);
        assert_eq!(out.static_doc, format!("# Title\n\n{input}"));
        assert_eq!(out.dynamic_doc, format!("---\nlayout: default\n---\n{input}"));
        assert_eq!(out.substitutions, 0);
    }

    #[test]
    fn test_empty_input_is_just_preambles() {
        let out = expand("", &table(), &preamble(), DEMO);
        assert_eq!(out.static_doc, "# Title\n\n");
        assert_eq!(out.dynamic_doc, "---\nlayout: default\n---\n");
    }

    #[test]
    fn test_image_placeholder() {
        let out = expand("hello\n{{ ex0 }}\nworld\n", &table(), &preamble(), DEMO);
        assert_eq!(
            out.static_doc,
            "# Title\n\nhello\n![ex0](images/ex0.png)\n[demo](https://example.org/demo)world\n"
        );
        assert_eq!(
            out.dynamic_doc,
            "---\nlayout: default\n---\nhello\n\
             {% capture ex0 %}{% include_relative example-0-teaser.html %}{% endcapture %}\n\
             {{ ex0 }}\nworld\n"
        );
        assert_eq!(out.substitutions, 1);
    }

    #[test]
    fn test_placeholder_without_image_only_touches_dynamic() {
        let out = expand("a\n{{ deps }}\nb\n", &table(), &preamble(), DEMO);
        assert_eq!(out.static_doc, "# Title\n\na\nb\n");
        assert_eq!(
            out.dynamic_doc,
            "---\nlayout: default\n---\na\n\
             {% capture deps %}{% include_relative deps.html %}{% endcapture %}\n\
             {{ deps }}\nb\n"
        );
    }

    #[test]
    fn test_placeholder_on_last_line_without_newline() {
        let out = expand("a\n{{ ex0 }}", &table(), &preamble(), DEMO);
        assert!(out.static_doc.ends_with("a\n![ex0](images/ex0.png)\n[demo](https://example.org/demo)"));
        assert!(out.dynamic_doc.ends_with("{% endcapture %}\n{{ ex0 }}"));
    }

    #[test]
    fn test_crlf_placeholder_keeps_original_terminator() {
        let out = expand("{{ deps }}\r\n", &table(), &preamble(), DEMO);
        assert!(out.dynamic_doc.ends_with("{% endcapture %}\n{{ deps }}\r\n"));
    }

    #[test]
    fn test_inline_placeholder_text_is_not_substituted() {
        let input = "use {{ ex0 }} here\n";
        let out = expand(input, &table(), &preamble(), DEMO);
        assert!(out.static_doc.ends_with(input));
        assert!(out.dynamic_doc.ends_with(input));
        assert_eq!(out.substitutions, 0);
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let input = "x\n{{ ex0 }}\n{{ deps }}\ny\n";
        let first = expand(input, &table(), &preamble(), DEMO);
        let second = expand(input, &table(), &preamble(), DEMO);
        assert_eq!(first, second);
        assert_eq!(first.substitutions, 2);
    }
}
