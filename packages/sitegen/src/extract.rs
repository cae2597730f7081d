//! Fenced code block extraction from model completions.
//!
//! A model completion is free text assumed to contain zero or more fenced
//! code blocks labeled by language tag. Extraction is total: a missing or
//! unterminated block yields an empty string for that field, never an error.

use regex::Regex;

use crate::types::site::GeneratedSite;

/// Parse a raw model completion into the three site parts.
///
/// Searches independently for the first block tagged `html`, the first
/// tagged `css`, and the first tagged `js` or `javascript` (the two script
/// aliases are equivalent). Matches are trimmed of surrounding whitespace.
/// With multiple blocks of the same tag, the first wins. Worst case the
/// result is an all-empty [`GeneratedSite`].
pub fn extract_code(raw: &str) -> GeneratedSite {
    GeneratedSite {
        html: first_block(raw, r"html"),
        css: first_block(raw, r"css"),
        js: first_block(raw, r"(?:javascript|js)"),
    }
}

/// First fenced block with the given tag alternation, trimmed; empty string
/// when no terminated block matches.
fn first_block(raw: &str, tag: &str) -> String {
    // Patterns are constant, so compilation cannot fail.
    let pattern = Regex::new(&format!(r"(?s)```{}\b(.*?)```", tag)).unwrap();
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fenced(tag: &str, body: &str) -> String {
        format!("```{}\n{}\n```", tag, body)
    }

    #[test]
    fn test_extracts_all_three_parts() {
        let raw = format!(
            "Here is your site.\n\n{}\n\nStyles:\n{}\n\nAnd behavior:\n{}\n",
            fenced("html", "<h1>Hello</h1>"),
            fenced("css", "h1 { color: red; }"),
            fenced("js", "console.log('hi');"),
        );

        let site = extract_code(&raw);
        assert_eq!(site.html, "<h1>Hello</h1>");
        assert_eq!(site.css, "h1 { color: red; }");
        assert_eq!(site.js, "console.log('hi');");
    }

    #[test]
    fn test_total_on_empty_and_plain_text() {
        assert!(extract_code("").is_empty());
        assert!(extract_code("no code here, just prose").is_empty());
    }

    #[test]
    fn test_missing_block_defaults_to_empty_string() {
        // A valid site may omit a field, e.g. no script.
        let raw = format!("{}\n{}", fenced("html", "<p>x</p>"), fenced("css", "p{}"));
        let site = extract_code(&raw);
        assert_eq!(site.html, "<p>x</p>");
        assert_eq!(site.css, "p{}");
        assert_eq!(site.js, "");
    }

    #[test]
    fn test_unterminated_fence_is_no_match() {
        let site = extract_code("```html\n<h1>never closed");
        assert_eq!(site.html, "");
    }

    #[test]
    fn test_first_match_wins() {
        let raw = format!("{}\n{}", fenced("html", "A"), fenced("html", "B"));
        assert_eq!(extract_code(&raw).html, "A");
    }

    #[test]
    fn test_script_aliases_are_equivalent() {
        let js = extract_code(&fenced("js", "let a = 1;"));
        let javascript = extract_code(&fenced("javascript", "let a = 1;"));
        assert_eq!(js.js, "let a = 1;");
        assert_eq!(js.js, javascript.js);
    }

    #[test]
    fn test_other_tags_are_ignored() {
        let raw = fenced("json", r#"{"html": "not a site"}"#);
        let site = extract_code(&raw);
        assert!(site.is_empty());
    }

    #[test]
    fn test_match_is_trimmed() {
        let site = extract_code("```css\n\n  body { margin: 0; }  \n\n```");
        assert_eq!(site.css, "body { margin: 0; }");
    }
}
