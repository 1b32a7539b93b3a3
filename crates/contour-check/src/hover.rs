//! Hover text rendering.

use crate::config::CheckerConfig;

/// Render the hover for a property key.
///
/// The signature line is `path: Label1 | Label2` inside a code fence, then
/// the separator and documentation when there is any.
pub fn format_hover(
    config: &CheckerConfig,
    path: &str,
    labels: &[String],
    documentation: Option<&str>,
) -> String {
    let signature = if labels.is_empty() {
        "unknown".to_string()
    } else {
        labels.join(" | ")
    };
    let mut hover = format!(
        "```{}\n{}: {}\n```",
        config.hover_language, path, signature
    );
    if let Some(doc) = documentation {
        hover.push('\n');
        hover.push_str(&config.hover_separator);
        hover.push('\n');
        hover.push_str(doc);
    }
    hover
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_signature_only() {
        let hover = format_hover(
            &CheckerConfig::default(),
            "pack.pack_format",
            &["Number".to_string()],
            None,
        );
        assert_snapshot!(hover, @r"
        ```typescript
        pack.pack_format: Number
        ```
        ");
    }

    #[test]
    fn test_union_with_documentation() {
        let hover = format_hover(
            &CheckerConfig::default(),
            "pack.description",
            &["String".to_string(), "Object".to_string()],
            Some("Shown in the pack list"),
        );
        assert_snapshot!(hover, @r"
        ```typescript
        pack.description: String | Object
        ```
        ******
        Shown in the pack list
        ");
    }

    #[test]
    fn test_custom_language_and_separator() {
        let config = CheckerConfig {
            hover_language: "json".to_string(),
            hover_separator: "---".to_string(),
            ..CheckerConfig::default()
        };
        let hover = format_hover(&config, "a", &[], Some("doc"));
        assert_eq!(hover, "```json\na: unknown\n```\n---\ndoc");
    }
}
