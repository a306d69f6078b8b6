//! Export of diff results as plain text and standalone HTML

use std::fs;
use std::path::Path;

use html_escape::encode_quoted_attribute;
use log::debug;

use crate::config::DiffConfig;
use crate::diff::{DiffResult, SegmentKind};
use crate::error::{Error, Result};

pub const DEFAULT_TITLE: &str = "Text Diff";
pub const DEFAULT_LANG: &str = "en";

const ADDED_STYLE: &str = "background-color: #d4edda; color: #155724;";
const REMOVED_STYLE: &str = "background-color: #f8d7da; color: #721c24;";

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    PlainText,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::PlainText => "text/plain",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::PlainText => "txt",
        }
    }

    /// File name offered when saving an export
    pub fn default_file_name(&self) -> String {
        format!("diff-result.{}", self.extension())
    }

    /// Render a result in this format, taking HTML title and lang from `config`
    pub fn render(&self, result: &DiffResult, config: &DiffConfig) -> String {
        match self {
            ExportFormat::Html => render_html(result, &config.html_title, &config.html_lang),
            ExportFormat::PlainText => export_plain_text(result),
        }
    }

    /// Render a result and write it to `path`
    pub fn write_to(
        &self,
        result: &DiffResult,
        config: &DiffConfig,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let content = self.render(result, config);
        debug!(
            "writing {} export ({} bytes) to {}",
            self.mime_type(),
            content.len(),
            path.display()
        );
        fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serialize a result as annotated plain text
///
/// Each segment's text is prefixed with `+` (added), `-` (removed) or a space
/// (unchanged) and segments are concatenated with no separator.
pub fn export_plain_text(result: &DiffResult) -> String {
    let capacity = result.iter().map(|s| s.text.len() + 1).sum();
    let mut output = String::with_capacity(capacity);
    for segment in result {
        output.push(segment.kind.marker());
        output.push_str(&segment.text);
    }
    output
}

/// Serialize a result as a self-contained HTML document
pub fn export_html(result: &DiffResult, title: &str) -> String {
    render_html(result, title, DEFAULT_LANG)
}

/// Like [`export_html`] with an explicit `lang` attribute
pub fn render_html(result: &DiffResult, title: &str, lang: &str) -> String {
    let mut body = String::new();
    for segment in result {
        let text = encode_quoted_attribute(&segment.text);
        match segment.kind {
            SegmentKind::Added => body.push_str(&format!(
                r#"<span class="diff-added" style="{ADDED_STYLE}">{text}</span>"#
            )),
            SegmentKind::Removed => body.push_str(&format!(
                r#"<span class="diff-removed" style="{REMOVED_STYLE}">{text}</span>"#
            )),
            SegmentKind::Unchanged => body.push_str(&text),
        }
    }

    let title = encode_quoted_attribute(title);
    let lang = encode_quoted_attribute(lang);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: monospace; white-space: pre-wrap; }}
        .diff-added {{ {ADDED_STYLE} }}
        .diff-removed {{ {REMOVED_STYLE} }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <div>{body}</div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffMode;
    use crate::diff::Segment;

    fn sample() -> DiffResult {
        DiffResult::new(
            DiffMode::Line,
            vec![
                Segment::unchanged("a\nb\n", 2),
                Segment::removed("c", 1),
                Segment::added("d", 1),
            ],
        )
    }

    #[test]
    fn test_plain_text_markers() {
        assert_eq!(export_plain_text(&sample()), " a\nb\n-c+d");
        assert_eq!(export_plain_text(&DiffResult::default()), "");
    }

    #[test]
    fn test_html_escapes_quotes_and_ampersands() {
        let raw = r#"<a href="x">Tom & Jerry's</a>"#;
        let result = DiffResult::new(DiffMode::Line, vec![Segment::removed(raw, 1)]);
        let html = export_html(&result, "Tom & Jerry's");

        let span = html
            .split(r#"<span class="diff-removed""#)
            .nth(1)
            .and_then(|rest| rest.split("</span>").next())
            .unwrap();
        let escaped = span.split_once('>').unwrap().1;

        assert!(!escaped.contains(['<', '>', '"', '\'']));
        assert!(escaped.contains("&amp;") && escaped.contains("&quot;"));
        assert_eq!(html_escape::decode_html_entities(escaped), raw);
        assert!(html.contains("<title>Tom &amp; Jerry"));
    }

    #[test]
    fn test_html_document_structure() {
        let html = export_html(&sample(), "My diff");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>My diff</title>"));
        assert!(html.contains("<h1>My diff</h1>"));
        assert!(html.contains(r#"<span class="diff-removed""#));
        assert!(html.contains(">c</span>"));
        assert!(html.contains(">d</span>"));
        assert!(html.contains("<div>a\nb\n<span"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_escapes_content_and_title() {
        let result = DiffResult::new(
            DiffMode::Word,
            vec![
                Segment::unchanged("<b>", 1),
                Segment::added("<script>alert('x')</script>", 5),
            ],
        );

        let html = export_html(&result, "<script>");

        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert('x')"));
        assert!(html.contains("&lt;script&gt;alert("));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_render_uses_config() {
        let config = DiffConfig::new().with_html_title("Report").with_html_lang("ja");

        let html = ExportFormat::Html.render(&sample(), &config);
        assert!(html.contains(r#"<html lang="ja">"#));
        assert!(html.contains("<title>Report</title>"));

        let text = ExportFormat::PlainText.render(&sample(), &config);
        assert_eq!(text, export_plain_text(&sample()));
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Html.mime_type(), "text/html");
        assert_eq!(ExportFormat::PlainText.mime_type(), "text/plain");
        assert_eq!(ExportFormat::Html.default_file_name(), "diff-result.html");
        assert_eq!(ExportFormat::PlainText.default_file_name(), "diff-result.txt");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ExportFormat::PlainText.default_file_name());

        ExportFormat::PlainText
            .write_to(&sample(), &DiffConfig::default(), &path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), " a\nb\n-c+d");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("diff-result.html");

        let err = ExportFormat::Html
            .write_to(&sample(), &DiffConfig::default(), &path)
            .unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
