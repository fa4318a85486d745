//! Document encoders.
//!
//! Each encoder walks the block list once, in order. None of them reorder or
//! drop content blocks; the plain-text encoder is the only one that skips the
//! header graphic since it has nowhere to put it.
//!
//! PDF goes through Pandoc: the Markdown rendition is piped to an external
//! `pandoc` process that typesets it on a letter page.

use crate::domain::document::{Alignment, Block, ReportDocument, Span, TableStyle, TextStyle};
use crate::domain::ports::DocumentEncoder;
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub const DEFAULT_LINES_PER_PAGE: usize = 60;
pub const DEFAULT_PDF_ENGINE: &str = "xelatex";
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 30;
const TEXT_WIDTH: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
    Text,
    Json,
    Pdf,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(PlannerError::InvalidConfigValueError {
                field: "report.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: html, markdown, text, json, pdf".to_string(),
            }),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '|' | '[' | ']' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn alignment_css(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

fn text_css(style: &TextStyle) -> String {
    format!(
        "font-size:{}pt;line-height:{}pt;color:{};text-align:{};margin:0 0 {}pt 0",
        style.font_size,
        style.leading,
        style.color,
        alignment_css(style.alignment),
        style.space_after
    )
}

/// Printable standalone HTML page sized for US letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEncoder;

impl HtmlEncoder {
    fn write_table(out: &mut String, rows: &[(String, String)], style: &TableStyle) -> fmt::Result {
        writeln!(
            out,
            "<table style=\"border-collapse:collapse;font-family:{},sans-serif;font-size:{}pt\">",
            escape_html(&style.font),
            style.font_size
        )?;
        for (index, (key, value)) in rows.iter().enumerate() {
            let background = if index == 0 {
                style.header_background
            } else {
                style.body_background
            };
            writeln!(out, "<tr style=\"background:{}\">", background)?;
            for (column, cell) in [key, value].into_iter().enumerate() {
                let width = style.column_widths.get(column).copied().unwrap_or(100.0);
                writeln!(
                    out,
                    "<td style=\"width:{}pt;border:{}pt solid {};padding:4pt 6pt {}pt 6pt\">{}</td>",
                    width,
                    style.grid_width,
                    style.grid_color,
                    style.bottom_padding,
                    escape_html(cell)
                )?;
            }
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</table>")
    }

    fn write_spans(out: &mut String, spans: &[Span]) {
        for span in spans {
            if span.bold {
                out.push_str("<strong>");
                out.push_str(&escape_html(&span.text));
                out.push_str("</strong>");
            } else {
                out.push_str(&escape_html(&span.text));
            }
        }
    }

    fn write_document(document: &ReportDocument) -> std::result::Result<String, fmt::Error> {
        let page = document.page;
        let mut out = String::new();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape_html(&document.title))?;
        writeln!(
            out,
            "<style>@page {{ size: {}pt {}pt; margin: {}pt; }} body {{ font-family: Helvetica, Arial, sans-serif; max-width: {}pt; margin: 0 auto; }}</style>",
            page.width,
            page.height,
            page.margin,
            page.width - 2.0 * page.margin
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;

        for block in &document.blocks {
            match block {
                Block::Image { graphic } => writeln!(
                    out,
                    "<div style=\"text-align:{}\"><img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"\"></div>",
                    alignment_css(graphic.alignment),
                    escape_html(&graphic.path.to_string_lossy()),
                    graphic.width,
                    graphic.height
                )?,
                Block::Heading { text, style } => {
                    writeln!(out, "<h1 style=\"{}\">{}</h1>", text_css(style), escape_html(text))?
                }
                Block::Subheading { text, style } => {
                    writeln!(out, "<h2 style=\"{}\">{}</h2>", text_css(style), escape_html(text))?
                }
                Block::KeyValueTable { rows, style } => Self::write_table(&mut out, rows, style)?,
                Block::Paragraph { spans, style } => {
                    write!(out, "<p style=\"{}\">", text_css(style))?;
                    Self::write_spans(&mut out, spans);
                    writeln!(out, "</p>")?;
                }
                Block::ItemizedList {
                    bullet,
                    items,
                    style,
                } => {
                    writeln!(
                        out,
                        "<ul style=\"list-style:none;padding-left:0;{}\">",
                        text_css(style)
                    )?;
                    for item in items {
                        writeln!(out, "<li>{} {}</li>", escape_html(bullet), escape_html(item))?;
                    }
                    writeln!(out, "</ul>")?;
                }
                Block::Spacer { height } => {
                    writeln!(out, "<div style=\"height:{}pt\"></div>", height)?
                }
            }
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}

#[async_trait]
impl DocumentEncoder for HtmlEncoder {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn media_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    async fn encode(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        Self::write_document(document)
            .map(String::into_bytes)
            .map_err(|e| PlannerError::EncodingError {
                message: format!("HTML output failed: {}", e),
            })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownEncoder;

impl MarkdownEncoder {
    fn spans(spans: &[Span]) -> String {
        let mut out = String::new();
        for span in spans {
            if span.bold {
                let trimmed = span.text.trim_end();
                out.push_str("**");
                out.push_str(&escape_markdown(trimmed));
                out.push_str("**");
                out.push_str(&span.text[trimmed.len()..]);
            } else {
                out.push_str(&escape_markdown(&span.text));
            }
        }
        out
    }

    /// Markdown rendition shared by the Markdown and PDF encoders.
    fn render(document: &ReportDocument) -> String {
        let mut sections: Vec<String> = Vec::new();

        for block in &document.blocks {
            match block {
                Block::Image { graphic } => {
                    sections.push(format!("![logo]({})", graphic.path.to_string_lossy()))
                }
                Block::Heading { text, .. } => {
                    sections.push(format!("# {}", escape_markdown(text)))
                }
                Block::Subheading { text, .. } => {
                    sections.push(format!("## {}", escape_markdown(text)))
                }
                Block::KeyValueTable { rows, .. } => {
                    let mut lines = Vec::with_capacity(rows.len() + 1);
                    for (index, (key, value)) in rows.iter().enumerate() {
                        lines.push(format!(
                            "| {} | {} |",
                            escape_markdown(key),
                            escape_markdown(value)
                        ));
                        if index == 0 {
                            lines.push("|---|---|".to_string());
                        }
                    }
                    sections.push(lines.join("\n"));
                }
                Block::Paragraph { spans, .. } => sections.push(Self::spans(spans)),
                Block::ItemizedList { items, .. } => sections.push(
                    items
                        .iter()
                        .map(|item| format!("- {}", escape_markdown(item)))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                Block::Spacer { .. } => {}
            }
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

#[async_trait]
impl DocumentEncoder for MarkdownEncoder {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn media_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }

    async fn encode(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        Ok(MarkdownEncoder::render(document).into_bytes())
    }
}

/// Plain text split into pages of `lines_per_page` lines, separated by form
/// feeds, each ending with a page footer.
#[derive(Debug, Clone, Copy)]
pub struct TextEncoder {
    lines_per_page: usize,
}

impl TextEncoder {
    pub fn new(lines_per_page: usize) -> Self {
        // two lines per page go to the footer
        Self {
            lines_per_page: lines_per_page.max(3),
        }
    }

    fn align(line: &str, alignment: Alignment) -> String {
        let len = line.chars().count();
        if len >= TEXT_WIDTH {
            return line.to_string();
        }
        match alignment {
            Alignment::Left => line.to_string(),
            Alignment::Center => format!("{}{}", " ".repeat((TEXT_WIDTH - len) / 2), line),
            Alignment::Right => format!("{}{}", " ".repeat(TEXT_WIDTH - len), line),
        }
    }

    fn block_lines(block: &Block) -> Vec<String> {
        match block {
            Block::Image { .. } => Vec::new(),
            Block::Heading { text, style } => {
                let underline = "=".repeat(text.chars().count());
                vec![Self::align(text, style.alignment), Self::align(&underline, style.alignment)]
            }
            Block::Subheading { text, style } => {
                let underline = "-".repeat(text.chars().count());
                vec![Self::align(text, style.alignment), Self::align(&underline, style.alignment)]
            }
            Block::KeyValueTable { rows, .. } => {
                let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
                rows.iter()
                    .map(|(key, value)| format!("{:<width$}  {}", key, value, width = key_width))
                    .collect()
            }
            Block::Paragraph { spans, style } => {
                let text: String = spans.iter().map(|s| s.text.as_str()).collect();
                wrap(&text, TEXT_WIDTH)
                    .into_iter()
                    .map(|line| Self::align(&line, style.alignment))
                    .collect()
            }
            Block::ItemizedList { bullet, items, .. } => items
                .iter()
                .map(|item| format!("  {} {}", bullet, item))
                .collect(),
            Block::Spacer { height } => {
                let count = (height / 10.0).round().max(1.0) as usize;
                vec![String::new(); count]
            }
        }
    }
}

impl Default for TextEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_LINES_PER_PAGE)
    }
}

#[async_trait]
impl DocumentEncoder for TextEncoder {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn media_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    async fn encode(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        let lines: Vec<String> = document.blocks.iter().flat_map(Self::block_lines).collect();

        let body_lines = self.lines_per_page - 2;
        let pages: Vec<&[String]> = if lines.is_empty() {
            vec![&lines[..]]
        } else {
            lines.chunks(body_lines).collect()
        };
        let total = pages.len();

        let rendered: Vec<String> = pages
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let mut text = page.join("\n");
                text.push_str("\n\n");
                text.push_str(&Self::align(
                    &format!("Page {} of {}", index + 1, total),
                    Alignment::Center,
                ));
                text.push('\n');
                text
            })
            .collect();

        Ok(rendered.join("\x0c").into_bytes())
    }
}

/// Greedy word wrap; words longer than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

#[async_trait]
impl DocumentEncoder for JsonEncoder {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn media_type(&self) -> &'static str {
        "application/json"
    }

    async fn encode(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(document)?)
    }
}

/// Letter-size PDF typeset by an external Pandoc install.
///
/// The document goes in as Markdown on stdin; Pandoc writes the PDF to a
/// scratch file which is read back and removed.
#[derive(Debug, Clone)]
pub struct PdfEncoder {
    pandoc_path: Option<String>,
    pdf_engine: String,
    timeout_secs: u64,
}

impl Default for PdfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfEncoder {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            pdf_engine: DEFAULT_PDF_ENGINE.to_string(),
            timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    pub fn with_pdf_engine(mut self, engine: impl Into<String>) -> Self {
        self.pdf_engine = engine.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    /// Pandoc flags; the page matches `PageSetup::letter` (1in = 72pt margins).
    fn pandoc_args(&self, output: &Path) -> Vec<String> {
        vec![
            "-f".to_string(),
            "markdown".to_string(),
            format!("--pdf-engine={}", self.pdf_engine),
            "-V".to_string(),
            "geometry:letterpaper".to_string(),
            "-V".to_string(),
            "geometry:margin=1in".to_string(),
            "-V".to_string(),
            "fontsize=11pt".to_string(),
            "-o".to_string(),
            output.to_string_lossy().into_owned(),
        ]
    }

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("vitalforce-{}.pdf", uuid::Uuid::new_v4().simple()))
    }

    async fn run_pandoc(&self, markdown: &str, output: &Path) -> Result<Vec<u8>> {
        let mut child = Command::new(self.pandoc_command())
            .args(self.pandoc_args(output))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PlannerError::EncodingError {
                message: format!("Failed to start pandoc '{}': {}", self.pandoc_command(), e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| PlannerError::EncodingError {
                    message: format!("Failed to write to pandoc: {}", e),
                })?;
        }

        let result = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| PlannerError::EncodingError {
            message: format!("pandoc did not finish within {}s", self.timeout_secs),
        })?
        .map_err(|e| PlannerError::EncodingError {
            message: format!("pandoc execution failed: {}", e),
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(PlannerError::EncodingError {
                message: format!("pandoc returned an error: {}", stderr.trim()),
            });
        }

        Ok(tokio::fs::read(output).await?)
    }
}

#[async_trait]
impl DocumentEncoder for PdfEncoder {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn media_type(&self) -> &'static str {
        "application/pdf"
    }

    async fn encode(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        let markdown = MarkdownEncoder::render(document);
        let output = Self::scratch_path();

        let result = self.run_pandoc(&markdown, &output).await;
        if let Err(e) = tokio::fs::remove_file(&output).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Could not remove {}: {}", output.display(), e);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Color, HeaderGraphic};
    use std::path::PathBuf;

    fn sample_document() -> ReportDocument {
        let mut document = ReportDocument::new("Personalized Training Plan - Ana");
        document.push(Block::Image {
            graphic: HeaderGraphic {
                path: PathBuf::from("static/logo.png"),
                width: 60.0,
                height: 60.0,
                alignment: Alignment::Center,
            },
        });
        document.push(Block::Heading {
            text: "VitalForce Gym".to_string(),
            style: TextStyle::title(),
        });
        document.push(Block::KeyValueTable {
            rows: vec![
                ("Name:".to_string(), "Ana <Admin>".to_string()),
                ("Age:".to_string(), "29".to_string()),
            ],
            style: TableStyle::identity(),
        });
        document.push(Block::Spacer { height: 20.0 });
        document.push(Block::Paragraph {
            spans: vec![Span::bold("Day 1")],
            style: TextStyle::body(),
        });
        document.push(Block::ItemizedList {
            bullet: "•".to_string(),
            items: vec!["Squats".to_string(), "Row".to_string(), "Plank".to_string()],
            style: TextStyle::body(),
        });
        document
    }

    #[tokio::test]
    async fn test_html_keeps_block_order_and_styles() {
        let html = HtmlEncoder.encode(&sample_document()).await.unwrap();
        let html = String::from_utf8(html).unwrap();

        let img = html.find("<img").unwrap();
        let h1 = html.find("<h1").unwrap();
        let table = html.find("<table").unwrap();
        let day = html.find("<strong>Day 1</strong>").unwrap();
        let squats = html.find("• Squats").unwrap();
        let plank = html.find("• Plank").unwrap();
        assert!(img < h1 && h1 < table && table < day && day < squats && squats < plank);

        assert!(html.contains("color:#2E86C1"));
        assert!(html.contains("text-align:center"));
        assert!(html.contains("background:#AED6F1"));
        assert!(html.contains("background:#F5F5F5"));
        assert!(html.contains("size: 612pt 792pt"));
        assert!(html.contains("Ana &lt;Admin&gt;"));
        assert!(!html.contains("Ana <Admin>"));
    }

    #[tokio::test]
    async fn test_markdown_output() {
        let markdown = MarkdownEncoder.encode(&sample_document()).await.unwrap();
        let markdown = String::from_utf8(markdown).unwrap();

        assert!(markdown.contains("![logo](static/logo.png)"));
        assert!(markdown.contains("# VitalForce Gym"));
        assert!(markdown.contains("| Name: | Ana <Admin> |\n|---|---|\n| Age: | 29 |"));
        assert!(markdown.contains("**Day 1**"));
        assert!(markdown.contains("- Squats\n- Row\n- Plank"));
    }

    #[test]
    fn test_markdown_bold_span_keeps_trailing_space_outside() {
        let spans = vec![Span::bold("Description: "), Span::plain("Full body.")];
        assert_eq!(MarkdownEncoder::spans(&spans), "**Description:** Full body.");
    }

    #[tokio::test]
    async fn test_text_encoder_paginates() {
        let mut document = ReportDocument::new("long");
        document.push(Block::ItemizedList {
            bullet: "•".to_string(),
            items: (1..=25).map(|i| format!("Exercise {}", i)).collect(),
            style: TextStyle::body(),
        });

        let text = TextEncoder::new(12).encode(&document).await.unwrap();
        let text = String::from_utf8(text).unwrap();
        let pages: Vec<&str> = text.split('\x0c').collect();

        // 10 body lines per page
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("Exercise 1\n"));
        assert!(pages[0].contains("Page 1 of 3"));
        assert!(pages[2].contains("Exercise 25"));
        assert!(pages[2].contains("Page 3 of 3"));
    }

    #[tokio::test]
    async fn test_text_encoder_centers_heading() {
        let text = TextEncoder::default().encode(&sample_document()).await.unwrap();
        let text = String::from_utf8(text).unwrap();
        let heading = text.lines().find(|l| l.contains("VitalForce Gym")).unwrap();
        assert!(heading.starts_with(' '));
        assert!(text.contains("Name:  Ana <Admin>"));
        assert!(text.contains("  • Squats"));
    }

    #[tokio::test]
    async fn test_json_encoder_is_parseable() {
        let bytes = JsonEncoder.encode(&sample_document()).await.unwrap();
        let restored: ReportDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(restored, sample_document());
        if let Block::Heading { style, .. } = &restored.blocks[1] {
            assert_eq!(style.color, Color::rgb(0x2E, 0x86, 0xC1));
        } else {
            panic!("expected heading");
        }
    }

    #[test]
    fn test_wrap_long_text() {
        let text = "word ".repeat(40);
        let lines = wrap(text.trim(), 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), text.trim());
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("PDF".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert!("docx".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Pdf.to_string(), "pdf");
    }

    #[test]
    fn test_pdf_pandoc_args_use_letter_page() {
        let encoder = PdfEncoder::new().with_pdf_engine("pdflatex");
        let args = encoder.pandoc_args(Path::new("/tmp/report.pdf"));

        assert_eq!(encoder.pandoc_command(), "pandoc");
        assert_eq!(encoder.extension(), "pdf");
        assert_eq!(encoder.media_type(), "application/pdf");
        assert!(args.contains(&"--pdf-engine=pdflatex".to_string()));
        assert!(args.contains(&"geometry:letterpaper".to_string()));
        assert!(args.contains(&"geometry:margin=1in".to_string()));
        assert_eq!(&args[args.len() - 2..], ["-o", "/tmp/report.pdf"]);
    }

    #[tokio::test]
    async fn test_pdf_without_pandoc_is_an_encoding_error() {
        let encoder = PdfEncoder::new()
            .with_pandoc_path("/nonexistent/vitalforce/pandoc")
            .with_timeout(5);

        let err = encoder.encode(&sample_document()).await.unwrap_err();
        assert!(matches!(
            err,
            PlannerError::EncodingError { ref message } if message.contains("pandoc")
        ));
    }

    #[test]
    fn test_pdf_scratch_files_are_unique() {
        let first = PdfEncoder::scratch_path();
        let second = PdfEncoder::scratch_path();
        assert_ne!(first, second);
        assert_eq!(first.extension().and_then(|e| e.to_str()), Some("pdf"));
    }
}
