//! Conversion of sanitized markup into wrapped terminal text.

const MIN_WIDTH: usize = 20;

/// Render sanitized HTML as plain lines for the terminal.
///
/// Falls back to the markup itself if conversion fails, so the reader
/// always sees something.
pub fn html_to_lines(html: &str, width: usize) -> Vec<String> {
    let text = match html2text::from_read(html.as_bytes(), width.max(MIN_WIDTH)) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Failed to convert article HTML to text: {}", e);
            html.to_string()
        }
    };

    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
