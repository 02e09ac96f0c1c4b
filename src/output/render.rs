use crate::models::Message;
use crate::parsers::format_timestamp;

/// Render a message as `[<timestamp>] <role>: <text>`.
///
/// Newlines inside the text are written as-is. Messages without a timestamp are not rendered.
pub fn render_line(message: &Message) -> Option<String> {
    let ts = message.timestamp.as_ref()?;
    Some(format!("[{}] {}: {}", format_timestamp(ts), message.role, message.text))
}

/// Render messages in order, one per line, keeping at most `limit` lines (0 = unlimited).
///
/// Output ends with a newline unless it is empty.
pub fn render_transcript(messages: &[Message], limit: usize) -> String {
    let max_lines = if limit == 0 { usize::MAX } else { limit };
    let lines: Vec<String> = messages.iter().filter_map(render_line).take(max_lines).collect();

    if lines.is_empty() {
        return String::new();
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
