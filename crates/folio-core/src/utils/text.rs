use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Wrap text at word boundaries so that no line is wider than `max_width`
/// display columns. Words wider than the limit are split.
///
/// # Examples
/// ```
/// use folio_core::utils::text::wrap_text;
/// let wrapped = wrap_text("Hardware design and signal integrity", 16);
/// assert_eq!(wrapped[0], "Hardware design");
/// ```
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate to `max_width` display columns, ending in an ellipsis when cut.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - ELLIPSIS.width();
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push_str(ELLIPSIS);
    result
}

pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
}
