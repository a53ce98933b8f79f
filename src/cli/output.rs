//! Output formatting utilities

use crate::domain::{JournalEntry, DATE_FORMAT};

/// Format listed entries: a `# yyyy-mm-dd` header whenever the date changes,
/// then each entry's text wrapped to `width` columns. `expand` adds a blank
/// line after every entry.
pub fn format_entry_list(entries: &[JournalEntry], width: usize, expand: bool) -> String {
    if entries.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut output = String::new();
    let mut last_date = None;
    for entry in entries {
        if last_date != Some(entry.date) {
            output.push_str(&format!("# {}\n", entry.date.format(DATE_FORMAT)));
            last_date = Some(entry.date);
        }
        for line in wrap_text(&entry.text, width) {
            output.push_str(&line);
            output.push('\n');
        }
        if expand {
            output.push('\n');
        }
    }
    output
}

/// Greedy word wrap. Runs of whitespace collapse to one space; words longer
/// than `width` are split. Empty text yields a single empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len == 0 {
            while chars.len() > width {
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
        } else {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
