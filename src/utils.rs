///! Some utility functions

use crate::day::day_label;
use crate::programme::Programme;

/// Escapes the characters that have a meaning in HTML text and attribute values
pub fn escape_html(text: &str) -> String {
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

/// A debug utility that pretty-prints a programme
pub fn print_programme(programme: &Programme) {
    for section in programme.sections(None) {
        println!("DAY {}", day_label(section.day));
        for entry in &section.entries {
            let kind = if entry.is_break() { "~" } else { " " };
            println!("    {} {}\t{}\t{}", kind, entry.time(), entry.topic(), entry.id());
        }
    }
}
