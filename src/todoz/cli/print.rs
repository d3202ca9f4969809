use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use timeago::Formatter;
use todoz::envelope;
use todoz::model::{Todo, TodoStatus};
use todoz::outcome::Outcome;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const DONE_MARKER: &str = "✓";
const OPEN_MARKER: &str = "·";

pub(crate) fn print_heading(text: &str) {
    println!("\n{}", text.bold().cyan());
}

pub(crate) fn print_envelope(outcome: &Outcome, pretty: bool) {
    println!("{}", envelope::render(outcome, pretty));
}

pub(crate) fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    for (i, todo) in todos.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let marker = match todo.status {
            TodoStatus::Active => format!("  {} ", OPEN_MARKER),
            TodoStatus::Completed => format!("  {} ", DONE_MARKER),
        };

        let details_preview: String = todo
            .details
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_details = if details_preview.is_empty() {
            todo.title.clone()
        } else {
            format!("{} {}", todo.title, details_preview)
        };

        let fixed_width = marker.width() + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_details, available);
        let padding = available.saturating_sub(title_display.width());

        let marker_colored = match todo.status {
            TodoStatus::Active => marker.yellow(),
            TodoStatus::Completed => marker.green(),
        };

        println!(
            "{}{}{}{}{}",
            marker_colored,
            idx_str,
            title_display,
            " ".repeat(padding),
            format_time_ago(todo.created_at).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(created_at: NaiveDateTime) -> String {
    let duration = Local::now().naive_local().signed_duration_since(created_at);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis() {
        let out = truncate_to_width("Schedule Dentist Appointment", 10);
        assert_eq!(out, "Schedule …");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Buy", 10), "Buy");
    }
}
