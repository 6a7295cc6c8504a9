//! Report formatting utilities for terminal output
//!
//! Small helpers shared by the projection and affirmation renderers. Widths
//! are counted in chars, since most of the text shown is Vietnamese.

/// Format a multiplier the way the summary card shows it ("2.59")
pub fn format_multiplier(multiplier: f64) -> String {
    if multiplier.is_finite() && multiplier > 0.0 {
        format!("{:.2}", multiplier)
    } else {
        "0".to_string()
    }
}

/// Format a rate in percent, dropping a redundant ".0"
pub fn format_rate(rate_percent: f64) -> String {
    let rounded = (rate_percent * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line centered in `width`
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of chars with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Greedy word wrap to `width` chars
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
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

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(2.5937424601), "2.59");
        assert_eq!(format_multiplier(1.0), "1.00");
        assert_eq!(format_multiplier(f64::NAN), "0");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(10.0), "10%");
        assert_eq!(format_rate(7.5), "7.5%");
        assert_eq!(format_rate(0.1 + 0.2), "0.3%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Tôi đã sở hữu", 8), "Tôi đ...");
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("Tôi đang sở hữu tự do tài chính", 12),
            vec!["Tôi đang sở", "hữu tự do", "tài chính"]
        );
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn test_header_centered() {
        assert_eq!(format_header("ab", 6), "  ab");
        assert_eq!(separator(3), "───");
    }
}
