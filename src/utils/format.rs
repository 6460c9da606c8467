/// Truncate to at most `max_chars` characters, appending "..." when cut
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", head)
}

/// Render an optional order the way sorting sees it
pub fn format_order(order: Option<f64>) -> String {
    let value = order.unwrap_or(0.0);
    // integral values print without a trailing ".0" while they fit exactly
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_published(published: Option<bool>) -> &'static str {
    match published {
        Some(false) => "hidden",
        _ => "published",
    }
}

pub fn format_technologies(technologies: &[&str]) -> String {
    technologies.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("Elixir • Phoenix", 9), "Elixir...");
        assert_eq!(truncate_string("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_order() {
        assert_eq!(format_order(None), "0");
        assert_eq!(format_order(Some(3.0)), "3");
        assert_eq!(format_order(Some(-1.5)), "-1.5");
        assert_eq!(format_order(Some(1e20)), "100000000000000000000");
        assert_eq!(format_order(Some(-1e16)), "-10000000000000000");
    }
}
