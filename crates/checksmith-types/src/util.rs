/// Normalize an identifier for use in a check file name: lowercase,
/// non-alphanumeric runs collapsed to a single hyphen, no leading or
/// trailing hyphen.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for ch in value.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Join identifier parts into a human-readable title, capitalizing each
/// hyphen- or whitespace-separated segment.
pub fn title_case(parts: &[&str]) -> String {
    let mut words = Vec::new();
    for part in parts {
        for word in part.split(|c: char| c == '-' || c.is_whitespace()) {
            if word.is_empty() {
                continue;
            }
            let mut chars = word.chars();
            let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
            words.push(format!("{}{}", first, chars.as_str()));
        }
    }
    words.join(" ")
}

/// Truncate a string to a maximum number of characters for diagnostics.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect::<String>() + "...(truncated)"
    }
}
