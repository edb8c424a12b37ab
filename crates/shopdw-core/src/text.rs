//! Text normalization helpers for dimension attributes.

/// Returns the trimmed value when it is non-blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        }
        None => None,
    }
}

/// Title-case a value the way the operational store's reports do: the first
/// letter after any non-alphabetic character is uppercased, every other
/// letter is lowercased. `"ahmed ben-ali"` becomes `"Ahmed Ben-Ali"`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Normalize an email address: trim and lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Truncate to at most `max_chars` characters, never splitting a char.
pub fn truncate_chars(raw: &str, max_chars: usize) -> String {
    raw.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  x ")), Some("x"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn title_case_handles_word_boundaries() {
        assert_eq!(title_case("ahmed ben ali"), "Ahmed Ben Ali");
        assert_eq!(title_case("FATMA TRABELSI"), "Fatma Trabelsi");
        assert_eq!(title_case("o'brien ben-ali"), "O'Brien Ben-Ali");
    }

    #[test]
    fn email_is_lowercased_and_trimmed() {
        assert_eq!(normalize_email(" Ahmed.BenAli@Gmail.COM "), "ahmed.benali@gmail.com");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 500), "short");
    }
}
