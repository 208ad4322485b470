use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use lazy_static::lazy_static;
use regex::Regex;

pub mod categories;
pub mod collections;
pub mod colors;
pub mod content;
pub mod products;
pub mod technologies;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex");
    static ref COLOR_CODE_RE: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex");
}

/// Collapse internal whitespace runs and strip control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize each line and drop leading/trailing/repeated blank lines.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        let is_empty = line.is_empty();
        if is_empty {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}

/// Whether `value` is a well-formed URL slug (`lower-case-and-dashes`).
pub(crate) fn is_valid_slug(value: &str) -> bool {
    SLUG_RE.is_match(value)
}

/// Whether `value` is a six-digit hex color code such as `#a1b2c3`.
pub(crate) fn is_valid_color_code(value: &str) -> bool {
    COLOR_CODE_RE.is_match(value)
}

/// Normalize a language code to two lowercase ASCII letters.
pub(crate) fn sanitize_lang(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Whether `value` is an inline image: a `data:image/...;base64,` URI whose
/// payload actually decodes.
pub(crate) fn is_valid_image_data_uri(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };

    let Some((_subtype, payload)) = rest.split_once(";base64,") else {
        return false;
    };

    !payload.is_empty() && BASE64_STANDARD.decode(payload).is_ok()
}

/// Whether `value` can be stored as an image reference: an absolute URL, a
/// site-relative path, or an inline data URI.
pub(crate) fn is_valid_image_ref(value: &str) -> bool {
    value.starts_with("http://")
        || value.starts_with("https://")
        || value.starts_with('/')
        || is_valid_image_data_uri(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Tere\t zhka  "), "Tere zhka");
        assert_eq!(sanitize_inline_text("\u{7}bell"), "bell");
    }

    #[test]
    fn multiline_text_trims_blank_lines() {
        let input = "\n\nFirst line.\n\n\nSecond  line.\n\n";
        assert_eq!(sanitize_multiline_text(input), "First line.\n\nSecond line.");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("summer-2025"));
        assert!(is_valid_slug("boots"));
        assert!(!is_valid_slug("Boots"));
        assert!(!is_valid_slug("summer_2025"));
        assert!(!is_valid_slug("-boots"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn lang_normalization() {
        assert_eq!(sanitize_lang(" RU ").as_deref(), Some("ru"));
        assert_eq!(sanitize_lang("en").as_deref(), Some("en"));
        assert!(sanitize_lang("rus").is_none());
        assert!(sanitize_lang("r1").is_none());
    }

    #[test]
    fn image_data_uri_validation() {
        // "hi" in base64.
        assert!(is_valid_image_data_uri("data:image/png;base64,aGk="));
        assert!(!is_valid_image_data_uri("data:image/png;base64,"));
        assert!(!is_valid_image_data_uri("data:image/png;base64,???"));
        assert!(!is_valid_image_data_uri("data:text/plain;base64,aGk="));
        assert!(!is_valid_image_data_uri("https://cdn.example.com/a.png"));
    }

    #[test]
    fn image_ref_accepts_urls_and_data_uris() {
        assert!(is_valid_image_ref("https://cdn.example.com/a.png"));
        assert!(is_valid_image_ref("/uploads/a.png"));
        assert!(is_valid_image_ref("data:image/jpeg;base64,aGk="));
        assert!(!is_valid_image_ref("ftp://example.com/a.png"));
    }

    #[test]
    fn color_code_validation() {
        assert!(is_valid_color_code("#a1B2c3"));
        assert!(!is_valid_color_code("a1b2c3"));
        assert!(!is_valid_color_code("#fff"));
    }
}
