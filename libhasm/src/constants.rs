use once_cell::sync::OnceCell;
use regex::Regex;

pub static LITERAL_REGEX: OnceCell<Regex> = OnceCell::new();
static LITERAL_REGEX_PATTERN: &str =
    r#"^(?:[+-]?(?:0[xX][0-9a-fA-F]+|[0-9]+)|'[^']*'|"[^"]*")$"#;

/// Separators inside one operand word: list commas and displacement signs.
pub const OPERAND_SEPARATORS: [char; 3] = [',', '+', '-'];

pub fn literal_regex() -> &'static Regex {
    LITERAL_REGEX.get_or_init(|| Regex::new(LITERAL_REGEX_PATTERN).expect("Invalid literal regex"))
}

pub fn is_literal(word: &str) -> bool {
    literal_regex().is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        for word in ["0", "42", "-5", "+7", "0x1F", "0XFF", "'A'", "\"hello\""] {
            assert!(is_literal(word), "{} should be a literal", word);
        }
        for word in ["N", "N1", "0xZZ", "'open", "4A", "-"] {
            assert!(!is_literal(word), "{} should not be a literal", word);
        }
    }
}
