//! Validation limits shared by forms and the plan editor.
//!
//! Limits are character counts, not byte lengths.

pub const MAX_TITLE_CHARS: usize = 255;
pub const MAX_KEY_IDEAS_CHARS: usize = 2000;
pub const MAX_PLAN_TEXT_CHARS: usize = 5000;
pub const MIN_PEOPLE: i32 = 1;
pub const MAX_PEOPLE: i32 = 50;

/// A plan text of exactly `MAX_PLAN_TEXT_CHARS` characters is still valid.
pub fn plan_text_too_long(text: &str) -> bool {
    text.chars().count() > MAX_PLAN_TEXT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_text_boundary() {
        let at_limit: String = "x".repeat(MAX_PLAN_TEXT_CHARS);
        assert!(!plan_text_too_long(&at_limit));

        let over: String = "x".repeat(MAX_PLAN_TEXT_CHARS + 1);
        assert!(plan_text_too_long(&over));
    }

    #[test]
    fn plan_text_limit_counts_chars_not_bytes() {
        // Multi-byte characters still count as one each.
        let at_limit: String = "é".repeat(MAX_PLAN_TEXT_CHARS);
        assert!(at_limit.len() > MAX_PLAN_TEXT_CHARS);
        assert!(!plan_text_too_long(&at_limit));
    }
}
