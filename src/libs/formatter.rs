//! Text normalization utilities for stored task fields.
//!
//! Free-text task fields (name, status, tags, priority, information) are
//! normalized to title case before storage so that filtering and search
//! compare against a predictable casing.
//!
//! ## Format
//!
//! Each whitespace-separated word gets its first letter uppercased and the
//! remainder lowercased. Words without a leading letter pass through
//! unchanged:
//!
//! ```rust
//! use tudu::libs::formatter::title_case;
//!
//! assert_eq!(title_case("buy milk"), "Buy Milk");
//! assert_eq!(title_case("in progress"), "In Progress");
//! assert_eq!(title_case("2%"), "2%");
//! ```

/// Normalizes `text` to title case, word by word.
///
/// Runs of whitespace collapse to a single space; leading and trailing
/// whitespace is dropped.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("buy milk"), "Buy Milk");
        assert_eq!(title_case("pending"), "Pending");
    }

    #[test]
    fn lowercases_the_rest() {
        assert_eq!(title_case("pEnDiNg"), "Pending");
        assert_eq!(title_case("IN PROGRESS"), "In Progress");
    }

    #[test]
    fn leaves_non_alphabetic_tokens_alone() {
        assert_eq!(title_case("2%"), "2%");
        assert_eq!(title_case("task #42"), "Task #42");
    }

    #[test]
    fn handles_empty_input() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }
}
