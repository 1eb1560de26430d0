//! Word counting for chapter content.
//!
//! Counts are stored denormalized on chapters and summed onto the parent
//! novel, so every caller must use the same definition: the number of
//! non-whitespace characters. For CJK prose this matches the reader-facing
//! "字数" far better than whitespace-separated token counting would.

/// Count the content units of a chapter body.
///
/// Strips all Unicode whitespace and counts the remaining characters.
pub fn word_count(content: &str) -> i32 {
    content.chars().filter(|c| !c.is_whitespace()).count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cjk_characters() {
        assert_eq!(word_count("春眠不觉晓"), 5);
    }

    #[test]
    fn ignores_whitespace_and_newlines() {
        assert_eq!(word_count("  他走了。\n\n她没有回头。\t"), 11);
    }

    #[test]
    fn empty_and_blank_are_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n\t "), 0);
    }

    #[test]
    fn mixed_ascii_and_cjk() {
        // "Chapter 1 开始" -> Chapter(7) + 1(1) + 开始(2)
        assert_eq!(word_count("Chapter 1 开始"), 10);
    }
}
