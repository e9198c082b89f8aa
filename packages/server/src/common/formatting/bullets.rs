use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

lazy_static! {
    // "Sentence. • next" -> "Sentence.\n\n• next"
    static ref SENTENCE_BULLET: Regex = Regex::new(r"([.!?])\s+(?:•\s*)*•\s+").unwrap();

    // "Options: • next" -> "Options:\n\n• next"
    static ref COLON_BULLET: Regex = Regex::new(r":\s+(?:•\s*)*•\s+").unwrap();

    // Any other bullet gets its own line. Horizontal whitespace before the
    // glyph is dropped so it cannot turn into a Markdown hard break, and an
    // existing newline is reused instead of stacking another one.
    static ref INLINE_BULLET: Regex = Regex::new(r"\n?[^\S\n]*(?:•\s*)*•\s+").unwrap();

    // Bullets that start a line get exactly one blank line before them.
    static ref LINE_BULLET: Regex = Regex::new(r"\n+•\s+").unwrap();
}

/// Put every inline `•` bullet on its own blank-line-separated line so a
/// Markdown renderer shows one entry per bullet.
///
/// The four passes run in a fixed order, each on the previous output:
///
/// 1. `.`/`!`/`?`, whitespace, `•` -> punctuation, blank line, `• `
/// 2. `:`, whitespace, `•` -> `:`, blank line, `• `
/// 3. remaining `•` + whitespace -> newline, `• `
/// 4. newline(s) + `•` + whitespace -> blank line, `• `
///
/// In passes 1 to 3 a run of glyphs ending in whitespace (`•• `, `• • `)
/// counts as one bullet, so empty entries collapse into the next one.
/// Text without bullets comes back unchanged, and formatting already
/// formatted text is a no-op.
pub fn format_bullets_for_markdown(text: &str) -> String {
    let text = SENTENCE_BULLET.replace_all(text, "$1\n\n• ");
    let text = COLON_BULLET.replace_all(&text, NoExpand(":\n\n• "));
    let text = INLINE_BULLET.replace_all(&text, NoExpand("\n• "));
    let text = LINE_BULLET.replace_all(&text, NoExpand("\n\n• "));
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_list() {
        assert_eq!(
            format_bullets_for_markdown("Options: • Jobs • Mentorship"),
            "Options:\n\n• Jobs\n\n• Mentorship"
        );
    }

    #[test]
    fn test_sentence_list() {
        assert_eq!(
            format_bullets_for_markdown("Here is what I found. • Resume review! • Mock interviews"),
            "Here is what I found.\n\n• Resume review!\n\n• Mock interviews"
        );
    }

    #[test]
    fn test_question_mark_list() {
        assert_eq!(
            format_bullets_for_markdown("Interested? • Yes • No"),
            "Interested?\n\n• Yes\n\n• No"
        );
    }

    #[test]
    fn test_existing_single_newline_bullets_get_blank_lines() {
        assert_eq!(
            format_bullets_for_markdown("Steps\n• one\n• two"),
            "Steps\n\n• one\n\n• two"
        );
    }

    #[test]
    fn test_already_separated_bullets_are_kept() {
        let text = "Pick one:\n\n• Jobs\n\n• Mentorship\n\n• Community";
        assert_eq!(format_bullets_for_markdown(text), text);
    }

    #[test]
    fn test_no_bullets_unchanged() {
        assert_eq!(format_bullets_for_markdown("No bullets here."), "No bullets here.");
        assert_eq!(format_bullets_for_markdown(""), "");
    }

    #[test]
    fn test_glyph_without_whitespace_is_left_alone() {
        assert_eq!(format_bullets_for_markdown("a •b"), "a •b");
    }

    #[test]
    fn test_each_bullet_is_its_own_entry() {
        let formatted = format_bullets_for_markdown("Options: • Jobs • Mentorship");
        let entries: Vec<&str> = formatted
            .split("\n\n")
            .filter(|chunk| chunk.starts_with("• "))
            .collect();

        assert_eq!(entries, vec!["• Jobs", "• Mentorship"]);
    }

    #[test]
    fn test_adjacent_glyphs_form_one_bullet() {
        assert_eq!(format_bullets_for_markdown("••\n"), "\n\n• ");
        assert_eq!(format_bullets_for_markdown("\t..a•• a"), "\t..a\n\n• a");
        assert_eq!(
            format_bullets_for_markdown("Pick: • • Jobs"),
            "Pick:\n\n• Jobs"
        );
    }

    #[test]
    fn test_idempotent_on_documented_samples() {
        let samples = [
            "Options: • Jobs • Mentorship",
            "Done. • a • b! • c",
            "• leading bullet • second",
            "Steps\n• one\n\n\n• two",
            "mixed:   •   spaced \t• tabs\n • indented",
            "Trailing bullet •",
            "No bullets here.",
            "Welcome!\n\n• Ask me questions\n\n• Create an account",
        ];

        for sample in samples {
            let once = format_bullets_for_markdown(sample);
            assert_eq!(format_bullets_for_markdown(&once), once, "input {:?}", sample);
        }
    }

    #[test]
    fn test_idempotent_for_every_short_string() {
        const ALPHABET: [char; 8] = ['a', ' ', '\n', '\t', '•', '.', ':', '!'];
        const MAX_LEN: u32 = 5;

        for len in 0..=MAX_LEN {
            for index in 0..ALPHABET.len().pow(len) {
                let mut rest = index;
                let input: String = (0..len)
                    .map(|_| {
                        let c = ALPHABET[rest % ALPHABET.len()];
                        rest /= ALPHABET.len();
                        c
                    })
                    .collect();

                let once = format_bullets_for_markdown(&input);
                assert_eq!(format_bullets_for_markdown(&once), once, "input {:?}", input);
            }
        }
    }
}
