//! Lossy whitespace collapse for the abridged representation.

/// Trim the document and replace every maximal run of whitespace
/// (newlines included) with a single space.
///
/// This deliberately destroys paragraph, heading, and list structure in
/// exchange for token compactness; it only runs on the abridged output
/// and only when the policy asks for it.
pub fn collapse_whitespace(markdown: &str) -> String {
    let mut output = String::with_capacity(markdown.len());
    for word in markdown.split_whitespace() {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(word);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_collapse_to_single_spaces() {
        assert_eq!(collapse_whitespace("a  b\n\nc\td"), "a b c d");
    }

    #[test]
    fn output_is_trimmed() {
        assert_eq!(collapse_whitespace("  \n x \n  "), "x");
    }

    #[test]
    fn no_two_consecutive_whitespace_characters_remain() {
        let collapsed = collapse_whitespace("# Title\n\nBody   text\n- item\n");
        assert!(!collapsed
            .as_bytes()
            .windows(2)
            .any(|pair| pair[0].is_ascii_whitespace() && pair[1].is_ascii_whitespace()));
        assert!(!collapsed.starts_with(char::is_whitespace));
        assert!(!collapsed.ends_with(char::is_whitespace));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   \n\t "), "");
    }
}
