//! Text normalization for pattern matching.

/// Normalized CV text. `text` keeps the original casing for snippet
/// extraction; `folded` is the ASCII-lowercased working copy patterns run
/// against. ASCII-only folding means both strings have identical byte
/// length, so a match range in `folded` indexes directly into `text`.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    pub text: String,
    pub folded: String,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Cleans raw extracted text: strips non-printable characters, collapses
/// whitespace runs within lines, trims lines, drops blank lines. Empty or
/// whitespace-only input yields empty output.
pub fn normalize(raw: &str) -> NormalizedText {
    let mut lines: Vec<String> = Vec::new();

    for line in raw.lines() {
        // Tabs are control characters but still word separators, so they
        // must survive until whitespace collapsing.
        let printable: String = line
            .chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect();
        let collapsed = printable.split_whitespace().collect::<Vec<_>>().join(" ");
        if !collapsed.is_empty() {
            lines.push(collapsed);
        }
    }

    let text = lines.join("\n");
    let folded = text.to_ascii_lowercase();

    NormalizedText { text, folded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_within_lines() {
        let normalized = normalize("Senior   Research\tScientist");
        assert_eq!(normalized.text, "Senior Research Scientist");
    }

    #[test]
    fn test_drops_blank_lines_and_trims() {
        let normalized = normalize("  First Prize  \n\n\n  IEEE Member  \n");
        assert_eq!(normalized.text, "First Prize\nIEEE Member");
    }

    #[test]
    fn test_tab_between_words_is_a_separator() {
        let normalized = normalize("Nobel\tPrize winner");
        assert_eq!(normalized.text, "Nobel Prize winner");
        assert_eq!(normalized.folded, "nobel prize winner");
    }

    #[test]
    fn test_strips_non_printable_characters() {
        let normalized = normalize("Award\u{0} Winner\u{7}");
        assert_eq!(normalized.text, "Award Winner");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let normalized = normalize("");
        assert!(normalized.is_empty());
        assert!(normalized.folded.is_empty());
    }

    #[test]
    fn test_whitespace_only_input_yields_empty_output() {
        assert!(normalize("   \n\t \n  ").is_empty());
    }

    #[test]
    fn test_folded_preserves_byte_length() {
        // Multibyte characters are left untouched by ASCII folding, so
        // offsets into `folded` stay valid offsets into `text`.
        let normalized = normalize("Café Müller — Grand Prix WINNER");
        assert_eq!(normalized.text.len(), normalized.folded.len());
        assert_eq!(normalized.folded, "café müller — grand prix winner");
    }

    #[test]
    fn test_original_casing_preserved_in_text() {
        let normalized = normalize("Nobel Prize in Physics");
        assert_eq!(normalized.text, "Nobel Prize in Physics");
        assert_eq!(normalized.folded, "nobel prize in physics");
    }
}
