/// one separator-delimited piece of a word, already normalized, plus its
/// character offset into the flattened whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub text: String,
    pub offset: usize,
}

/// uppercase form with whitespace, hyphens, and apostrophes stripped. this is
/// the exact-match target for spelling input, so it has to be idempotent
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_separator(*c))
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// splits the raw word on its separators. "Rai-kutun" becomes ["RAI", "KUTUN"]
/// with offsets 0 and 3, so the slots render in two groups while the match
/// still runs against the single concatenated string
pub fn word_groups(raw: &str) -> Vec<WordGroup> {
    let mut groups = Vec::new();
    let mut offset = 0;
    for part in raw.split(is_separator) {
        let text = normalize_word(part);
        let len = text.chars().count();
        if len == 0 {
            continue;
        }
        groups.push(WordGroup { text, offset });
        offset += len;
    }
    groups
}

fn is_separator(c: char) -> bool {
    // typed apostrophes come in straight and typographic flavors
    c.is_whitespace() || matches!(c, '-' | '–' | '—' | '\'' | '’' | 'ʼ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_strips_separators() {
        assert_eq!(normalize_word("Rai-kutun"), "RAIKUTUN");
        assert_eq!(normalize_word("Na'an"), "NAAN");
        assert_eq!(normalize_word("ahi"), "AHI");
        assert_eq!(normalize_word("tasi mane"), "TASIMANE");
    }

    #[test]
    fn normalize_keeps_marked_letters() {
        assert_eq!(normalize_word("señora"), "SEÑORA");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Rai-kutun", "Na'an", "Señora", "bibi", "UMA"] {
            let once = normalize_word(raw);
            assert_eq!(normalize_word(&once), once);
        }
    }

    #[test]
    fn groups_split_on_separators_with_offsets() {
        let groups = word_groups("Rai-kutun");
        assert_eq!(
            groups,
            vec![
                WordGroup { text: "RAI".to_string(), offset: 0 },
                WordGroup { text: "KUTUN".to_string(), offset: 3 },
            ]
        );
    }

    #[test]
    fn groups_of_plain_word_is_single_group() {
        let groups = word_groups("Bibi");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].text, "BIBI");
        assert_eq!(groups[0].offset, 0);
    }

    #[test]
    fn consecutive_separators_yield_no_empty_groups() {
        let groups = word_groups("rai--henek ");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].offset, 3);
    }
}
