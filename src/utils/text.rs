//! Text folding helpers for name matching

const FOLD_TABLE: &[(&str, char)] = &[
    ("àáảãạăằắẳẵặâầấẩẫậäå", 'a'),
    ("èéẻẽẹêềếểễệë", 'e'),
    ("ìíỉĩịîï", 'i'),
    ("òóỏõọôồốổỗộơờớởỡợöø", 'o'),
    ("ùúủũụưừứửữựûü", 'u'),
    ("ỳýỷỹỵÿ", 'y'),
    ("đ", 'd'),
    ("ç", 'c'),
    ("ñ", 'n'),
    ("ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬÄÅ", 'A'),
    ("ÈÉẺẼẸÊỀẾỂỄỆË", 'E'),
    ("ÌÍỈĨỊÎÏ", 'I'),
    ("ÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÖØ", 'O'),
    ("ÙÚỦŨỤƯỪỨỬỮỰÛÜ", 'U'),
    ("ỲÝỶỸỴ", 'Y'),
    ("Đ", 'D'),
    ("Ç", 'C'),
    ("Ñ", 'N'),
];

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn fold_char(c: char) -> Option<char> {
    if c.is_ascii() {
        return Some(c);
    }
    if is_combining_mark(c) {
        return None;
    }
    let folded = FOLD_TABLE
        .iter()
        .find(|(set, _)| set.contains(c))
        .map_or(c, |&(_, base)| base);
    Some(folded)
}

/// Replace accented Latin letters with their ASCII base letter.
///
/// Decomposed input (base letter followed by combining marks) is handled by
/// dropping the marks.
pub(crate) fn fold_diacritics(s: &str) -> String {
    s.chars().filter_map(fold_char).collect()
}

/// Trim and collapse every whitespace run into a single space
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_vietnamese_letters() {
        assert_eq!(fold_diacritics("Nguyễn Văn Đức"), "Nguyen Van Duc");
        assert_eq!(fold_diacritics("thực hành"), "thuc hanh");
        assert_eq!(fold_diacritics("lý thuyết"), "ly thuyet");
    }

    #[test]
    fn drops_combining_marks() {
        // "e" + combining acute
        assert_eq!(fold_diacritics("Le\u{0301}"), "Le");
    }

    #[test]
    fn ascii_is_unchanged() {
        assert_eq!(fold_diacritics("Tran Thi B."), "Tran Thi B.");
    }

    #[test]
    fn collapse_whitespace_runs() {
        assert_eq!(collapse_whitespace("  a \t b\n c "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
