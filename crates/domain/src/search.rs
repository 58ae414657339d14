// Copyright (C) 2026 The landreg Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diacritic-insensitive text matching for Vietnamese record fields.
//!
//! Search across record code, customer name, and ward must treat
//! "Chơn Thành" and "chon thanh" as the same text. Folding maps every
//! Vietnamese tone/vowel mark to its base ASCII letter and lowercases
//! the rest; matching is plain substring over the folded forms.

/// Folds a single lowercase character to its base ASCII letter.
///
/// Characters outside the Vietnamese diacritic set pass through unchanged.
const fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

/// Lowercases and strips Vietnamese diacritics from `text`.
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

/// Case- and diacritic-insensitive substring test.
///
/// An empty `needle` matches everything, mirroring "no search entered".
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_diacritics(haystack).contains(&fold_diacritics(needle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_tone_marks() {
        assert_eq!(fold_diacritics("Chơn Thành"), "chon thanh");
        assert_eq!(fold_diacritics("phường Tiến Hưng"), "phuong tien hung");
        assert_eq!(fold_diacritics("Nguyễn Văn Độ"), "nguyen van do");
    }

    #[test]
    fn test_fold_handles_uppercase_diacritics() {
        assert_eq!(fold_diacritics("ĐỒNG XOÀI"), "dong xoai");
    }

    #[test]
    fn test_fold_leaves_ascii_untouched() {
        assert_eq!(fold_diacritics("HS-2024/0133"), "hs-2024/0133");
    }

    #[test]
    fn test_contains_folded_cross_form() {
        assert!(contains_folded("phường Chơn Thành", "chon thanh"));
        assert!(contains_folded("phuong chon thanh", "Chơn Thành"));
        assert!(!contains_folded("phường Chơn Thành", "tien hung"));
    }

    #[test]
    fn test_empty_needle_matches() {
        assert!(contains_folded("anything", ""));
        assert!(contains_folded("", ""));
    }
}
