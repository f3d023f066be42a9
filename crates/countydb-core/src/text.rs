// crates/countydb-core/src/text.rs

//! # Text Normalization
//!
//! Pure string transforms shared by the loader, the writer and every lookup:
//! - [`fold_key`] produces the storage/comparison form of a key.
//! - [`title_case`] produces the display form of county and city names.

/// Characters after which [`title_case`] starts a new capitalized word.
pub const WORD_DELIMITERS: [char; 3] = [' ', '-', '&'];

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// Trims surrounding whitespace and lower-cases ASCII letters. Non-ASCII
/// characters pass through untouched.
///
/// # Examples
///
/// ```rust
/// use countydb_core::text::fold_key;
///
/// assert_eq!(fold_key(" ABC "), "abc");
/// assert_eq!(fold_key("Silver Bow"), "silver bow");
/// ```
pub fn fold_key(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Capitalizes a string into title case.
///
/// The first character and every character that directly follows a space,
/// hyphen or ampersand is upper-cased; all others are lower-cased. The result
/// is trimmed. Empty and whitespace-only input is returned unchanged.
///
/// Only ASCII letters change case, matching [`fold_key`], so
/// `fold_key(&title_case(s)) == fold_key(s)` for any trimmed `s`.
///
/// # Examples
///
/// ```rust
/// use countydb_core::text::title_case;
///
/// assert_eq!(title_case("SILVER-bow"), "Silver-Bow");
/// assert_eq!(title_case("new mexico"), "New Mexico");
/// assert_eq!(title_case("  "), "  ");
/// ```
pub fn title_case(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;

    for ch in s.chars() {
        let starts_word = match prev {
            None => true,
            Some(p) => WORD_DELIMITERS.contains(&p),
        };
        if starts_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        prev = Some(ch);
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_trims_and_lowercases() {
        assert_eq!(fold_key(" ABC "), "abc");
        assert_eq!(fold_key("\tGreat Falls\n"), "great falls");
        assert_eq!(fold_key(""), "");
    }

    #[test]
    fn fold_key_is_idempotent() {
        for s in ["  Lewis and Clark ", "MISSOULA", "silver-bow", "", "  "] {
            let once = fold_key(s);
            assert_eq!(fold_key(&once), once);
        }
    }

    #[test]
    fn equals_folded_ignores_case_and_padding() {
        assert!(equals_folded("Silver Bow", " silver bow"));
        assert!(!equals_folded("Silver Bow", "Silverbow"));
    }

    #[test]
    fn title_case_capitalizes_after_delimiters() {
        assert_eq!(title_case("silver-bow"), "Silver-Bow");
        assert_eq!(title_case("SILVER-bow"), "Silver-Bow");
        assert_eq!(title_case("new mexico"), "New Mexico");
        assert_eq!(title_case("lewis & clark"), "Lewis & Clark");
        assert_eq!(title_case("r&d"), "R&D");
    }

    #[test]
    fn title_case_blank_passthrough() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("  "), "  ");
    }

    #[test]
    fn title_case_trims_result() {
        // A leading space makes the first letter follow a delimiter.
        assert_eq!(title_case(" big timber "), "Big Timber");
    }

    #[test]
    fn title_case_leaves_non_ascii_letters_alone() {
        assert_eq!(title_case("émigrant"), "émigrant");
        assert_eq!(title_case("ÉMIGRANT peak"), "Émigrant Peak");
        assert_eq!(title_case("lake ÅSA"), "Lake Åsa");
    }

    #[test]
    fn title_case_round_trips_through_fold_key() {
        for s in ["émigrant", "Big Sky", "silver-BOW", "Ünter & Élan", "mccone"] {
            assert_eq!(fold_key(&title_case(s)), fold_key(s), "{s}");
        }
    }

    #[test]
    fn title_case_does_not_split_on_apostrophes() {
        assert_eq!(title_case("o'fallon"), "O'fallon");
        assert_eq!(title_case("mccone"), "Mccone");
    }
}
