//! Slug derivation and validation for bootcamp names.
//!
//! Slugs are trimmed identifiers composed of lowercase ASCII letters, digits,
//! and single hyphens between runs of them. Accented Latin letters are folded
//! to their base letter first, so `Café` becomes `cafe`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const SEPARATOR: char = '-';

/// Letters that do not decompose under NFKD but have a customary ASCII form.
fn fold_letter(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ø' | 'Ø' => "o",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'ł' | 'Ł' => "l",
        'þ' | 'Þ' => "th",
        _ => return None,
    })
}

/// Derive a URL-safe slug from a human-readable name.
///
/// Folds accented letters to ASCII, lowercases, collapses every run of other
/// characters into a single `-`, and trims separators from both ends. The
/// function is total and idempotent; a name with nothing foldable to ASCII
/// letters or digits yields an empty slug, which [`is_valid_slug`] rejects.
///
/// # Examples
/// ```
/// use devcamper::domain::slugify;
///
/// assert_eq!(slugify("Web Wizards Bootcamp"), "web-wizards-bootcamp");
/// assert_eq!(slugify("Café Code"), "cafe-code");
/// assert_eq!(slugify(&slugify("Web Wizards Bootcamp")), "web-wizards-bootcamp");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.nfkd().filter(|ch| !is_combining_mark(*ch)) {
        let mut push = |ascii: char| {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(ascii.to_ascii_lowercase());
        };
        if ch.is_ascii_alphanumeric() {
            push(ch);
        } else if let Some(folded) = fold_letter(ch) {
            folded.chars().for_each(&mut push);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Return `true` when `value` is a valid, non-empty slug.
pub fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value) && !value.contains("--")
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && !value.starts_with(SEPARATOR) && !value.ends_with(SEPARATOR)
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == SEPARATOR)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Web Wizards Bootcamp", "web-wizards-bootcamp")]
    #[case("Devworks Bootcamp", "devworks-bootcamp")]
    #[case("  ModernTech   Bootcamp  ", "moderntech-bootcamp")]
    #[case("UI/UX & Design -- 2024!", "ui-ux-design-2024")]
    #[case("Codemasters", "codemasters")]
    #[case("---", "")]
    #[case("Café Code", "cafe-code")]
    #[case("Ñandú Academy", "nandu-academy")]
    #[case("Straße Øst Bootcamp", "strasse-ost-bootcamp")]
    #[case("東京 !!!", "")]
    fn slugify_produces_expected_slug(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[rstest]
    #[case("Web Wizards Bootcamp")]
    #[case("  __Leading and trailing__  ")]
    #[case("a.b.c")]
    #[case("already-a-slug")]
    #[case("Ünïcödé Nämé")]
    fn slugify_is_idempotent(#[case] name: &str) {
        let once = slugify(name);
        assert_eq!(slugify(&once), once);
    }

    #[rstest]
    #[case("Web Wizards Bootcamp")]
    #[case("Devcentral 2.0")]
    #[case("x")]
    #[case("Ünïcödé Nämé")]
    fn slugify_output_is_a_valid_slug(#[case] name: &str) {
        assert!(is_valid_slug(&slugify(name)));
    }

    #[rstest]
    #[case("", false)]
    #[case("-leading", false)]
    #[case("trailing-", false)]
    #[case("double--dash", false)]
    #[case("Upper", false)]
    #[case("web-wizards-bootcamp", true)]
    fn validates_slug_shape(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(value), expected);
    }
}
