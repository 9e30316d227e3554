//! Human-oriented string ordering.
//!
//! Names are compared with the Unicode Collation Algorithm using the CLDR
//! root locale: accents and case only break ties between otherwise equal
//! names (lowercase first), and whitespace < punctuation < digits < letters.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compares two strings the way a person scanning a sorted list expects.
///
/// Strings the collator considers equal fall back to code point order, so
/// the result is a total order.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => simple_compare(a, b),
        })
        .then_with(|| a.cmp(b))
}

// Used only if the root collation data cannot be loaded.
fn simple_compare(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| (char_class(c), c))
            .collect::<Vec<_>>()
    };
    let case = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();
    primary(a)
        .cmp(&primary(b))
        .then_with(|| case(a).cmp(&case(b)))
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn test_root_collator_is_available() {
        assert!(ROOT_COLLATOR.with(Option::is_some));
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(
            sorted(vec!["summary", "Assignee", "description", "Priority"]),
            vec!["Assignee", "description", "Priority", "summary"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Story", "story"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("Story", "Story Points"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(
            sorted(vec!["alpha", "1st", "_hidden", " padded"]),
            vec![" padded", "_hidden", "1st", "alpha"]
        );
        assert_eq!(
            locale_compare("Story point estimate", "Story Points"),
            Ordering::Less
        );
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(
            sorted(vec!["Zeta", "Élan", "Apple"]),
            vec!["Apple", "Élan", "Zeta"]
        );
        assert_eq!(
            sorted(vec!["Öffentlich", "Ordnung", "Ozean", "Nummer"]),
            vec!["Nummer", "Öffentlich", "Ordnung", "Ozean"]
        );
    }

    #[test]
    fn test_accent_breaks_ties_after_letters() {
        assert_eq!(locale_compare("elan", "élan"), Ordering::Less);
        assert_eq!(locale_compare("Elan", "élan"), Ordering::Less);
        assert_eq!(locale_compare("Résumé", "Resume Link"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_compare("Summary", "Summary"), Ordering::Equal);
        assert_eq!(simple_compare("Summary", "Summary"), Ordering::Equal);
    }

    #[test]
    fn test_simple_compare_orders_classes_and_case() {
        assert_eq!(simple_compare(" a", "_a"), Ordering::Less);
        assert_eq!(simple_compare("1", "a"), Ordering::Less);
        assert_eq!(simple_compare("a", "A"), Ordering::Less);
    }
}
