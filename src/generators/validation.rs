// src/generators/validation.rs
use super::charset::CharacterClass;
use crate::models::Criteria;

/// Check that a candidate holds at least one character of every selected class.
///
/// A missing candidate is never valid. Classes outside `criteria` are ignored.
pub fn is_valid(candidate: Option<&str>, criteria: &Criteria) -> bool {
    match candidate {
        Some(password) => criteria
            .iter()
            .all(|class| password.chars().any(|c| class.contains(c))),
        None => false,
    }
}

/// Selected classes that do not appear in `candidate`, in class order.
pub fn missing_classes(candidate: &str, criteria: &Criteria) -> Vec<CharacterClass> {
    criteria
        .iter()
        .filter(|class| !candidate.chars().any(|c| class.contains(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::CharacterClass::*;

    #[test]
    fn test_none_is_never_valid() {
        assert!(!is_valid(None, &Criteria::all()));
        assert!(!is_valid(None, &Criteria::from_iter([Lower])));
    }

    #[test]
    fn test_all_classes_present() {
        assert!(is_valid(Some("aB3!"), &Criteria::all()));
    }

    #[test]
    fn test_missing_classes_fail() {
        assert!(!is_valid(Some("abcd"), &Criteria::all()));
        assert_eq!(missing_classes("abcd", &Criteria::all()), vec![Upper, Numeric, Special]);
    }

    #[test]
    fn test_unselected_classes_are_ignored() {
        let criteria = Criteria::from_iter([Lower, Numeric]);
        assert!(is_valid(Some("a1"), &criteria));
        assert!(is_valid(Some("a1B$"), &criteria));
        assert!(!is_valid(Some("AB$$"), &criteria));
        assert_eq!(missing_classes("AB$$", &criteria), vec![Lower, Numeric]);
    }

    #[test]
    fn test_every_special_character_counts() {
        let criteria = Criteria::from_iter([Special]);
        for c in Special.alphabet().chars() {
            assert!(is_valid(Some(&c.to_string()), &criteria), "{:?} not recognised", c);
        }
    }

    #[test]
    fn test_empty_candidate() {
        assert!(!is_valid(Some(""), &Criteria::from_iter([Upper])));
        assert_eq!(missing_classes("", &Criteria::from_iter([Upper])), vec![Upper]);
    }
}
