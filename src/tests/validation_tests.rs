#[cfg(test)]
mod tests {
    use crate::validation::{check_games_invariant, is_non_negative_integer, is_valid_name};

    #[test]
    fn valid_names_are_accepted() {
        assert!(is_valid_name("Tigers"));
        assert!(is_valid_name("New York"));
        assert!(is_valid_name("Saint-Denis"));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(!is_valid_name(""));
    }

    #[test]
    fn names_without_letters_are_rejected() {
        assert!(!is_valid_name("---"));
        assert!(!is_valid_name("  "));
        assert!(!is_valid_name("- -"));
    }

    #[test]
    fn names_with_digits_or_punctuation_are_rejected() {
        assert!(!is_valid_name("Tigers1"));
        assert!(!is_valid_name("St. Denis"));
        assert!(!is_valid_name("Tigers,London"));
        assert!(!is_valid_name("Tigers_FC"));
    }

    #[test]
    fn non_negative_integer_check() {
        assert!(is_non_negative_integer("0"));
        assert!(is_non_negative_integer("12"));
        assert!(!is_non_negative_integer("-1"));
        assert!(!is_non_negative_integer("1.5"));
        assert!(!is_non_negative_integer("twelve"));
        assert!(!is_non_negative_integer(""));
    }

    #[test]
    fn games_invariant_holds_when_results_sum_up() {
        assert!(check_games_invariant(10, 6, 3, 1));
        assert!(check_games_invariant(0, 0, 0, 0));
        assert!(!check_games_invariant(10, 6, 3, 2));
        assert!(!check_games_invariant(9, 6, 3, 1));
    }

    #[test]
    fn games_invariant_does_not_overflow() {
        assert!(!check_games_invariant(0, u32::MAX, u32::MAX, 2));
    }
}
