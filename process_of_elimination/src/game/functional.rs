//! Pure functions for deriving a round's display.
//!
//! Everything here depends only on the problem text and the set of guessed
//! characters, so it can be tested without replaying a sequence of guesses.

use std::collections::BTreeSet;

use super::constants::MASK_CHAR;

/// Fold a character for case-insensitive comparison.
///
/// Characters whose lowercase form spans more than one `char` are kept as-is,
/// so they only ever match themselves.
#[must_use]
pub fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Whether a problem character has to be guessed before it's shown.
///
/// Spaces, digits and punctuation are revealed from the start.
#[must_use]
pub fn is_hidden(c: char) -> bool {
    c.is_alphabetic()
}

/// Whether `guess` matches `c`, ignoring case.
#[must_use]
pub fn matches(guess: char, c: char) -> bool {
    fold(guess) == fold(c)
}

/// Whether `guess` appears anywhere in `problem`.
#[must_use]
pub fn occurs_in(problem: &str, guess: char) -> bool {
    problem.chars().any(|c| matches(guess, c))
}

/// Render `problem` with every hidden, unguessed character replaced by
/// [`MASK_CHAR`]. `guessed` holds folded characters (see [`fold`]).
///
/// The result always has exactly as many characters as `problem`.
#[must_use]
pub fn mask(problem: &str, guessed: &BTreeSet<char>) -> String {
    problem
        .chars()
        .map(|c| {
            if is_hidden(c) && !guessed.contains(&fold(c)) {
                MASK_CHAR
            } else {
                c
            }
        })
        .collect()
}

/// Whether every hidden character of `problem` has been guessed.
#[must_use]
pub fn is_solved(problem: &str, guessed: &BTreeSet<char>) -> bool {
    problem
        .chars()
        .filter(|c| is_hidden(*c))
        .all(|c| guessed.contains(&fold(c)))
}

/// Fraction of hidden positions that have been revealed, in `0.0..=1.0`.
///
/// A problem with no hidden characters counts as fully revealed.
#[must_use]
pub fn progress(problem: &str, guessed: &BTreeSet<char>) -> f64 {
    let (total, revealed) = problem
        .chars()
        .filter(|c| is_hidden(*c))
        .fold((0usize, 0usize), |(total, revealed), c| {
            let hit = usize::from(guessed.contains(&fold(c)));
            (total + 1, revealed + hit)
        });

    if total == 0 {
        1.0
    } else {
        revealed as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(chars: &str) -> BTreeSet<char> {
        chars.chars().map(fold).collect()
    }

    #[test]
    fn test_fold_ascii() {
        assert_eq!(fold('A'), 'a');
        assert_eq!(fold('a'), 'a');
        assert_eq!(fold('-'), '-');
    }

    #[test]
    fn test_fold_multi_char_lowercase_is_identity() {
        // 'İ' lowercases to "i\u{307}"
        assert_eq!(fold('İ'), 'İ');
    }

    #[test]
    fn test_matches_ignores_case() {
        assert!(matches('g', 'G'));
        assert!(matches('G', 'g'));
        assert!(!matches('g', 'o'));
    }

    #[test]
    fn test_occurs_in() {
        assert!(occurs_in("Go", 'o'));
        assert!(occurs_in("Go", 'G'));
        assert!(!occurs_in("Go", 'z'));
        assert!(occurs_in("A-B", '-'));
    }

    #[test]
    fn test_mask_nothing_guessed() {
        assert_eq!(mask("CAT", &BTreeSet::new()), "___");
    }

    #[test]
    fn test_mask_reveals_all_positions() {
        assert_eq!(mask("BANANA", &guessed("a")), "_A_A_A");
    }

    #[test]
    fn test_mask_preserves_problem_casing() {
        assert_eq!(mask("Go", &guessed("g")), "G_");
    }

    #[test]
    fn test_mask_pre_reveals_non_letters() {
        assert_eq!(mask("ice-cream 2", &BTreeSet::new()), "___-_____ 2");
    }

    #[test]
    fn test_mask_length_matches_problem() {
        let problem = "Ünïcödé wörd";
        assert_eq!(
            mask(problem, &guessed("ö")).chars().count(),
            problem.chars().count()
        );
    }

    #[test]
    fn test_is_solved() {
        assert!(!is_solved("CAT", &guessed("ca")));
        assert!(is_solved("CAT", &guessed("cat")));
        assert!(is_solved("Hi there!", &guessed("hiter")));
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress("CAT", &BTreeSet::new()), 0.0);
        assert_eq!(progress("BANANA", &guessed("a")), 0.5);
        assert_eq!(progress("CAT", &guessed("cat")), 1.0);
        assert_eq!(progress("--", &BTreeSet::new()), 1.0);
    }
}
