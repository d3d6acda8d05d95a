//! Classifying the three final reel values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the three reels lined up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MatchResult {
    /// All three reels show the same value.
    Jackpot(String),
    /// Exactly two reels share a value.
    Pair(String),
    NoMatch,
}

impl MatchResult {
    /// Classifies three results. With three values at most one can occur
    /// twice, so `Pair` is never ambiguous.
    pub fn evaluate(results: &[String; 3]) -> Self {
        let [a, b, c] = results;
        if a == b && b == c {
            MatchResult::Jackpot(a.clone())
        } else if a == b || a == c {
            MatchResult::Pair(a.clone())
        } else if b == c {
            MatchResult::Pair(b.clone())
        } else {
            MatchResult::NoMatch
        }
    }

    /// The matched value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            MatchResult::Jackpot(v) | MatchResult::Pair(v) => Some(v),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_jackpot(&self) -> bool {
        matches!(self, MatchResult::Jackpot(_))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Jackpot(v) => write!(f, "JACKPOT: {}", v),
            MatchResult::Pair(v) => write!(f, "pair of {}", v),
            MatchResult::NoMatch => write!(f, "no match"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(a: &str, b: &str, c: &str) -> [String; 3] {
        [a.to_string(), b.to_string(), c.to_string()]
    }

    #[test]
    fn test_jackpot() {
        assert_eq!(
            MatchResult::evaluate(&r("A", "A", "A")),
            MatchResult::Jackpot("A".into())
        );
    }

    #[test]
    fn test_pairs_in_every_position() {
        assert_eq!(
            MatchResult::evaluate(&r("A", "B", "A")),
            MatchResult::Pair("A".into())
        );
        assert_eq!(
            MatchResult::evaluate(&r("A", "A", "B")),
            MatchResult::Pair("A".into())
        );
        assert_eq!(
            MatchResult::evaluate(&r("B", "A", "A")),
            MatchResult::Pair("A".into())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(MatchResult::evaluate(&r("A", "B", "C")), MatchResult::NoMatch);
        assert_eq!(MatchResult::NoMatch.value(), None);
    }

    #[test]
    fn test_exactly_one_class_over_small_alphabet() {
        let alphabet = ["x", "y", "z"];
        for a in alphabet {
            for b in alphabet {
                for c in alphabet {
                    let result = MatchResult::evaluate(&r(a, b, c));
                    let distinct = {
                        let mut v = vec![a, b, c];
                        v.sort();
                        v.dedup();
                        v.len()
                    };
                    match distinct {
                        1 => assert!(result.is_jackpot()),
                        2 => assert!(matches!(result, MatchResult::Pair(_))),
                        _ => assert_eq!(result, MatchResult::NoMatch),
                    }
                    if let MatchResult::Pair(v) = &result {
                        let hits = [a, b, c].iter().filter(|s| **s == v.as_str()).count();
                        assert_eq!(hits, 2);
                    }
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MatchResult::Jackpot("amp".into()).to_string(), "JACKPOT: amp");
        assert_eq!(MatchResult::Pair("kimi".into()).to_string(), "pair of kimi");
    }
}
