// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the budget, skip the O(nm) DP.
//! This catches most non-matches before allocating anything.

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If the minimum row value exceeds `max`, abandon the DP early
///
/// Both exits are sound: neither can reject a pair whose true distance is
/// within `max`.
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if the minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    if dp[b_len] <= max {
        Some(dp[b_len])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_zero() {
        assert_eq!(bounded_levenshtein("hello", "hello", 0), Some(0));
    }

    #[test]
    fn one_edit() {
        assert_eq!(bounded_levenshtein("hello", "hallo", 1), Some(1));
        assert_eq!(bounded_levenshtein("hello", "hell", 1), Some(1));
        assert_eq!(bounded_levenshtein("hello", "helloo", 1), Some(1));
    }

    #[test]
    fn length_early_exit() {
        // Length difference is 5, so distance must be >= 5
        assert_eq!(bounded_levenshtein("a", "abcdef", 1), None);
    }

    #[test]
    fn over_budget_rejected() {
        assert_eq!(bounded_levenshtein("hello", "hxllo", 0), None);
        assert_eq!(bounded_levenshtein("photography", "phptpgraphy", 1), None);
        assert_eq!(bounded_levenshtein("photography", "phptpgraphy", 2), Some(2));
    }

    #[test]
    fn unicode_diacritics() {
        assert_eq!(bounded_levenshtein("cafe", "café", 1), Some(1)); // e vs é
    }

    #[test]
    fn empty_strings() {
        assert_eq!(bounded_levenshtein("", "", 0), Some(0));
        assert_eq!(bounded_levenshtein("", "ab", 2), Some(2));
        assert_eq!(bounded_levenshtein("", "ab", 1), None);
    }
}
