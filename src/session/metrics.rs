use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Correct,
    Incorrect,
    Current,
    Pending,
}

/// Live statistics derived from target text, typed input and the session clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub correct_count: usize,
    pub total_typed: usize,
    pub accuracy: u32,
    pub current_index: usize,
    pub wpm: u32,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            correct_count: 0,
            total_typed: 0,
            accuracy: 100,
            current_index: 0,
            wpm: 0,
        }
    }
}

impl MetricsSnapshot {
    pub fn compute(target: &[char], typed: &[char], elapsed: Duration) -> Self {
        Self {
            correct_count: correct_count(typed, target),
            total_typed: typed.len(),
            accuracy: accuracy(typed, target),
            current_index: typed.len(),
            wpm: wpm(typed, elapsed),
        }
    }
}

pub fn classify_char(target: &[char], typed: &[char], index: usize) -> CharClass {
    if index < typed.len() {
        // Positions past the end of the target never match.
        if target.get(index) == Some(&typed[index]) {
            CharClass::Correct
        } else {
            CharClass::Incorrect
        }
    } else if index == typed.len() {
        CharClass::Current
    } else {
        CharClass::Pending
    }
}

pub fn correct_count(typed: &[char], target: &[char]) -> usize {
    typed
        .iter()
        .zip(target.iter())
        .filter(|(a, b)| a == b)
        .count()
}

/// Percentage of typed characters that match the target at the same position.
///
/// The denominator is the typed length, so trailing characters beyond the
/// target count as misses. Empty input reports 100.
pub fn accuracy(typed: &[char], target: &[char]) -> u32 {
    if typed.is_empty() {
        return 100;
    }
    let correct = correct_count(typed, target) as f64;
    (correct / typed.len() as f64 * 100.0).round() as u32
}

/// Number of tokens left after trimming and splitting on a literal space.
///
/// Whitespace-only input still counts as one token, and runs of spaces
/// produce empty tokens that are counted too.
pub fn word_count(typed: &[char]) -> usize {
    let Some(start) = typed.iter().position(|c| !c.is_whitespace()) else {
        return 1;
    };
    let end = typed
        .iter()
        .rposition(|c| !c.is_whitespace())
        .unwrap_or(start);
    typed[start..=end].iter().filter(|&&c| c == ' ').count() + 1
}

pub fn wpm(typed: &[char], elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if typed.is_empty() || minutes <= 0.0 {
        return 0;
    }
    (word_count(typed) as f64 / minutes).round() as u32
}

pub fn is_complete(typed: &[char], target: &[char]) -> bool {
    typed == target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_accuracy_empty_input_is_neutral() {
        assert_eq!(accuracy(&[], &chars("asdf")), 100);
        assert_eq!(accuracy(&[], &[]), 100);
    }

    #[test]
    fn test_accuracy_one_wrong_of_four() {
        assert_eq!(accuracy(&chars("asdg"), &chars("asdf")), 75);
    }

    #[test]
    fn test_accuracy_counts_overflow_as_misses() {
        // Correct prefix plus two characters past the end of the target.
        assert_eq!(accuracy(&chars("abxx"), &chars("ab")), 50);
    }

    #[test]
    fn test_accuracy_stays_in_range() {
        let target = chars("the quick brown fox");
        for typed in ["t", "zzz", "the quick brown fox!!!", "qqqqqqqqqqqqqqqqqqqqqqqqq"] {
            let acc = accuracy(&chars(typed), &target);
            assert!(acc <= 100, "{typed}: {acc}");
        }
        assert_eq!(accuracy(&chars("zzz"), &target), 0);
    }

    #[test]
    fn test_accuracy_rounds_half_up() {
        // 1 of 8 wrong = 87.5%
        assert_eq!(accuracy(&chars("abcdefgX"), &chars("abcdefgh")), 88);
    }

    #[test]
    fn test_classify_char_positions() {
        let target = chars("abc");
        let typed = chars("ax");
        assert_eq!(classify_char(&target, &typed, 0), CharClass::Correct);
        assert_eq!(classify_char(&target, &typed, 1), CharClass::Incorrect);
        assert_eq!(classify_char(&target, &typed, 2), CharClass::Current);
        assert_eq!(classify_char(&target, &typed, 3), CharClass::Pending);
    }

    #[test]
    fn test_classify_single_current_at_typed_len() {
        let target = chars("hello world");
        for n in 0..=target.len() {
            let typed: Vec<char> = target[..n].to_vec();
            let current: Vec<usize> = (0..target.len())
                .filter(|&i| classify_char(&target, &typed, i) == CharClass::Current)
                .collect();
            assert!(current.len() <= 1);
            if n < target.len() {
                assert_eq!(current, vec![n]);
            } else {
                assert!(current.is_empty());
            }
        }
    }

    #[test]
    fn test_classify_typed_past_target_is_incorrect() {
        let target = chars("ab");
        let typed = chars("abc");
        assert_eq!(classify_char(&target, &typed, 2), CharClass::Incorrect);
    }

    #[test]
    fn test_is_complete_reflexive() {
        for t in ["", "a", "asdf jkl;", "The quick brown fox."] {
            let t = chars(t);
            assert!(is_complete(&t, &t));
            let mut longer = t.clone();
            longer.push('x');
            assert!(!is_complete(&longer, &t));
        }
    }

    #[test]
    fn test_empty_target_and_input() {
        assert_eq!(accuracy(&[], &[]), 100);
        assert!(is_complete(&[], &[]));
        assert!(!is_complete(&chars("a"), &[]));
    }

    #[test]
    fn test_word_count_literal_space() {
        assert_eq!(word_count(&chars("the cat sat")), 3);
        assert_eq!(word_count(&chars("  the cat  ")), 2);
        assert_eq!(word_count(&chars("the  cat")), 3);
        assert_eq!(word_count(&chars("")), 1);
        assert_eq!(word_count(&chars("   ")), 1);
    }

    #[test]
    fn test_wpm_one_minute() {
        assert_eq!(wpm(&chars("the cat sat"), Duration::from_millis(60_000)), 3);
    }

    #[test]
    fn test_wpm_half_minute_doubles() {
        assert_eq!(wpm(&chars("the cat sat"), Duration::from_secs(30)), 6);
    }

    #[test]
    fn test_wpm_guards() {
        assert_eq!(wpm(&chars("the cat"), Duration::ZERO), 0);
        assert_eq!(wpm(&[], Duration::from_secs(60)), 0);
    }

    #[test]
    fn test_snapshot_default_is_neutral() {
        let snap = MetricsSnapshot::default();
        assert_eq!(snap.accuracy, 100);
        assert_eq!(snap.wpm, 0);
        assert_eq!(snap.current_index, 0);
    }

    #[test]
    fn test_snapshot_compute() {
        let snap = MetricsSnapshot::compute(
            &chars("asdf"),
            &chars("asdg"),
            Duration::from_secs(60),
        );
        assert_eq!(snap.correct_count, 3);
        assert_eq!(snap.total_typed, 4);
        assert_eq!(snap.accuracy, 75);
        assert_eq!(snap.current_index, 4);
        assert_eq!(snap.wpm, 1);
    }
}
