use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Difficulty::Easy => {
                "The quick brown fox jumps over the lazy dog. This is a simple sentence for typing practice. Easy words help beginners learn."
            }
            Difficulty::Medium => {
                "Technology advances rapidly in modern society. Programming languages evolve continuously, requiring developers to adapt their skills accordingly."
            }
            Difficulty::Hard => {
                "Sophisticated algorithms optimize computational efficiency through strategic implementation of data structures, enhancing overall system performance significantly."
            }
            Difficulty::Advanced => {
                "Quantum computing paradigms revolutionize cryptographic methodologies, necessitating unprecedented security protocols for safeguarding sensitive information."
            }
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&d| d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&d| d == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Speed-test lengths offered in the settings panel, in seconds.
pub const TEST_DURATIONS: [u64; 4] = [30, 60, 120, 300];

pub const DEFAULT_TEST_DURATION: u64 = 60;

pub fn duration_label(secs: u64) -> String {
    match secs {
        s if s < 60 => format!("{s} seconds"),
        60 => "1 minute".to_string(),
        s if s % 60 == 0 => format!("{} minutes", s / 60),
        s => format!("{s} seconds"),
    }
}

pub fn next_duration(current: u64) -> u64 {
    match TEST_DURATIONS.iter().position(|&d| d == current) {
        Some(idx) => TEST_DURATIONS[(idx + 1) % TEST_DURATIONS.len()],
        None => DEFAULT_TEST_DURATION,
    }
}

pub fn prev_duration(current: u64) -> u64 {
    match TEST_DURATIONS.iter().position(|&d| d == current) {
        Some(idx) => TEST_DURATIONS[(idx + TEST_DURATIONS.len() - 1) % TEST_DURATIONS.len()],
        None => DEFAULT_TEST_DURATION,
    }
}
