const EASY: &[&str] = &[
    "cat", "dog", "run", "jump", "play", "fast", "slow", "big", "small", "fun",
];

const MEDIUM: &[&str] = &[
    "computer",
    "keyboard",
    "typing",
    "practice",
    "exercise",
    "challenge",
    "improve",
    "accuracy",
];

const HARD: &[&str] = &[
    "sophisticated",
    "algorithm",
    "programming",
    "development",
    "implementation",
    "optimization",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordTier {
    Easy,
    Medium,
    Hard,
}

impl WordTier {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=3 => WordTier::Easy,
            4..=6 => WordTier::Medium,
            _ => WordTier::Hard,
        }
    }

    pub fn words(self) -> &'static [&'static str] {
        match self {
            WordTier::Easy => EASY,
            WordTier::Medium => MEDIUM,
            WordTier::Hard => HARD,
        }
    }
}
