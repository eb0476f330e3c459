//! Fixed sample statistics shown on the dashboard and home screen.
//!
//! Nothing here is derived from real sessions; the figures are placeholders
//! until results are persisted.

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overview {
    pub total_tests: u32,
    pub total_hours: u32,
    pub avg_wpm: u32,
    pub avg_accuracy: u32,
    pub best_wpm: u32,
    pub best_accuracy: u32,
    pub words_typed: u32,
    pub improvement_percent: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub wpm: u32,
    pub accuracy: u32,
    pub tests_completed: u32,
    pub minutes_spent: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeeklyStat {
    pub week: &'static str,
    pub avg_wpm: u32,
    pub avg_accuracy: u32,
    pub tests_completed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub earned_on: Option<NaiveDate>,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        self.earned_on.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultKey {
    pub key: char,
    pub errors: u32,
    pub accuracy: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tip {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeeklySummary {
    pub wpm_gain: i32,
    pub tests_completed: u32,
    pub hours_practiced: f64,
    pub days_active: u32,
    pub headline: &'static str,
    pub message: &'static str,
}

/// Numbers shown in the home screen header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickStats {
    pub best_wpm: u32,
    pub accuracy: u32,
    pub total_tests: u32,
    pub hours_practiced: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
}

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            TimeRange::Week => TimeRange::Month,
            TimeRange::Month => TimeRange::Week,
        }
    }
}

/// Rows for the progress table: daily for a week, weekly for a month.
#[derive(Clone, Debug, PartialEq)]
pub enum RangeRows {
    Daily(Vec<DailyStat>),
    Weekly(Vec<WeeklyStat>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "0-20 WPM",
            SkillLevel::Intermediate => "20-40 WPM",
            SkillLevel::Advanced => "40-60 WPM",
            SkillLevel::Expert => "60+ WPM",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressLevel {
    pub level: SkillLevel,
    /// Percent through the current 20-WPM band.
    pub progress: f64,
}

pub fn progress_level(wpm: u32) -> ProgressLevel {
    let wpm = f64::from(wpm);
    let band = |start: f64| (wpm - start) / 20.0 * 100.0;
    if wpm < 20.0 {
        ProgressLevel {
            level: SkillLevel::Beginner,
            progress: band(0.0),
        }
    } else if wpm < 40.0 {
        ProgressLevel {
            level: SkillLevel::Intermediate,
            progress: band(20.0),
        }
    } else if wpm < 60.0 {
        ProgressLevel {
            level: SkillLevel::Advanced,
            progress: band(40.0),
        }
    } else {
        ProgressLevel {
            level: SkillLevel::Expert,
            progress: band(60.0).min(100.0),
        }
    }
}

fn jan_2024(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

pub struct MockStats;

impl MockStats {
    pub fn overview() -> Overview {
        Overview {
            total_tests: 147,
            total_hours: 52,
            avg_wpm: 58,
            avg_accuracy: 92,
            best_wpm: 78,
            best_accuracy: 98,
            words_typed: 12_840,
            improvement_percent: 23,
        }
    }

    pub fn daily() -> Vec<DailyStat> {
        [
            (15, 45, 89, 3, 25),
            (16, 48, 91, 5, 35),
            (17, 52, 88, 4, 30),
            (18, 55, 93, 6, 40),
            (19, 58, 95, 4, 28),
            (20, 61, 92, 7, 45),
            (21, 65, 94, 5, 38),
        ]
        .into_iter()
        .map(|(day, wpm, accuracy, tests_completed, minutes_spent)| DailyStat {
            date: jan_2024(day),
            wpm,
            accuracy,
            tests_completed,
            minutes_spent,
        })
        .collect()
    }

    pub fn weekly() -> Vec<WeeklyStat> {
        vec![
            WeeklyStat { week: "Week 1", avg_wpm: 42, avg_accuracy: 87, tests_completed: 18 },
            WeeklyStat { week: "Week 2", avg_wpm: 48, avg_accuracy: 89, tests_completed: 22 },
            WeeklyStat { week: "Week 3", avg_wpm: 54, avg_accuracy: 92, tests_completed: 28 },
            WeeklyStat { week: "Week 4", avg_wpm: 58, avg_accuracy: 94, tests_completed: 31 },
        ]
    }

    pub fn for_range(range: TimeRange) -> RangeRows {
        match range {
            TimeRange::Week => RangeRows::Daily(Self::daily()),
            TimeRange::Month => RangeRows::Weekly(Self::weekly()),
        }
    }

    pub fn achievements() -> Vec<Achievement> {
        vec![
            Achievement {
                title: "Speed Demon",
                description: "Reached 60+ WPM",
                earned_on: Some(jan_2024(18)),
            },
            Achievement {
                title: "Accuracy Master",
                description: "95%+ accuracy for 5 consecutive tests",
                earned_on: Some(jan_2024(19)),
            },
            Achievement {
                title: "Consistency King",
                description: "Practice 7 days in a row",
                earned_on: Some(jan_2024(21)),
            },
            Achievement {
                title: "Century Club",
                description: "Complete 100 typing tests",
                earned_on: Some(jan_2024(20)),
            },
            Achievement {
                title: "Lightning Fingers",
                description: "Reach 80+ WPM",
                earned_on: None,
            },
            Achievement {
                title: "Perfect Score",
                description: "Achieve 100% accuracy",
                earned_on: None,
            },
        ]
    }

    pub fn difficult_keys() -> Vec<DifficultKey> {
        vec![
            DifficultKey { key: 'q', errors: 23, accuracy: 78 },
            DifficultKey { key: 'z', errors: 19, accuracy: 82 },
            DifficultKey { key: 'x', errors: 17, accuracy: 85 },
            DifficultKey { key: 'p', errors: 15, accuracy: 87 },
            DifficultKey { key: ';', errors: 12, accuracy: 89 },
        ]
    }

    pub fn tips() -> Vec<Tip> {
        vec![
            Tip {
                heading: "Speed Focus",
                body: "Your accuracy is excellent! Try increasing your typing speed by 5-10 WPM while maintaining 90%+ accuracy.",
            },
            Tip {
                heading: "Key Practice",
                body: "Focus on practicing the 'Q' and 'Z' keys. Consider doing specific exercises for these problem areas.",
            },
            Tip {
                heading: "Consistency",
                body: "Great job maintaining daily practice! Try to practice for at least 15 minutes per session for optimal improvement.",
            },
        ]
    }

    pub fn weekly_summary() -> WeeklySummary {
        WeeklySummary {
            wpm_gain: 12,
            tests_completed: 31,
            hours_practiced: 3.2,
            days_active: 7,
            headline: "Excellent Progress!",
            message: "You've shown remarkable improvement this week. Keep up the fantastic work!",
        }
    }

    pub fn quick_stats() -> QuickStats {
        QuickStats {
            best_wpm: 65,
            accuracy: 94,
            total_tests: 127,
            hours_practiced: 48,
        }
    }

    /// Completion of each skill band on the home screen's progress journey.
    pub fn journey() -> [(SkillLevel, u32); 4] {
        [
            (SkillLevel::Beginner, 100),
            (SkillLevel::Intermediate, 100),
            (SkillLevel::Advanced, 85),
            (SkillLevel::Expert, 30),
        ]
    }
}
