#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    Home,
    Top,
    Bottom,
    Numbers,
    All,
}

pub struct RowInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub keys: &'static str,
    pub badge: char,
    pub exercises: &'static [&'static str],
}

const HOME: RowInfo = RowInfo {
    title: "Home Row Foundation",
    description: "Master the foundation keys: A S D F - J K L ;",
    keys: "asdf jkl;",
    badge: 'H',
    exercises: &[
        "asdf jkl; fjdk slal",
        "ask fall; lads fads",
        "a;sldkfj alsdk fjal;",
        "flask salad falls asks",
        "sad lad ask fall flask",
    ],
};

const TOP: RowInfo = RowInfo {
    title: "Top Row Mastery",
    description: "Learn the upper row: Q W E R T Y U I O P",
    keys: "qwerty uiop",
    badge: 'T',
    exercises: &[
        "qwerty uiop typewriter",
        "quiet report equity",
        "pretty tower poetry",
        "query power territory",
        "typewriter potpourri",
    ],
};

const BOTTOM: RowInfo = RowInfo {
    title: "Bottom Row Control",
    description: "Master the lower keys: Z X C V B N M , . /",
    keys: "zxcvbnm,./",
    badge: 'B',
    exercises: &[
        "zxcv bnm,./zvbn cxzm",
        "maze cave comb name",
        "bronze carbon example",
        "cavemen maximum zebra",
        "vacant zombie machine",
    ],
};

const NUMBERS: RowInfo = RowInfo {
    title: "Number Row Precision",
    description: "Practice numbers and symbols: 1 2 3 4 5 6 7 8 9 0",
    keys: "1234567890",
    badge: '#',
    exercises: &[
        "123 456 789 0 numbers",
        "password123 email@site.com",
        "phone: (555) 123-4567",
        "order #12345 costs $67.89",
        "code: abc123 date: 01/23/45",
    ],
};

const ALL_ROWS: RowInfo = RowInfo {
    title: "All Rows Combined",
    description: "Practice all keyboard rows together",
    keys: "All Keys",
    badge: 'A',
    exercises: &[
        "The quick brown fox jumps over lazy dog",
        "Pack my box with five dozen liquor jugs",
        "How vexingly quick daft zebras jump",
        "Waltz nymph for quick jigs vex bud",
        "Sphinx of black quartz judge my vow",
    ],
};

impl Row {
    pub const ALL: [Row; 5] = [Row::Home, Row::Top, Row::Bottom, Row::Numbers, Row::All];

    pub fn info(self) -> &'static RowInfo {
        match self {
            Row::Home => &HOME,
            Row::Top => &TOP,
            Row::Bottom => &BOTTOM,
            Row::Numbers => &NUMBERS,
            Row::All => &ALL_ROWS,
        }
    }

    pub fn exercises(self) -> &'static [&'static str] {
        self.info().exercises
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_has_five_distinct_exercises() {
        for row in Row::ALL {
            let exercises = row.exercises();
            assert_eq!(exercises.len(), 5, "{}", row.info().title);
            for (i, a) in exercises.iter().enumerate() {
                for b in &exercises[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_row_cycle_wraps() {
        assert_eq!(Row::All.next(), Row::Home);
        assert_eq!(Row::Home.prev(), Row::All);
    }
}
