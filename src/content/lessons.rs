pub struct Lesson {
    pub title: &'static str,
    pub description: &'static str,
    pub keys: &'static str,
    pub practice: &'static str,
    pub tips: &'static [&'static str],
}

pub const LESSONS: &[Lesson] = &[
    Lesson {
        title: "Home Row Foundation",
        description: "Master the home row keys - the foundation of touch typing",
        keys: "asdf jkl;",
        practice: "asdf jkl; fjdk slal fjdk slal asdf jkl;",
        tips: &[
            "Place your fingers on ASDF and JKL;",
            "Keep your wrists straight and floating",
            "Return to home position after each keystroke",
            "Use only the designated finger for each key",
        ],
    },
    Lesson {
        title: "Upper Row Mastery",
        description: "Learn the top row keys with proper finger placement",
        keys: "qwer tyui op",
        practice: "qwer tyui op wert yuio qwerty uiop",
        tips: &[
            "Reach up with the same fingers used for home row",
            "Don't move your whole hand, just extend fingers",
            "Maintain contact with home row when possible",
            "Practice smooth transitions between rows",
        ],
    },
    Lesson {
        title: "Lower Row Control",
        description: "Master the bottom row keys for complete coverage",
        keys: "zxcv bnm,./",
        practice: "zxcv bnm,./ cvbn zxcv bnm,./",
        tips: &[
            "Reach down while keeping other fingers on home row",
            "Use proper finger angles for comfort",
            "Don't press too hard on the keys",
            "Keep your thumbs relaxed for space bar",
        ],
    },
    Lesson {
        title: "Numbers and Symbols",
        description: "Add numbers and common symbols to your repertoire",
        keys: "1234567890 !@#$%^&*()",
        practice: "123 456 789 0!@ #$% ^&* ()",
        tips: &[
            "Use the same fingers as the letters below",
            "Practice shift key combinations",
            "Keep your pinky strong for shift keys",
            "Don't look at the keyboard",
        ],
    },
];

pub struct PostureTip {
    pub heading: &'static str,
    pub detail: &'static str,
}

pub const SITTING_POSTURE: &[PostureTip] = &[
    PostureTip {
        heading: "Straight Back",
        detail: "Keep your back straight and shoulders relaxed",
    },
    PostureTip {
        heading: "Feet Flat",
        detail: "Plant both feet firmly on the ground",
    },
    PostureTip {
        heading: "Elbows 90\u{b0}",
        detail: "Keep elbows at roughly 90-degree angles",
    },
    PostureTip {
        heading: "Screen Distance",
        detail: "Monitor should be 20-24 inches away",
    },
];

pub const HAND_POSITION: &[PostureTip] = &[
    PostureTip {
        heading: "Floating Wrists",
        detail: "Don't rest wrists on the desk while typing",
    },
    PostureTip {
        heading: "Curved Fingers",
        detail: "Keep fingers naturally curved like holding a small ball",
    },
    PostureTip {
        heading: "Light Touch",
        detail: "Use gentle pressure on keys, don't pound",
    },
    PostureTip {
        heading: "Home Position",
        detail: "Always return to home row after each keystroke",
    },
];

pub const PRACTICE_REMINDER: &str = "Start slowly and focus on accuracy over speed. Speed will naturally improve as you develop muscle memory. Take regular breaks to prevent fatigue and maintain good posture throughout your practice sessions.";
