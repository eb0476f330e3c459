pub mod finger_guide;
pub mod row_practice;
pub mod speed_test;
pub mod word_game;

pub use finger_guide::{CursorMove, FingerGuide, GuideTab};
pub use row_practice::RowPractice;
pub use speed_test::SpeedTest;
pub use word_game::{GameMode, GameState, GameSummary, KeystrokeTally, WordGame};
