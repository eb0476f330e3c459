pub mod lessons;
pub mod rows;
pub mod texts;
pub mod words;

pub use rows::Row;
pub use texts::Difficulty;
