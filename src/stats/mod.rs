pub mod mock;

pub use mock::{MockStats, TimeRange, progress_level};
