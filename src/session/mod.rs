pub mod metrics;
pub mod timer;
pub mod typing;

pub use metrics::{CharClass, MetricsSnapshot};
pub use timer::{Countdown, Tick, TickHandle, TimerState};
pub use typing::{Completion, InputOutcome, TypingSession};
