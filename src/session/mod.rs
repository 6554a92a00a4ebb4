//! Game session: timer and completion bookkeeping, delayed-effect
//! scheduling, and the event stream the presentation layer consumes.

pub mod event;
pub mod game;
pub mod schedule;

pub use event::{EventSink, GameSummary, NullSink, RecordingSink, SessionEvent};
pub use game::GameSession;
pub use schedule::{Generation, ScheduledTask, TaskKind, TaskQueue};
