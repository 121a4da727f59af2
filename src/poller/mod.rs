pub use event_poller::{CycleOutcome, EventPoller, PollerState};
pub use poll_cursor::PollCursor;

mod event_poller;
mod poll_cursor;
