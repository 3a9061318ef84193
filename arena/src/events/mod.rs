//! Arena lifecycle events and observer sinks.
//!
//! The arena publishes a fixed sequence of events to an optional injected
//! observer. Publication is fire-and-forget and never changes the result.
//!
//! ```text
//! arena_started
//!   round_started
//!     debate_started → argument_presented (devil) → argument_presented (angel) → verdict_issued
//!     ... per finding
//!   round_completed
//!   ... per round
//! arena_completed
//! ```

pub mod observer;
pub mod types;

pub use observer::{
    ArenaObserver, BroadcastObserver, MemoryObserver, SharedObserver, TracingObserver,
};
pub use types::ArenaEvent;
