//! Cancellable, reschedulable periodic execution.
//!
//! The timer is split in two layers:
//!
//! - [`TimerState`] is a pure finite-state machine. Every `resume`/`suspend`
//!   request is fed through it and yields the next state plus the single
//!   [`TimerEffect`] the driver must perform (if any).
//! - [`RepeatingTimer`] owns the mechanism: a tokio task that ticks at the
//!   configured interval and invokes the installed callback. It only spawns
//!   or aborts that task when the state machine says so, which is what makes
//!   `resume(); resume()` or `suspend(); suspend()` harmless.
//!
//! ```text
//!   Idle ──resume──▶ Running ──suspend──▶ Suspended
//!    │                 ▲  │                  │
//!  suspend           resume│                resume
//!   (no-op)          (no-op)◀────────────────┘
//! ```

mod repeating;
mod state;

pub use repeating::{RepeatingTimer, TimerCallback};
pub use state::{TimerEffect, TimerState};
