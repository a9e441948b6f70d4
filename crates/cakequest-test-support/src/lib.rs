//! Shared test doubles for the Cake Quest mini-game collection.

mod clock;
mod mount;
mod rng;

pub use clock::{FixedClock, SteppingClock};
pub use mount::RecordingMount;
pub use rng::{MockRng, SequenceRng};
