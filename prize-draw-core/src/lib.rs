//! Constrained random selection of prize winners.
//!
//! The samplers draw from a candidate pool with a cryptographically strong
//! random source. An appointment rule pins a person to a prize: they are
//! prioritized when their prize is drawn and excluded from every other
//! prize's draw. Previous winners are excluded unconditionally. Results are
//! shuffled before they are returned so a pinned entry is indistinguishable
//! from a randomly drawn one.

mod error;
mod participant;
mod sample;
mod shuffle;

pub use error::DrawError;
pub use participant::{AppointRule, HasUid, Participant};
pub use sample::{sample_with_appointments, sample_without_replacement};
pub use shuffle::shuffle;
