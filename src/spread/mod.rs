//! Spread computation module
//!
//! Aligns commercial bank rates against the central bank policy rate

mod aligner;
mod history;
mod types;

pub use aligner::{align_spreads, alignment_report};
pub use history::RateHistory;
pub use types::{AlignmentReport, SpreadObservation};
