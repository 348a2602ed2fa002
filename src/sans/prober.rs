//! The contract shared by every hypothesis test.

use crate::charset::Charset;

/// Confidence at or above which a prober resolves early.
pub const SHORTCUT_THRESHOLD: f32 = 0.95;

/// Progress of a prober.
///
/// Once [`FoundIt`](Self::FoundIt) or [`NotMe`](Self::NotMe) is reached, a
/// prober stays there until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbingState {
    /// The input is still open to this prober's charset.
    Detecting,
    /// The input is certainly in this prober's charset.
    FoundIt,
    /// The input is certainly not in this prober's charset.
    NotMe,
}

impl ProbingState {
    /// Whether the state can no longer change before a reset.
    pub fn is_final(self) -> bool {
        self != Self::Detecting
    }
}

/// A hypothesis test for one charset, or a family of charsets.
pub trait CharsetProber {
    /// The charset this prober currently favours, if any.
    fn charset(&self) -> Option<Charset>;

    /// Current progress of the test.
    fn state(&self) -> ProbingState;

    /// Confidence in [`Self::charset`], between 0 and 1.
    fn confidence(&self) -> f32;

    /// Consume one byte, returning the resulting state.
    ///
    /// Implementations must return early without effect once the state is
    /// final.
    fn feed_byte(&mut self, byte: u8) -> ProbingState;

    /// Consume bytes until they run out or the state becomes final.
    fn feed(&mut self, bytes: &[u8]) -> ProbingState {
        for &b in bytes {
            if self.feed_byte(b).is_final() {
                break;
            }
        }

        self.state()
    }

    /// Restore the state the prober was constructed in.
    fn reset(&mut self);
}
