//! Byte-driven detection machinery.
//!
//! This module is intended for applications feeding input piecemeal, or
//! needing access to individual probers. See [`crate::avec`] for functions
//! covering common detection patterns.
//!
//! # Architecture
//!
//! Each candidate encoding is tested by a prober, a hypothesis test fed one
//! byte at a time through the [`CharsetProber`](prober::CharsetProber) trait.
//! Probers come in three families:
//!
//! - Multi-byte probers validate input against the grammar of an encoding with
//! a [`CodingStateMachine`](machine::CodingStateMachine), and score the
//! characters it accepts by how common they are in the target language.
//!
//! - The escape prober runs the grammars of the 7-bit, escape-based encodings
//! side by side. The first to see its designator sequence wins.
//!
//! - Single-byte probers score pairs of adjacent letters against the
//! statistics of a script.
//!
//! Probers of one family run in lock-step in a group, behind a filter dropping
//! bytes that carry no evidence for that family. The [`UniversalDetector`]
//! picks the families to run from the bytes seen so far, and arbitrates
//! between them.
//!
//! All tables are compiled into the binary, and no prober allocates.

pub mod context;
pub mod detector;
pub mod distribution;
pub mod escape;
pub mod filter;
pub mod group;
pub mod hebrew;
pub mod language_models;
pub mod latin1;
pub mod machine;
pub mod models;
pub mod multi_byte;
pub mod packed;
pub mod prober;
pub mod single_byte;

mod frequency;

pub use detector::{Detection, InputState, MINIMUM_THRESHOLD, UniversalDetector};
pub use prober::SHORTCUT_THRESHOLD;
