//! Convenience interfaces for common detection patterns.
//!
//! The functions in this module run a [`UniversalDetector`] over a whole data
//! slice or reader. Use the detector directly when input arrives piecemeal
//! from elsewhere.
//!
//! [`UniversalDetector`]: crate::sans::UniversalDetector

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::detect as detect_reader;
pub use slice::detect as detect_slice;
