#![no_std]

//! A streaming, statistical character encoding detector.
//!
//! Telltale guesses the charset of text whose encoding is undeclared or not to
//! be trusted. Input is consumed incrementally, and the guess comes with a
//! confidence between 0 and 1.
//!
//! Most users should begin with the functions in the [`avec`] module. Input
//! arriving in pieces can be fed to a [`UniversalDetector`] directly, as
//! described in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based detection (default).

pub mod avec;
pub mod charset;
pub mod language;
pub mod sans;

pub use charset::Charset;
pub use language::LanguageFilter;
pub use sans::{Detection, UniversalDetector};
