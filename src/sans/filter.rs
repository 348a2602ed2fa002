//! Byte filters run ahead of the statistical probers.
//!
//! Each filter takes one input byte at a time and returns the bytes, if any, to
//! pass on. Filtering is incremental, so its output does not depend on how the
//! input was split into chunks.

use tinyvec::{ArrayVec, array_vec};

const SPACE: u8 = 0x20;

/// ASCII letters buffered while waiting for a high byte.
const PENDING_CAPACITY: usize = 32;

/// Output of one filter step: the pending letters plus the current byte.
pub type Filtered = ArrayVec<[u8; PENDING_CAPACITY + 1]>;

fn is_high(byte: u8) -> bool {
    byte >= 0x80
}

/// Drops all but the first of each run of ASCII bytes.
///
/// Multi-byte grammars only need to see where a character ends, and one ASCII
/// byte marks that as well as a thousand.
#[derive(Debug, Clone)]
pub struct HighByteFilter {
    keep_next: bool,
}

impl HighByteFilter {
    pub const fn new() -> Self {
        Self { keep_next: true }
    }

    pub fn filter(&mut self, byte: u8) -> Filtered {
        if is_high(byte) {
            self.keep_next = true;
            array_vec!([u8; PENDING_CAPACITY + 1] => byte)
        } else if self.keep_next {
            self.keep_next = false;
            array_vec!([u8; PENDING_CAPACITY + 1] => byte)
        } else {
            Filtered::new()
        }
    }

    pub fn reset(&mut self) {
        self.keep_next = true;
    }
}

/// Keeps only words containing high bytes, separated by single spaces.
///
/// Words of pure ASCII letters are English (or markup) in any single-byte
/// encoding, and only dilute the letter statistics.
#[derive(Debug, Clone)]
pub struct LettersFilter {
    /// Letters of the current word, before any high byte. The oldest are
    /// dropped once full.
    pending: ArrayVec<[u8; PENDING_CAPACITY]>,
    seen_high: bool,
}

impl LettersFilter {
    pub const fn new() -> Self {
        Self {
            pending: ArrayVec::from_array_empty([0; PENDING_CAPACITY]),
            seen_high: false,
        }
    }

    pub fn filter(&mut self, byte: u8) -> Filtered {
        let mut out = Filtered::new();

        if is_high(byte) {
            if !self.seen_high {
                out.extend_from_slice(&self.pending);
            }
            self.pending.clear();
            self.seen_high = true;
            out.push(byte);
        } else if byte.is_ascii_alphabetic() {
            if self.seen_high {
                out.push(byte);
            } else {
                if self.pending.len() == PENDING_CAPACITY {
                    self.pending.remove(0);
                }
                self.pending.push(byte);
            }
        } else {
            self.pending.clear();
            if self.seen_high {
                self.seen_high = false;
                out.push(SPACE);
            }
        }

        out
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.seen_high = false;
    }
}

/// Drops text inside `<...>` tags, collapsing other runs of non-letters to a
/// single space.
#[derive(Debug, Clone)]
pub struct MarkupFilter {
    in_tag: bool,
    in_word: bool,
}

impl MarkupFilter {
    pub const fn new() -> Self {
        Self {
            in_tag: false,
            in_word: false,
        }
    }

    pub fn filter(&mut self, byte: u8) -> Filtered {
        match byte {
            b'>' => self.in_tag = false,
            b'<' => self.in_tag = true,
            _ => {}
        }

        if is_high(byte) || byte.is_ascii_alphabetic() {
            if self.in_tag {
                return Filtered::new();
            }
            self.in_word = true;
            array_vec!([u8; PENDING_CAPACITY + 1] => byte)
        } else if self.in_word {
            self.in_word = false;
            array_vec!([u8; PENDING_CAPACITY + 1] => SPACE)
        } else {
            Filtered::new()
        }
    }

    pub fn reset(&mut self) {
        self.in_tag = false;
        self.in_word = false;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn run(mut step: impl FnMut(u8) -> Filtered, input: &[u8]) -> Vec<u8> {
        input.iter().flat_map(|&b| step(b)).collect()
    }

    #[test]
    fn high_byte_filter_collapses_ascii_runs() {
        let mut filter = HighByteFilter::new();
        let out = run(|b| filter.filter(b), b"abc\xb5\xc4 def\xa1");
        assert_eq!(out, b"a\xb5\xc4 \xa1");
    }

    #[test]
    fn letters_filter_keeps_words_with_high_bytes() {
        let mut filter = LettersFilter::new();
        let out = run(|b| filter.filter(b), b"hello w\xf6rld, plain caf\xe9!");
        assert_eq!(out, b"w\xf6rld caf\xe9 ");
    }

    #[test]
    fn letters_filter_forgets_old_letters() {
        let mut filter = LettersFilter::new();
        let mut input = [b'a'; 40];
        input[39] = 0xE9;
        input[0] = b'z';

        let out = run(|b| filter.filter(b), &input);
        assert_eq!(out.len(), PENDING_CAPACITY + 1);
        assert!(!out.contains(&b'z'));
        assert_eq!(out.last(), Some(&0xE9));
    }

    #[test]
    fn markup_filter_skips_tags() {
        let mut filter = MarkupFilter::new();
        let out = run(|b| filter.filter(b), b"<p class=x>caf\xe9</p> ok");
        assert_eq!(out, b"caf\xe9 ok");
    }

    #[test]
    fn reset_clears_pending() {
        let mut filter = LettersFilter::new();
        run(|b| filter.filter(b), b"abc");
        filter.reset();
        assert_eq!(run(|b| filter.filter(b), b"\xe9"), b"\xe9");
    }
}
