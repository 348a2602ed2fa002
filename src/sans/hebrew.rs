//! Logical versus visual ordering of Hebrew text.
//!
//! Windows-1255 and ISO-8859-8 share their letters. What tells them apart is
//! byte order: windows-1255 text is stored in reading order, while ISO-8859-8
//! is usually stored visually, each line reversed. Five Hebrew letters take a
//! distinct form at the end of a word, so where final forms appear relative to
//! spaces shows which way the text runs.

use crate::charset::Charset;

use super::{prober::CharsetProber, single_byte::SingleByteProber};

const SPACE: u8 = 0x20;

/// Score lead over which the word-ending evidence alone decides.
const MIN_FINAL_CHAR_DISTANCE: i64 = 5;
/// Model confidence lead over which the sequence evidence decides.
const MIN_MODEL_DISTANCE: f32 = 0.01;

/// ך ם ן ף ץ
fn is_final(byte: u8) -> bool {
    matches!(byte, 0xEA | 0xED | 0xEF | 0xF3 | 0xF5)
}

/// כ מ נ פ, the normal forms whose final variants are common. צ is left out:
/// it often ends words borrowed from other languages.
fn is_non_final(byte: u8) -> bool {
    matches!(byte, 0xEB | 0xEE | 0xF0 | 0xF4)
}

/// Counts word boundaries that only make sense in one direction.
#[derive(Debug, Clone)]
pub struct HebrewProber {
    final_char_logical_score: i64,
    final_char_visual_score: i64,
    prev: u8,
    before_prev: u8,
}

impl HebrewProber {
    pub const fn new() -> Self {
        Self {
            final_char_logical_score: 0,
            final_char_visual_score: 0,
            prev: SPACE,
            before_prev: SPACE,
        }
    }

    /// Consume one filtered byte. Runs of non-letters arrive as one space.
    pub fn feed_byte(&mut self, byte: u8) {
        if byte == SPACE {
            // A word just ended: a final form there reads logically, a
            // normal form visually.
            if self.before_prev != SPACE {
                if is_final(self.prev) {
                    self.final_char_logical_score += 1;
                } else if is_non_final(self.prev) {
                    self.final_char_visual_score += 1;
                }
            }
        } else if self.before_prev == SPACE && is_final(self.prev) {
            // A word just started with a final form.
            self.final_char_visual_score += 1;
        }

        self.before_prev = self.prev;
        self.prev = byte;
    }

    /// Name the ordering, given the sequence probers scoring each direction.
    pub fn charset(&self, logical: &SingleByteProber, visual: &SingleByteProber) -> Charset {
        let distance = self.final_char_logical_score - self.final_char_visual_score;

        if distance >= MIN_FINAL_CHAR_DISTANCE {
            return Charset::Windows1255;
        }
        if distance <= -MIN_FINAL_CHAR_DISTANCE {
            return Charset::Iso8859_8;
        }

        let model_distance = logical.confidence() - visual.confidence();

        if model_distance > MIN_MODEL_DISTANCE {
            return Charset::Windows1255;
        }
        if model_distance < -MIN_MODEL_DISTANCE {
            return Charset::Iso8859_8;
        }

        match distance < 0 {
            true => Charset::Iso8859_8,
            false => Charset::Windows1255,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for HebrewProber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sans::language_models::WINDOWS_1255_HEBREW;

    fn probers() -> (SingleByteProber, SingleByteProber) {
        let logical = SingleByteProber::new(&WINDOWS_1255_HEBREW);
        let visual = SingleByteProber::reversed(&WINDOWS_1255_HEBREW, Charset::Iso8859_8);
        (logical, visual)
    }

    fn feed(prober: &mut HebrewProber, bytes: &[u8]) {
        for &b in bytes {
            prober.feed_byte(b);
        }
    }

    #[test]
    fn final_forms_at_word_ends_read_logically() {
        // שלום (ending in final mem), repeated as words.
        let mut prober = HebrewProber::new();
        for _ in 0..5 {
            feed(&mut prober, b"\xf9\xec\xe5\xed ");
        }

        let (logical, visual) = probers();
        assert_eq!(prober.charset(&logical, &visual), Charset::Windows1255);
    }

    #[test]
    fn scores_grow_past_i32_range() {
        let mut prober = HebrewProber::new();
        prober.final_char_logical_score = i32::MAX.into();
        feed(&mut prober, b"\xf9\xec\xe5\xed ");

        assert_eq!(prober.final_char_logical_score, 1 << 31);
        let (logical, visual) = probers();
        assert_eq!(prober.charset(&logical, &visual), Charset::Windows1255);
    }

    #[test]
    fn final_forms_at_word_starts_read_visually() {
        // The same word, reversed.
        let mut prober = HebrewProber::new();
        for _ in 0..5 {
            feed(&mut prober, b"\xed\xe5\xec\xf9 ");
        }

        let (logical, visual) = probers();
        assert_eq!(prober.charset(&logical, &visual), Charset::Iso8859_8);
    }

    #[test]
    fn no_evidence_defaults_to_logical() {
        let prober = HebrewProber::new();
        let (logical, visual) = probers();
        assert_eq!(prober.charset(&logical, &visual), Charset::Windows1255);
    }
}
