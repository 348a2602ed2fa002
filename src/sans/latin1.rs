//! Prober for windows-1252, the fallback for Western European text.

use crate::charset::Charset;

use super::{
    filter::MarkupFilter,
    packed::{ClassTable, NibbleTable},
    prober::{CharsetProber, ProbingState},
};

const UDF: u8 = 0; // undefined
const OTH: u8 = 1; // other
const ASC: u8 = 2; // ASCII capital
const ASS: u8 = 3; // ASCII small
const ACV: u8 = 4; // accented capital vowel
const ACO: u8 = 5; // accented capital other
const ASV: u8 = 6; // accented small vowel
const ASO: u8 = 7; // accented small other

const CLASS_COUNT: usize = 8;

#[rustfmt::skip]
static CLASSES: ClassTable = ClassTable::classes(OTH, &[
    (b'A', b'Z', ASC),
    (b'a', b'z', ASS),
    (0x81, 0x81, UDF), (0x8D, 0x8D, UDF), (0x8F, 0x90, UDF), (0x9D, 0x9D, UDF),
    (0x9F, 0x9F, ASO),
    (0xC0, 0xC5, ACV), (0xC6, 0xC7, ACO), (0xC8, 0xCF, ACV),
    (0xD0, 0xD1, ACO), (0xD2, 0xD6, ACV), (0xD8, 0xDC, ACV), (0xDD, 0xDF, ACO),
    (0xE0, 0xE5, ASV), (0xE6, 0xE7, ASO), (0xE8, 0xEF, ASV),
    (0xF0, 0xF1, ASO), (0xF2, 0xF6, ASV), (0xF8, 0xFC, ASV), (0xFD, 0xFF, ASO),
]);

/// Likelihood category of each class pair, indexed by `previous * 8 + current`:
/// 0 illegal, 1 very unlikely, 2 normal, 3 very likely.
#[rustfmt::skip]
static PAIRS: NibbleTable<8> = NibbleTable::from_nibbles(&[
//  UDF OTH ASC ASS ACV ACO ASV ASO
    0,  0,  0,  0,  0,  0,  0,  0,  // UDF
    0,  3,  3,  3,  3,  3,  3,  3,  // OTH
    0,  3,  3,  3,  3,  3,  3,  3,  // ASC
    0,  3,  3,  3,  1,  1,  3,  3,  // ASS
    0,  3,  3,  3,  1,  2,  1,  2,  // ACV
    0,  3,  3,  3,  3,  3,  3,  3,  // ACO
    0,  3,  1,  3,  1,  1,  1,  3,  // ASV
    0,  3,  1,  3,  1,  1,  3,  3,  // ASO
]);

/// Ceiling on the confidence of flawless input.
const CONFIDENCE_DISCOUNT: f32 = 0.73;
/// Weight of each very unlikely pair against the very likely ones.
const UNLIKELY_PENALTY: f32 = 20.0;
const SURE_NO: f32 = 0.01;

/// Scores adjacent letter classes of windows-1252 text.
///
/// The prober never confirms its charset, only rejects it on an undefined
/// byte, and its confidence stays well below certainty.
#[derive(Debug, Clone)]
pub struct Latin1Prober {
    filter: MarkupFilter,
    state: ProbingState,
    last_class: u8,
    frequency_counters: [u64; 4],
}

impl Latin1Prober {
    pub const fn new() -> Self {
        Self {
            filter: MarkupFilter::new(),
            state: ProbingState::Detecting,
            last_class: OTH,
            frequency_counters: [0; 4],
        }
    }
}

impl Default for Latin1Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetProber for Latin1Prober {
    fn charset(&self) -> Option<Charset> {
        Some(Charset::Windows1252)
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        if self.state == ProbingState::NotMe {
            return SURE_NO;
        }

        let total: u64 = self.frequency_counters.iter().sum();
        if total == 0 {
            return 0.0;
        }

        let likely = self.frequency_counters[3] as f32;
        let unlikely = self.frequency_counters[1] as f32;
        let confidence = (likely - unlikely * UNLIKELY_PENALTY) / total as f32;

        confidence.max(0.0) * CONFIDENCE_DISCOUNT
    }

    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state.is_final() {
            return self.state;
        }

        for b in self.filter.filter(byte) {
            let class = CLASSES.class_of(b);
            let category = PAIRS.get(self.last_class as usize * CLASS_COUNT + class as usize);

            if category == 0 {
                self.state = ProbingState::NotMe;
                break;
            }

            self.frequency_counters[category as usize] += 1;
            self.last_class = class;
        }

        self.state
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_table_matches_windows_1252() {
        assert_eq!(CLASSES.class_of(b'Q'), ASC);
        assert_eq!(CLASSES.class_of(b'q'), ASS);
        assert_eq!(CLASSES.class_of(b'!'), OTH);
        assert_eq!(CLASSES.class_of(0x81), UDF);
        assert_eq!(CLASSES.class_of(0x8A), OTH);
        assert_eq!(CLASSES.class_of(0x9F), ASO);
        assert_eq!(CLASSES.class_of(0xD7), OTH); // ×
        assert_eq!(CLASSES.class_of(0xE9), ASV); // é
        assert_eq!(CLASSES.class_of(0xF7), OTH); // ÷
        assert_eq!(CLASSES.class_of(0xFF), ASO); // ÿ
    }

    #[test]
    fn accented_prose_scores() {
        let mut prober = Latin1Prober::new();
        prober.feed(b"Les \xe9l\xe8ves du lyc\xe9e ont visit\xe9 le ch\xe2teau.");
        let confidence = prober.confidence();
        assert!(confidence > 0.5 && confidence <= CONFIDENCE_DISCOUNT);
    }

    #[test]
    fn long_streams_keep_their_ratios() {
        const PROSE: &[u8] = b"Les \xe9l\xe8ves du lyc\xe9e ont visit\xe9 le ch\xe2teau.";

        let mut prober = Latin1Prober::new();
        prober.feed(PROSE);
        let confidence = prober.confidence();

        for count in &mut prober.frequency_counters {
            *count <<= 32;
        }
        assert_eq!(prober.confidence(), confidence);

        prober.feed(PROSE);
        assert!(prober.frequency_counters[3] > 1 << 32);
        assert!((0.0..=CONFIDENCE_DISCOUNT).contains(&prober.confidence()));
    }

    #[test]
    fn undefined_bytes_reject() {
        let mut prober = Latin1Prober::new();
        assert_eq!(prober.feed(b"abc\x81def"), ProbingState::NotMe);
        assert_eq!(prober.confidence(), SURE_NO);

        prober.reset();
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert_eq!(prober.confidence(), 0.0);
    }

    #[test]
    fn tags_are_ignored() {
        let mut prober = Latin1Prober::new();
        prober.feed(b"<a href=\x81>");
        assert_eq!(prober.state(), ProbingState::Detecting);
    }
}
