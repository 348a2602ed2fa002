//! Probers for single-byte encodings of alphabetic scripts.
//!
//! Every byte maps to the frequency order of the letter it encodes. Pairs of
//! common letters are scored against a precedence matrix of how often the pair
//! occurs in typical text of the script: a wrong encoding scrambles the
//! letters, and with them the pairs.

use crate::charset::Charset;

use super::{
    packed::NibbleTable,
    prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD},
};

/// Letters with orders below this form scored pairs.
const SAMPLE_SIZE: u8 = 64;
/// Orders from this up are digits, symbols, line breaks and control bytes.
const SYMBOL_CUTOFF: u8 = 250;

const SB_ENOUGH_REL_THRESHOLD: u64 = 1024;
const NEGATIVE_SHORTCUT_THRESHOLD: f32 = 0.05;
const SURE_YES: f32 = 0.99;
const SURE_NO: f32 = 0.01;

/// Index of the category of pairs seen in most typical text.
const POSITIVE_CATEGORY: usize = 3;
const CATEGORY_COUNT: usize = 4;

/// Letter statistics of one script in one encoding.
///
/// Orders 0 to 63 are the most frequent letters, most frequent first. Less
/// frequent letters follow, then reserved orders: 252 for digits, 253 for
/// symbols, 254 for line breaks and 255 for control and undefined bytes.
#[derive(Debug)]
pub struct SequenceModel {
    /// Frequency order of the letter each byte encodes.
    pub orders: &'static [u8; 256],
    /// Category (0 to 3) of each pair of common letters, indexed by
    /// `first * 64 + second`.
    pub precedence: &'static NibbleTable<512>,
    /// Share of pairs in the most likely category, over typical text.
    pub typical_positive_ratio: f32,
    /// The encoding the orders describe.
    pub charset: Charset,
}

/// Scores input against one [`SequenceModel`].
#[derive(Debug, Clone)]
pub struct SingleByteProber {
    model: &'static SequenceModel,
    /// Score pairs back to front, for text stored in visual order.
    reversed: bool,
    charset: Charset,
    state: ProbingState,
    last_order: u8,
    sequence_counters: [u64; CATEGORY_COUNT],
    total_sequences: u64,
    total_chars: u64,
    frequent_chars: u64,
}

impl SingleByteProber {
    pub fn new(model: &'static SequenceModel) -> Self {
        Self::with_direction(model, false, model.charset)
    }

    /// Score pairs in reverse, reporting `charset` for the visual ordering.
    pub fn reversed(model: &'static SequenceModel, charset: Charset) -> Self {
        Self::with_direction(model, true, charset)
    }

    fn with_direction(model: &'static SequenceModel, reversed: bool, charset: Charset) -> Self {
        Self {
            model,
            reversed,
            charset,
            state: ProbingState::Detecting,
            last_order: u8::MAX,
            sequence_counters: [0; CATEGORY_COUNT],
            total_sequences: 0,
            total_chars: 0,
            frequent_chars: 0,
        }
    }
}

impl CharsetProber for SingleByteProber {
    fn charset(&self) -> Option<Charset> {
        Some(self.charset)
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        if self.total_sequences == 0 {
            return SURE_NO;
        }

        let positive = self.sequence_counters[POSITIVE_CATEGORY] as f32;
        let r = positive / self.total_sequences as f32 / self.model.typical_positive_ratio
            * self.frequent_chars as f32
            / self.total_chars as f32;

        r.min(SURE_YES)
    }

    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state.is_final() {
            return self.state;
        }

        let order = self.model.orders[byte as usize];

        if order < SYMBOL_CUTOFF {
            self.total_chars += 1;
        }

        if order < SAMPLE_SIZE {
            self.frequent_chars += 1;

            if self.last_order < SAMPLE_SIZE {
                let (first, second) = match self.reversed {
                    false => (self.last_order, order),
                    true => (order, self.last_order),
                };

                let index = first as usize * SAMPLE_SIZE as usize + second as usize;
                let category = self.model.precedence.get(index);

                self.total_sequences += 1;
                self.sequence_counters[category as usize] += 1;

                if self.total_sequences > SB_ENOUGH_REL_THRESHOLD {
                    let confidence = self.confidence();

                    if confidence > SHORTCUT_THRESHOLD {
                        self.state = ProbingState::FoundIt;
                    } else if confidence < NEGATIVE_SHORTCUT_THRESHOLD {
                        self.state = ProbingState::NotMe;
                    }
                }
            }
        }

        self.last_order = order;
        self.state
    }

    fn reset(&mut self) {
        self.state = ProbingState::Detecting;
        self.last_order = u8::MAX;
        self.sequence_counters = [0; CATEGORY_COUNT];
        self.total_sequences = 0;
        self.total_chars = 0;
        self.frequent_chars = 0;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use encoding_rs::ISO_8859_5;

    use super::*;
    use crate::sans::language_models::{
        ISO_8859_5_BULGARIAN, ISO_8859_5_RUSSIAN, KOI8_R_RUSSIAN, WINDOWS_1251_RUSSIAN,
    };

    // "привет мир, как дела" in windows-1251.
    const GREETING: &[u8] = b"\xef\xf0\xe8\xe2\xe5\xf2 \xec\xe8\xf0, \xea\xe0\xea \xe4\xe5\xeb\xe0";

    #[test]
    fn no_pairs_means_low_confidence() {
        let mut prober = SingleByteProber::new(&WINDOWS_1251_RUSSIAN);
        assert_eq!(prober.confidence(), SURE_NO);
        prober.feed(b"1, 2, 3.");
        assert_eq!(prober.confidence(), SURE_NO);
    }

    #[test]
    fn right_encoding_scores_higher() {
        let mut right = SingleByteProber::new(&WINDOWS_1251_RUSSIAN);
        let mut wrong = SingleByteProber::new(&KOI8_R_RUSSIAN);

        for _ in 0..4 {
            right.feed(GREETING);
            wrong.feed(GREETING);
        }

        assert!(right.confidence() > wrong.confidence());
        assert_eq!(right.charset(), Some(Charset::Windows1251));
    }

    #[test]
    fn cyrillic_models_prefer_their_own_language() {
        for (fixture, native, foreign) in [
            ("bulgarian", &ISO_8859_5_BULGARIAN, &ISO_8859_5_RUSSIAN),
            ("russian", &ISO_8859_5_RUSSIAN, &ISO_8859_5_BULGARIAN),
        ] {
            let text = std::fs::read_to_string(std::format!("fixtures/{fixture}.txt")).unwrap();
            let (bytes, _, _) = ISO_8859_5.encode(&text);

            let mut native = SingleByteProber::new(native);
            let mut foreign = SingleByteProber::new(foreign);
            native.feed(&bytes);
            foreign.feed(&bytes);

            assert!(native.confidence() > 0.9, "{fixture}");
            assert!(native.confidence() > foreign.confidence(), "{fixture}");
        }
    }

    #[test]
    fn long_streams_keep_their_ratios() {
        let mut prober = SingleByteProber::new(&WINDOWS_1251_RUSSIAN);
        prober.feed(GREETING);
        let confidence = prober.confidence();

        // Scaling by a power of two leaves every ratio exact.
        for count in &mut prober.sequence_counters {
            *count <<= 32;
        }
        prober.total_sequences <<= 32;
        prober.total_chars <<= 32;
        prober.frequent_chars <<= 32;
        assert_eq!(prober.confidence(), confidence);

        prober.feed(GREETING);
        assert!(prober.total_sequences > 1 << 32);
        assert!((0.0..=SURE_YES).contains(&prober.confidence()));
    }

    #[test]
    fn reversed_scores_mirrored_text() {
        let mut mirrored = [0; GREETING.len()];
        mirrored.copy_from_slice(GREETING);
        mirrored.reverse();

        let mut forward = SingleByteProber::new(&WINDOWS_1251_RUSSIAN);
        let mut reversed = SingleByteProber::reversed(&WINDOWS_1251_RUSSIAN, Charset::Windows1251);
        forward.feed(GREETING);
        reversed.feed(&mirrored);

        assert_eq!(forward.confidence(), reversed.confidence());
    }

    #[test]
    fn reset_forgets_counts() {
        let mut prober = SingleByteProber::new(&WINDOWS_1251_RUSSIAN);
        prober.feed(GREETING);
        assert!(prober.confidence() > SURE_NO);

        prober.reset();
        assert_eq!(prober.confidence(), SURE_NO);
        assert_eq!(prober.state(), ProbingState::Detecting);
    }
}
