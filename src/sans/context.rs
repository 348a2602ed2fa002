//! Hiragana pair analysis for Japanese encodings.
//!
//! Japanese prose is dense with hiragana, and some kana pairs (a small ゃ after
//! a non-i-row kana, for instance) essentially never occur. The share of pairs
//! falling in the "never" category separates Japanese text in the right
//! encoding from bytes that merely decode.

use super::frequency::HIRAGANA_CONTEXT;

const HIRAGANA_COUNT: usize = 83;
const CATEGORY_COUNT: usize = 6;

const ENOUGH_RELATIONS: u32 = 100;
const MAX_RELATIONS: u32 = 1000;
const MINIMUM_RELATIONS: u32 = 4;
const DONT_KNOW: f32 = -1.0;

/// The byte layout hiragana take in an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaLayout {
    /// Lead `82`, trails `9F..=F1`.
    ShiftJis,
    /// Lead `A4`, trails `A1..=F3`.
    EucJp,
}

impl KanaLayout {
    /// Order of a two-byte unit among the hiragana, if it is one.
    fn order(self, [lead, trail]: [u8; 2]) -> Option<usize> {
        match (self, lead, trail) {
            (Self::ShiftJis, 0x82, 0x9F..=0xF1) => Some((trail - 0x9F) as usize),
            (Self::EucJp, 0xA4, 0xA1..=0xF3) => Some((trail - 0xA1) as usize),
            _ => None,
        }
    }
}

/// Tallies the likelihood categories of consecutive hiragana.
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    layout: KanaLayout,
    relations: [u32; CATEGORY_COUNT],
    total_relations: u32,
    last_order: Option<usize>,
    done: bool,
}

impl ContextAnalyzer {
    pub const fn new(layout: KanaLayout) -> Self {
        Self {
            layout,
            relations: [0; CATEGORY_COUNT],
            total_relations: 0,
            last_order: None,
            done: false,
        }
    }

    /// Count a completed unit of `char_len` bytes ending in `unit`.
    pub fn feed(&mut self, unit: [u8; 2], char_len: u8) {
        if self.done {
            return;
        }

        let order = match char_len {
            2 => self.layout.order(unit),
            _ => None,
        };

        if let (Some(last), Some(order)) = (self.last_order, order) {
            self.total_relations += 1;

            if self.total_relations > MAX_RELATIONS {
                self.done = true;
                return;
            }

            let category = HIRAGANA_CONTEXT.get(last * HIRAGANA_COUNT + order);
            self.relations[category as usize] += 1;
        }

        self.last_order = order;
    }

    /// Whether enough kana pairs were seen to trust the confidence.
    pub fn got_enough_data(&self) -> bool {
        self.total_relations > ENOUGH_RELATIONS
    }

    /// Share of pairs outside the "never" category, or -1 with too few pairs.
    pub fn confidence(&self) -> f32 {
        if self.total_relations > MINIMUM_RELATIONS {
            (self.total_relations - self.relations[0]) as f32 / self.total_relations as f32
        } else {
            DONT_KNOW
        }
    }

    pub fn reset(&mut self) {
        self.relations = [0; CATEGORY_COUNT];
        self.total_relations = 0;
        self.last_order = None;
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shift-JIS "の" and "は", a common pair.
    const NO: [u8; 2] = [0x82, 0xCC];
    const HA: [u8; 2] = [0x82, 0xCD];
    // Shift-JIS "か" followed by a small "ゃ", which never occurs.
    const KA: [u8; 2] = [0x82, 0xA9];
    const SMALL_YA: [u8; 2] = [0x82, 0xE1];

    #[test]
    fn pairs_need_two_hiragana() {
        let mut analyzer = ContextAnalyzer::new(KanaLayout::ShiftJis);
        analyzer.feed(NO, 2);
        analyzer.feed([0x88, 0x9F], 2); // kanji
        analyzer.feed(HA, 2);
        assert_eq!(analyzer.total_relations, 0);
        assert_eq!(analyzer.confidence(), DONT_KNOW);
    }

    #[test]
    fn impossible_pairs_lower_confidence() {
        let mut analyzer = ContextAnalyzer::new(KanaLayout::ShiftJis);
        for _ in 0..5 {
            analyzer.feed(NO, 2);
            analyzer.feed(HA, 2);
        }
        let likely = analyzer.confidence();
        assert_eq!(likely, 1.0);

        for _ in 0..5 {
            analyzer.feed(KA, 2);
            analyzer.feed(SMALL_YA, 2);
        }
        assert!(analyzer.confidence() < likely);

        analyzer.reset();
        assert_eq!(analyzer.confidence(), DONT_KNOW);
    }

    #[test]
    fn counting_stops_after_limit() {
        let mut analyzer = ContextAnalyzer::new(KanaLayout::EucJp);
        for _ in 0..=MAX_RELATIONS + 10 {
            analyzer.feed([0xA4, 0xCE], 2);
        }
        assert!(analyzer.got_enough_data());
        assert_eq!(analyzer.total_relations, MAX_RELATIONS + 1);
    }
}
