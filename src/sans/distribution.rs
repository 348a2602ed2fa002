//! Character distribution analysis for the CJK multi-byte families.
//!
//! Text in a given language draws most of its characters from a small, stable
//! set. Counting how many two-byte units fall among a family's most frequent
//! characters separates real text from bytes merely valid in the encoding.

use super::frequency;

/// Units ranked below this are counted as frequent.
const FREQUENT_CUTOFF: u16 = 512;
/// Rank of a character absent from the frequent lists.
const UNRANKED: u16 = u16::MAX;

const ENOUGH_DATA_THRESHOLD: u64 = 1024;
const SURE_YES: f32 = 0.99;
const SURE_NO: f32 = 0.01;
const MINIMUM_DATA_THRESHOLD: u64 = 3;

/// Invert a list of frequent orders into a rank per order.
const fn invert<const SIZE: usize>(orders: &[u16]) -> [u16; SIZE] {
    let mut ranks = [UNRANKED; SIZE];

    let mut rank = 0;
    while rank < orders.len() {
        let order = orders[rank] as usize;
        assert!(order < SIZE, "order outside of table");
        assert!(ranks[order] == UNRANKED, "order listed twice");
        ranks[order] = rank as u16;
        rank += 1;
    }

    ranks
}

static GB2312_RANKS: [u16; 94 * 72] = invert(&frequency::GB2312_FREQUENT);
static BIG5_RANKS: [u16; 157 * 86] = invert(&frequency::BIG5_FREQUENT);
static EUC_TW_RANKS: [u16; 94 * 58] = invert(&frequency::EUC_TW_FREQUENT);
static EUC_KR_RANKS: [u16; 94 * 25] = invert(&frequency::EUC_KR_FREQUENT);
static JIS_RANKS: [u16; 94 * 94] = invert(&frequency::JIS_FREQUENT);

/// A multi-byte family with a character frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// GB 2312 characters, as found in GB18030 text.
    Gb2312,
    Big5,
    EucTw,
    EucKr,
    EucJp,
    ShiftJis,
}

impl Family {
    /// Order of a two-byte unit within the family's table, if it has one.
    pub fn order(self, [lead, trail]: [u8; 2]) -> Option<usize> {
        let (lead, trail) = (lead as usize, trail as usize);

        match self {
            Self::Gb2312 if lead >= 0xB0 && trail >= 0xA1 => Some(94 * (lead - 0xB0) + trail - 0xA1),
            Self::Big5 if lead >= 0xA4 && trail >= 0xA1 => {
                Some(157 * (lead - 0xA4) + trail - 0xA1 + 63)
            }
            Self::Big5 if lead >= 0xA4 && trail >= 0x40 => Some(157 * (lead - 0xA4) + trail - 0x40),
            Self::EucTw if lead >= 0xC4 && trail >= 0xA1 => Some(94 * (lead - 0xC4) + trail - 0xA1),
            Self::EucKr if lead >= 0xB0 && trail >= 0xA1 => Some(94 * (lead - 0xB0) + trail - 0xA1),
            Self::EucJp if lead >= 0xA1 && trail >= 0xA1 => Some(94 * (lead - 0xA1) + trail - 0xA1),
            Self::ShiftJis => {
                let row = match lead {
                    0x81..=0x9F => (lead - 0x81) * 2,
                    0xE0..=0xEF => (lead - 0xC1) * 2,
                    _ => return None,
                };

                match trail {
                    0x9F..=0xFC => Some(94 * (row + 1) + trail - 0x9F),
                    0x40..=0x7E => Some(94 * row + trail - 0x40),
                    0x80..=0x9E => Some(94 * row + trail - 0x41),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn ranks(self) -> &'static [u16] {
        match self {
            Self::Gb2312 => &GB2312_RANKS,
            Self::Big5 => &BIG5_RANKS,
            Self::EucTw => &EUC_TW_RANKS,
            Self::EucKr => &EUC_KR_RANKS,
            Self::EucJp | Self::ShiftJis => &JIS_RANKS,
        }
    }

    /// Ratio of frequent to infrequent characters in typical text.
    pub fn typical_ratio(self) -> f32 {
        match self {
            Self::Gb2312 => 0.9,
            Self::Big5 | Self::EucTw => 0.75,
            Self::EucKr => 6.0,
            Self::EucJp | Self::ShiftJis => 3.0,
        }
    }
}

/// Accumulates how many units of a family are among its frequent characters.
#[derive(Debug, Clone)]
pub struct DistributionAnalyzer {
    family: Family,
    total_chars: u64,
    frequent_chars: u64,
}

impl DistributionAnalyzer {
    pub const fn new(family: Family) -> Self {
        Self {
            family,
            total_chars: 0,
            frequent_chars: 0,
        }
    }

    /// Count a completed unit of `char_len` bytes ending in `unit`.
    ///
    /// Only two-byte units carry frequency information; others are ignored.
    pub fn feed(&mut self, unit: [u8; 2], char_len: u8) {
        if char_len != 2 {
            return;
        }

        let Some(order) = self.family.order(unit) else {
            return;
        };

        self.total_chars += 1;

        if let Some(&rank) = self.family.ranks().get(order) {
            if rank < FREQUENT_CUTOFF {
                self.frequent_chars += 1;
            }
        }
    }

    /// Likelihood that the units seen so far are text of the family.
    pub fn confidence(&self) -> f32 {
        if self.total_chars == 0 || self.frequent_chars <= MINIMUM_DATA_THRESHOLD {
            return SURE_NO;
        }

        if self.total_chars != self.frequent_chars {
            let infrequent = (self.total_chars - self.frequent_chars) as f32;
            let r = self.frequent_chars as f32 / (infrequent * self.family.typical_ratio());

            if r < SURE_YES {
                return r;
            }
        }

        SURE_YES
    }

    /// Whether enough units were seen to trust [`confidence`](Self::confidence).
    pub fn got_enough_data(&self) -> bool {
        self.total_chars > ENOUGH_DATA_THRESHOLD
    }

    pub fn reset(&mut self) {
        self.total_chars = 0;
        self.frequent_chars = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_follow_table_layout() {
        assert_eq!(Family::Gb2312.order([0xB0, 0xA1]), Some(0));
        assert_eq!(Family::Gb2312.order([0xA3, 0xAC]), None);
        assert_eq!(Family::Big5.order([0xA4, 0x40]), Some(0));
        assert_eq!(Family::Big5.order([0xA4, 0xA1]), Some(63));
        assert_eq!(Family::EucTw.order([0xC4, 0xA1]), Some(0));
        assert_eq!(Family::EucTw.order([0xC5, 0xA2]), Some(95));
        assert_eq!(Family::EucTw.order([0xA4, 0xA1]), None);
        assert_eq!(Family::EucKr.order([0xB1, 0xA1]), Some(94));
        assert_eq!(Family::EucJp.order([0xA4, 0xA2]), Some(94 * 3 + 1));

        // Shift-JIS rows pair up; a trail of 9F or above selects the odd row.
        assert_eq!(Family::ShiftJis.order([0x81, 0x40]), Some(0));
        assert_eq!(Family::ShiftJis.order([0x81, 0x80]), Some(63));
        assert_eq!(Family::ShiftJis.order([0x81, 0x9F]), Some(94));
        assert_eq!(Family::ShiftJis.order([0x82, 0xA0]), Some(94 * 3 + 1));
        assert_eq!(Family::ShiftJis.order([0x81, 0x7F]), None);
        assert_eq!(Family::ShiftJis.order([0xA0, 0x40]), None);
    }

    #[test]
    fn shift_jis_and_euc_jp_agree() {
        // "の" is 82 CC in Shift-JIS and A4 CE in EUC-JP.
        assert_eq!(
            Family::ShiftJis.order([0x82, 0xCC]),
            Family::EucJp.order([0xA4, 0xCE])
        );
    }

    #[test]
    fn big5_and_euc_tw_agree() {
        // "的" is AA BA in Big5 and CE FB in EUC-TW, "是" is AC 4F and D1 D2.
        for (rank, big5, euc_tw) in [
            (0, [0xAA, 0xBA], [0xCE, 0xFB]),
            (2, [0xAC, 0x4F], [0xD1, 0xD2]),
        ] {
            let order = Family::Big5.order(big5).unwrap();
            assert_eq!(Family::EucTw.order(euc_tw), Some(order));
            assert_eq!(Family::Big5.ranks()[order], rank);
            assert_eq!(Family::EucTw.ranks()[order], rank);
        }
    }

    #[test]
    fn confidence_needs_frequent_characters() {
        let mut analyzer = DistributionAnalyzer::new(Family::EucKr);
        assert_eq!(analyzer.confidence(), SURE_NO);

        // Units outside the table are not counted at all.
        analyzer.feed([0xA1, 0xA1], 2);
        assert_eq!(analyzer.total_chars, 0);

        // Single-byte units are ignored.
        analyzer.feed([0xB0, 0xA1], 1);
        assert_eq!(analyzer.total_chars, 0);

        let frequent = frequency::EUC_KR_FREQUENT[0] as usize;
        let unit = [0xB0 + (frequent / 94) as u8, 0xA1 + (frequent % 94) as u8];
        for _ in 0..10 {
            analyzer.feed(unit, 2);
        }
        assert_eq!(analyzer.confidence(), SURE_YES);
        assert!(!analyzer.got_enough_data());

        analyzer.reset();
        assert_eq!(analyzer.confidence(), SURE_NO);
    }

    #[test]
    fn counts_past_u32_range() {
        let mut analyzer = DistributionAnalyzer::new(Family::Gb2312);
        analyzer.total_chars = u32::MAX.into();
        analyzer.frequent_chars = u32::MAX.into();

        // "的" is B5 C4.
        analyzer.feed([0xB5, 0xC4], 2);
        assert_eq!(analyzer.total_chars, 1 << 32);
        assert_eq!(analyzer.frequent_chars, 1 << 32);
        assert_eq!(analyzer.confidence(), SURE_YES);
    }

    #[test]
    fn infrequent_characters_lower_confidence() {
        let mut analyzer = DistributionAnalyzer::new(Family::Gb2312);

        let frequent = frequency::GB2312_FREQUENT[0] as usize;
        let frequent = [0xB0 + (frequent / 94) as u8, 0xA1 + (frequent % 94) as u8];
        let rare = (0..GB2312_RANKS.len())
            .find(|&o| GB2312_RANKS[o] == UNRANKED)
            .unwrap();
        let rare = [0xB0 + (rare / 94) as u8, 0xA1 + (rare % 94) as u8];

        for _ in 0..20 {
            analyzer.feed(frequent, 2);
        }
        for _ in 0..20 {
            analyzer.feed(rare, 2);
        }

        // 20 / (20 * 0.9) exceeds the cap.
        assert_eq!(analyzer.confidence(), SURE_YES);

        for _ in 0..40 {
            analyzer.feed(rare, 2);
        }
        assert_eq!(analyzer.confidence(), 20.0 / (60.0 * 0.9_f32));
    }
}
