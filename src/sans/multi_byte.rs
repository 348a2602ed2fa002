//! Probers for the multi-byte encodings.

use crate::charset::Charset;

use super::{
    context::{ContextAnalyzer, KanaLayout},
    distribution::{DistributionAnalyzer, Family},
    machine::{CodingStateMachine, MachineState, StateMachineModel},
    models,
    prober::{CharsetProber, ProbingState, SHORTCUT_THRESHOLD},
};

/// Multi-byte units after which UTF-8 is as certain as it gets.
const UTF_8_UNIT_LIMIT: u32 = 6;

/// Statistics gathered over the units a machine accepts.
#[derive(Debug, Clone)]
enum Analysis {
    /// Valid multi-byte UTF-8 is improbable by accident, so counting units is
    /// enough.
    Utf8 { multi_byte_units: u32 },
    Distribution(DistributionAnalyzer),
    Japanese(DistributionAnalyzer, ContextAnalyzer),
}

impl Analysis {
    fn feed(&mut self, unit: [u8; 2], char_len: u8) {
        match self {
            Self::Utf8 { multi_byte_units } => {
                if char_len >= 2 {
                    *multi_byte_units += 1;
                }
            }
            Self::Distribution(distribution) => distribution.feed(unit, char_len),
            Self::Japanese(distribution, context) => {
                context.feed(unit, char_len);
                distribution.feed(unit, char_len);
            }
        }
    }

    /// Whether enough units have been seen to trust the confidence mid-stream.
    ///
    /// UTF-8 is checked after every unit.
    fn got_enough_data(&self) -> bool {
        match self {
            Self::Utf8 { .. } => true,
            Self::Distribution(distribution) => distribution.got_enough_data(),
            Self::Japanese(_, context) => context.got_enough_data(),
        }
    }

    fn confidence(&self) -> f32 {
        match self {
            Self::Utf8 { multi_byte_units } => {
                let units = (*multi_byte_units).min(UTF_8_UNIT_LIMIT);
                1.0 - 1.0 / (1u32 << units) as f32
            }
            Self::Distribution(distribution) => distribution.confidence(),
            Self::Japanese(distribution, context) => {
                context.confidence().max(distribution.confidence())
            }
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Utf8 { multi_byte_units } => *multi_byte_units = 0,
            Self::Distribution(distribution) => distribution.reset(),
            Self::Japanese(distribution, context) => {
                distribution.reset();
                context.reset();
            }
        }
    }
}

/// Validates input against one multi-byte grammar, and scores the units it
/// accepts.
#[derive(Debug, Clone)]
pub struct MultiByteProber {
    machine: CodingStateMachine,
    analysis: Analysis,
    state: ProbingState,
    last_byte: u8,
}

impl MultiByteProber {
    fn new(model: &'static StateMachineModel, analysis: Analysis) -> Self {
        Self {
            machine: CodingStateMachine::new(model),
            analysis,
            state: ProbingState::Detecting,
            last_byte: 0,
        }
    }

    pub fn utf_8() -> Self {
        Self::new(&models::UTF_8, Analysis::Utf8 { multi_byte_units: 0 })
    }

    pub fn shift_jis() -> Self {
        Self::new(
            &models::SHIFT_JIS,
            Analysis::Japanese(
                DistributionAnalyzer::new(Family::ShiftJis),
                ContextAnalyzer::new(KanaLayout::ShiftJis),
            ),
        )
    }

    pub fn euc_jp() -> Self {
        Self::new(
            &models::EUC_JP,
            Analysis::Japanese(
                DistributionAnalyzer::new(Family::EucJp),
                ContextAnalyzer::new(KanaLayout::EucJp),
            ),
        )
    }

    pub fn gb18030() -> Self {
        let analyzer = DistributionAnalyzer::new(Family::Gb2312);
        Self::new(&models::GB18030, Analysis::Distribution(analyzer))
    }

    pub fn euc_kr() -> Self {
        let analyzer = DistributionAnalyzer::new(Family::EucKr);
        Self::new(&models::EUC_KR, Analysis::Distribution(analyzer))
    }

    pub fn big5() -> Self {
        let analyzer = DistributionAnalyzer::new(Family::Big5);
        Self::new(&models::BIG5, Analysis::Distribution(analyzer))
    }

    pub fn euc_tw() -> Self {
        let analyzer = DistributionAnalyzer::new(Family::EucTw);
        Self::new(&models::EUC_TW, Analysis::Distribution(analyzer))
    }
}

impl CharsetProber for MultiByteProber {
    fn charset(&self) -> Option<Charset> {
        Some(self.machine.charset())
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        self.analysis.confidence()
    }

    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state.is_final() {
            return self.state;
        }

        match self.machine.next_state(byte) {
            MachineState::Error => self.state = ProbingState::NotMe,
            MachineState::ItsMe => self.state = ProbingState::FoundIt,
            MachineState::Start => {
                let char_len = self.machine.current_char_len();
                self.analysis.feed([self.last_byte, byte], char_len);

                if self.analysis.got_enough_data() && self.confidence() > SHORTCUT_THRESHOLD {
                    self.state = ProbingState::FoundIt;
                }
            }
            MachineState::Partial(_) => {}
        }

        self.last_byte = byte;
        self.state
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.analysis.reset();
        self.state = ProbingState::Detecting;
        self.last_byte = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf_8_confidence_grows_per_unit() {
        let mut prober = MultiByteProber::utf_8();
        prober.feed(b"plain ascii");
        assert_eq!(prober.confidence(), 0.0);

        prober.feed("é".as_bytes());
        assert_eq!(prober.confidence(), 0.5);

        prober.feed("éé".as_bytes());
        assert_eq!(prober.confidence(), 0.875);
        assert_eq!(prober.state(), ProbingState::Detecting);

        // 1 - 0.5^4 is still below the shortcut, 1 - 0.5^5 is not.
        prober.feed("é".as_bytes());
        assert_eq!(prober.state(), ProbingState::Detecting);
        prober.feed("é".as_bytes());
        assert_eq!(prober.state(), ProbingState::FoundIt);
        assert_eq!(prober.confidence(), 1.0 - 1.0 / 32.0);
    }

    #[test]
    fn invalid_bytes_are_final() {
        let mut prober = MultiByteProber::utf_8();
        assert_eq!(prober.feed(&[0xC3, 0x28]), ProbingState::NotMe);

        // Valid input afterwards changes nothing.
        assert_eq!(prober.feed("ééééééé".as_bytes()), ProbingState::NotMe);
        assert_eq!(prober.charset(), Some(Charset::Utf8));

        prober.reset();
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert_eq!(prober.confidence(), 0.0);
    }

    #[test]
    fn euc_kr_rejects_shift_jis_kana() {
        // "の" in Shift-JIS: 82 is not a valid EUC-KR lead.
        let mut prober = MultiByteProber::euc_kr();
        assert_eq!(prober.feed(&[0x82, 0xCC]), ProbingState::NotMe);
    }

    #[test]
    fn distribution_needs_enough_data_to_shortcut() {
        // A frequent GB2312 character, repeated below the data threshold.
        let mut prober = MultiByteProber::gb18030();
        for _ in 0..1000 {
            prober.feed(&[0xB5, 0xC4]); // 的
        }
        assert_eq!(prober.state(), ProbingState::Detecting);
        assert_eq!(prober.confidence(), 0.99);

        for _ in 0..100 {
            prober.feed(&[0xB5, 0xC4]);
        }
        assert_eq!(prober.state(), ProbingState::FoundIt);
    }
}
