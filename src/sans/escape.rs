//! Prober for the escape-based encodings.

use tinyvec::ArrayVec;
use tracing::trace;

use crate::{charset::Charset, language::LanguageFilter};

use super::{
    machine::{CodingStateMachine, MachineState},
    models,
    prober::{CharsetProber, ProbingState},
};

const SURE_YES: f32 = 0.99;
const SURE_NO: f32 = 0.01;

/// Runs the HZ-GB-2312 and ISO-2022 grammars side by side.
///
/// Escape grammars are unambiguous, so no statistics are kept: the first
/// machine to confirm its encoding decides.
#[derive(Debug, Clone)]
pub struct EscapeProber {
    machines: [CodingStateMachine; 4],
    enabled: ArrayVec<[u8; 4]>,
    active: ArrayVec<[u8; 4]>,
    state: ProbingState,
    detected: Option<Charset>,
}

impl EscapeProber {
    /// Create a prober for the escape-based charsets `filter` allows.
    pub fn new(filter: LanguageFilter) -> Self {
        let machines = [
            CodingStateMachine::new(&models::HZ_GB_2312),
            CodingStateMachine::new(&models::ISO_2022_CN),
            CodingStateMachine::new(&models::ISO_2022_JP),
            CodingStateMachine::new(&models::ISO_2022_KR),
        ];

        let enabled = [
            filter.chinese_simplified(),
            filter.chinese(),
            filter.japanese(),
            filter.korean(),
        ];

        let mut prober = Self {
            machines,
            enabled: (0..4).filter(|&i| enabled[i as usize]).collect(),
            active: ArrayVec::new(),
            state: ProbingState::Detecting,
            detected: None,
        };

        prober.reset();
        prober
    }
}

impl CharsetProber for EscapeProber {
    fn charset(&self) -> Option<Charset> {
        self.detected
    }

    fn state(&self) -> ProbingState {
        self.state
    }

    fn confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => SURE_YES,
            ProbingState::NotMe => SURE_NO,
            ProbingState::Detecting => 0.0,
        }
    }

    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state.is_final() {
            return self.state;
        }

        let mut i = 0;
        while i < self.active.len() {
            let machine = &mut self.machines[self.active[i] as usize];

            match machine.next_state(byte) {
                MachineState::Error => {
                    trace!(charset = %machine.charset(), "escape grammar rejected");
                    self.active.remove(i);

                    if self.active.is_empty() {
                        self.state = ProbingState::NotMe;
                        break;
                    }
                }
                MachineState::ItsMe => {
                    self.detected = Some(machine.charset());
                    self.state = ProbingState::FoundIt;
                    break;
                }
                _ => i += 1,
            }
        }

        self.state
    }

    fn reset(&mut self) {
        for machine in &mut self.machines {
            machine.reset();
        }

        self.active = self.enabled;
        self.state = if self.active.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
        self.detected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(filter: LanguageFilter, bytes: &[u8]) -> (ProbingState, Option<Charset>) {
        let mut prober = EscapeProber::new(filter);
        (prober.feed(bytes), prober.charset())
    }

    #[test]
    fn designations_confirm() {
        let all = LanguageFilter::ALL;
        assert_eq!(
            detect(all, b"\x1b$B$3$s$K$A$O\x1b(B"),
            (ProbingState::FoundIt, Some(Charset::Iso2022Jp))
        );
        assert_eq!(
            detect(all, b"\x1b$)C\x0e\x47\x51\x0f"),
            (ProbingState::FoundIt, Some(Charset::Iso2022Kr))
        );
        assert_eq!(
            detect(all, b"\x1b$)A\x0e\x3d\x3b\x0f"),
            (ProbingState::FoundIt, Some(Charset::Iso2022Cn))
        );
        assert_eq!(
            detect(all, b"~{<:Ky2;~}"),
            (ProbingState::FoundIt, Some(Charset::HzGb2312))
        );
    }

    #[test]
    fn unknown_escapes_are_rejected() {
        assert_eq!(
            detect(LanguageFilter::ALL, b"\x1b[1;31mred\x1b[0m"),
            (ProbingState::NotMe, None)
        );
    }

    #[test]
    fn filter_disables_grammars() {
        assert_eq!(
            detect(LanguageFilter::KOREAN, b"\x1b$B"),
            (ProbingState::NotMe, None)
        );
        assert_eq!(
            detect(LanguageFilter::NON_CJK, b"anything"),
            (ProbingState::NotMe, None)
        );
    }

    #[test]
    fn reset_restores_enabled_machines() {
        let mut prober = EscapeProber::new(LanguageFilter::JAPANESE);
        assert_eq!(prober.feed(b"\x1b[0m"), ProbingState::NotMe);
        prober.reset();
        assert_eq!(prober.feed(b"\x1b(J"), ProbingState::FoundIt);
        assert_eq!(prober.confidence(), SURE_YES);
    }
}
