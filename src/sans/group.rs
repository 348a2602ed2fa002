//! Groups of probers run in lock-step over one filtered stream.

use tinyvec::ArrayVec;
use tracing::trace;

use crate::{charset::Charset, language::LanguageFilter};

use super::{
    filter::{HighByteFilter, LettersFilter},
    hebrew::HebrewProber,
    language_models as lm,
    multi_byte::MultiByteProber,
    prober::{CharsetProber, ProbingState},
    single_byte::SingleByteProber,
};

const SURE_YES: f32 = 0.99;
const SURE_NO: f32 = 0.01;

/// A fixed set of member probers and the indices still in the running.
#[derive(Debug, Clone)]
pub struct Roster<P, const N: usize> {
    members: [P; N],
    enabled: ArrayVec<[u8; 16]>,
    active: ArrayVec<[u8; 16]>,
    state: ProbingState,
    found: Option<u8>,
}

impl<P: CharsetProber, const N: usize> Roster<P, N> {
    /// Build a roster running the members for which `enabled` holds.
    pub fn new(members: [P; N], enabled: impl Fn(usize) -> bool) -> Self {
        const { assert!(N <= 16, "too many members for roster") };

        let enabled = (0..N).filter(|&i| enabled(i)).map(|i| i as u8).collect();

        let mut roster = Self {
            members,
            enabled,
            active: ArrayVec::new(),
            state: ProbingState::Detecting,
            found: None,
        };

        roster.reset();
        roster
    }

    /// Every member, including those disabled or rejected.
    pub fn members(&self) -> &[P; N] {
        &self.members
    }

    /// `FoundIt` once a member has found its charset, `NotMe` once every member
    /// has been rejected.
    pub fn state(&self) -> ProbingState {
        self.state
    }

    /// Feed one byte to every active member.
    pub fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.state.is_final() {
            return self.state;
        }

        let mut i = 0;
        while i < self.active.len() {
            let index = self.active[i];

            match self.members[index as usize].feed_byte(byte) {
                ProbingState::FoundIt => {
                    self.found = Some(index);
                    self.state = ProbingState::FoundIt;
                    break;
                }
                ProbingState::NotMe => {
                    trace!(member = index, "roster member rejected");
                    self.active.remove(i);

                    if self.active.is_empty() {
                        self.state = ProbingState::NotMe;
                        break;
                    }
                }
                ProbingState::Detecting => i += 1,
            }
        }

        self.state
    }

    /// Index of the leading member: the one that confirmed, or else the
    /// first active member with the highest confidence above zero.
    pub fn best(&self) -> Option<usize> {
        if let Some(index) = self.found {
            return Some(index as usize);
        }

        let mut best = None;
        let mut best_confidence = 0.0;

        for &index in &self.active {
            let confidence = self.members[index as usize].confidence();
            if confidence > best_confidence {
                best = Some(index as usize);
                best_confidence = confidence;
            }
        }

        best
    }

    /// Confidence of the [`best`](Self::best) member while undecided.
    pub fn confidence(&self) -> f32 {
        match self.state {
            ProbingState::FoundIt => SURE_YES,
            ProbingState::NotMe => SURE_NO,
            ProbingState::Detecting => self
                .best()
                .map_or(0.0, |index| self.members[index].confidence()),
        }
    }

    /// Reset every member and reactivate the enabled ones.
    pub fn reset(&mut self) {
        for member in &mut self.members {
            member.reset();
        }

        self.active = self.enabled;
        self.state = if self.active.is_empty() {
            ProbingState::NotMe
        } else {
            ProbingState::Detecting
        };
        self.found = None;
    }
}

const UTF_8: usize = 0;
const SHIFT_JIS: usize = 1;
const EUC_JP: usize = 2;
const GB18030: usize = 3;
const EUC_KR: usize = 4;
const BIG5: usize = 5;
const EUC_TW: usize = 6;

/// The multi-byte encodings, behind a [`HighByteFilter`].
#[derive(Debug, Clone)]
pub struct MultiByteGroup {
    filter: HighByteFilter,
    roster: Roster<MultiByteProber, 7>,
}

impl MultiByteGroup {
    /// UTF-8 always runs. The CJK members follow `filter`.
    pub fn new(filter: LanguageFilter) -> Self {
        let members = [
            MultiByteProber::utf_8(),
            MultiByteProber::shift_jis(),
            MultiByteProber::euc_jp(),
            MultiByteProber::gb18030(),
            MultiByteProber::euc_kr(),
            MultiByteProber::big5(),
            MultiByteProber::euc_tw(),
        ];

        let enabled = |i: usize| match i {
            UTF_8 => true,
            SHIFT_JIS | EUC_JP => filter.japanese(),
            GB18030 => filter.chinese_simplified(),
            EUC_KR => filter.korean(),
            BIG5 | EUC_TW => filter.chinese_traditional(),
            _ => false,
        };

        Self {
            filter: HighByteFilter::new(),
            roster: Roster::new(members, enabled),
        }
    }

    pub fn roster(&self) -> &Roster<MultiByteProber, 7> {
        &self.roster
    }
}

impl CharsetProber for MultiByteGroup {
    fn charset(&self) -> Option<Charset> {
        let index = self.roster.best()?;
        self.roster.members()[index].charset()
    }

    fn state(&self) -> ProbingState {
        self.roster.state()
    }

    fn confidence(&self) -> f32 {
        self.roster.confidence()
    }

    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.roster.state().is_final() {
            return self.roster.state();
        }

        for b in self.filter.filter(byte) {
            if self.roster.feed_byte(b).is_final() {
                break;
            }
        }

        self.roster.state()
    }

    fn reset(&mut self) {
        self.filter.reset();
        self.roster.reset();
    }
}

const HEBREW_LOGICAL: usize = 10;
const HEBREW_VISUAL: usize = 11;

/// The single-byte scripts, behind a [`LettersFilter`].
#[derive(Debug, Clone)]
pub struct SingleByteGroup {
    filter: LettersFilter,
    roster: Roster<SingleByteProber, 12>,
    hebrew: HebrewProber,
}

impl SingleByteGroup {
    /// Create a group with every single-byte model.
    pub fn new() -> Self {
        let members = [
            SingleByteProber::new(&lm::WINDOWS_1251_RUSSIAN),
            SingleByteProber::new(&lm::KOI8_R_RUSSIAN),
            SingleByteProber::new(&lm::ISO_8859_5_RUSSIAN),
            SingleByteProber::new(&lm::MAC_CYRILLIC_RUSSIAN),
            SingleByteProber::new(&lm::IBM866_RUSSIAN),
            SingleByteProber::new(&lm::IBM855_RUSSIAN),
            SingleByteProber::new(&lm::ISO_8859_7_GREEK),
            SingleByteProber::new(&lm::WINDOWS_1253_GREEK),
            SingleByteProber::new(&lm::ISO_8859_5_BULGARIAN),
            SingleByteProber::new(&lm::WINDOWS_1251_BULGARIAN),
            SingleByteProber::new(&lm::WINDOWS_1255_HEBREW),
            SingleByteProber::reversed(&lm::WINDOWS_1255_HEBREW, Charset::Iso8859_8),
        ];

        Self {
            filter: LettersFilter::new(),
            roster: Roster::new(members, |_| true),
            hebrew: HebrewProber::new(),
        }
    }

    pub fn roster(&self) -> &Roster<SingleByteProber, 12> {
        &self.roster
    }

    fn hebrew_pair(&self) -> (&SingleByteProber, &SingleByteProber) {
        let members = self.roster.members();
        (&members[HEBREW_LOGICAL], &members[HEBREW_VISUAL])
    }
}

impl Default for SingleByteGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetProber for SingleByteGroup {
    fn charset(&self) -> Option<Charset> {
        match self.roster.best()? {
            HEBREW_LOGICAL | HEBREW_VISUAL => {
                let (logical, visual) = self.hebrew_pair();
                Some(self.hebrew.charset(logical, visual))
            }
            index => self.roster.members()[index].charset(),
        }
    }

    fn state(&self) -> ProbingState {
        self.roster.state()
    }

    fn confidence(&self) -> f32 {
        self.roster.confidence()
    }

    fn feed_byte(&mut self, byte: u8) -> ProbingState {
        if self.roster.state().is_final() {
            return self.roster.state();
        }

        for b in self.filter.filter(byte) {
            let (logical, visual) = self.hebrew_pair();
            if !logical.state().is_final() || !visual.state().is_final() {
                self.hebrew.feed_byte(b);
            }

            if self.roster.feed_byte(b).is_final() {
                break;
            }
        }

        self.roster.state()
    }

    fn reset(&mut self) {
        self.filter.reset();
        self.roster.reset();
        self.hebrew.reset();
    }
}
