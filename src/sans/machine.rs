//! Byte-driven automata validating the unit grammar of an encoding.

use crate::charset::Charset;

use super::packed::{ClassTable, NibbleTable};

/// The state every machine begins in, and returns to after a complete unit.
pub const START: u8 = 0;
/// No continuation of the encoding can produce the bytes seen.
pub const ERROR: u8 = 1;
/// The bytes seen confirm the encoding.
pub const ITS_ME: u8 = 2;

/// Static data describing the grammar of one encoding.
#[derive(Debug)]
pub struct StateMachineModel {
    classes: ClassTable,
    class_count: usize,
    transitions: NibbleTable<16>,
    char_lengths: &'static [u8],
    charset: Charset,
}

impl StateMachineModel {
    /// Assemble a model, checking that every byte class and every transition
    /// stays within the model's own space.
    ///
    /// `transitions` is laid out row by row, one row of `class_count` next
    /// states per state.
    pub const fn new(
        classes: ClassTable,
        class_count: usize,
        transitions: &[u8],
        char_lengths: &'static [u8],
        charset: Charset,
    ) -> Self {
        assert!(class_count > 0 && class_count <= 16);
        assert!(char_lengths.len() == class_count, "one length per class");
        assert!(transitions.len() % class_count == 0, "incomplete state row");

        let state_count = transitions.len() / class_count;
        assert!(state_count > ITS_ME as usize, "missing sentinel states");

        let mut i = 0;
        while i < transitions.len() {
            assert!((transitions[i] as usize) < state_count, "transition out of range");
            i += 1;
        }

        let mut b = 0;
        while b < 256 {
            assert!((classes.class_of(b as u8) as usize) < class_count, "class out of range");
            b += 1;
        }

        Self {
            classes,
            class_count,
            transitions: NibbleTable::from_nibbles(transitions),
            char_lengths,
            charset,
        }
    }

    pub const fn charset(&self) -> Charset {
        self.charset
    }
}

/// The outcome of advancing a machine by one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// A complete, valid unit just ended.
    Start,
    /// The bytes seen are not valid in this encoding.
    Error,
    /// The bytes seen can only be this encoding.
    ItsMe,
    /// Within a unit, in a numbered intermediate state.
    Partial(u8),
}

impl From<u8> for MachineState {
    fn from(state: u8) -> Self {
        match state {
            START => Self::Start,
            ERROR => Self::Error,
            ITS_ME => Self::ItsMe,
            n => Self::Partial(n),
        }
    }
}

/// A deterministic automaton driven by one [`StateMachineModel`].
#[derive(Debug, Clone)]
pub struct CodingStateMachine {
    model: &'static StateMachineModel,
    state: u8,
    char_len: u8,
}

impl CodingStateMachine {
    /// Start a runner for `model` in its start state.
    pub const fn new(model: &'static StateMachineModel) -> Self {
        Self {
            model,
            state: START,
            char_len: 0,
        }
    }

    /// Advance by one byte.
    #[inline]
    pub fn next_state(&mut self, byte: u8) -> MachineState {
        let class = self.model.classes.class_of(byte) as usize;

        if self.state == START {
            self.char_len = self.model.char_lengths[class];
        }

        self.state = self
            .model
            .transitions
            .get(self.state as usize * self.model.class_count + class);

        MachineState::from(self.state)
    }

    /// Length in bytes of the unit most recently begun from [`START`].
    pub fn current_char_len(&self) -> u8 {
        self.char_len
    }

    pub fn charset(&self) -> Charset {
        self.model.charset
    }

    pub fn reset(&mut self) {
        self.state = START;
        self.char_len = 0;
    }
}
