//! Grammars of the multi-byte and escape-based encodings.
//!
//! Every model shares the sentinel states `S` (start), `E` (error) and `M`
//! (confirmed) as states 0 to 2. Rows of a transition table are listed in state
//! order, with one column per byte class.

use crate::charset::Charset;

use super::{
    machine::{ERROR as E, ITS_ME as M, START as S, StateMachineModel},
    packed::ClassTable,
};

/// UTF-8, rejecting overlong forms, surrogates and code points above U+10FFFF.
///
/// Classes: 0 illegal, 1 ASCII, 2 `80..=8F`, 3 `90..=9F`, 4 `A0..=BF`, 5 two-byte
/// lead, 6 `E0`, 7 other three-byte leads, 8 `ED`, 9 `F0`, 10 `F1..=F3`, 11 `F4`.
pub static UTF_8: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        0,
        &[
            (0x00, 0x7F, 1),
            (0x80, 0x8F, 2),
            (0x90, 0x9F, 3),
            (0xA0, 0xBF, 4),
            (0xC2, 0xDF, 5),
            (0xE0, 0xE0, 6),
            (0xE1, 0xEC, 7),
            (0xED, 0xED, 8),
            (0xEE, 0xEF, 7),
            (0xF0, 0xF0, 9),
            (0xF1, 0xF3, 10),
            (0xF4, 0xF4, 11),
        ],
    ),
    12,
    &[
        E, S, E, E, E, 3, 4, 6, 5, 7, 9, 8, // start
        E, E, E, E, E, E, E, E, E, E, E, E, // error
        M, M, M, M, M, M, M, M, M, M, M, M, // confirmed
        E, E, S, S, S, E, E, E, E, E, E, E, // one continuation left
        E, E, E, E, 3, E, E, E, E, E, E, E, // after E0
        E, E, 3, 3, E, E, E, E, E, E, E, E, // after ED
        E, E, 3, 3, 3, E, E, E, E, E, E, E, // two continuations left
        E, E, E, 6, 6, E, E, E, E, E, E, E, // after F0
        E, E, 6, E, E, E, E, E, E, E, E, E, // after F4
        E, E, 6, 6, 6, E, E, E, E, E, E, E, // three continuations left
    ],
    &[0, 1, 0, 0, 0, 2, 3, 3, 3, 4, 4, 4],
    Charset::Utf8,
);

/// Shift-JIS, including half-width katakana.
pub static SHIFT_JIS: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        1,
        &[
            (0x40, 0x7E, 4),
            (0x80, 0x80, 5),
            (0x81, 0x9F, 3),
            (0xA0, 0xA0, 5),
            (0xA1, 0xDF, 2),
            (0xE0, 0xFC, 3),
            (0xFD, 0xFF, 0),
        ],
    ),
    6,
    &[
        E, S, S, 3, S, E, //
        E, E, E, E, E, E, //
        M, M, M, M, M, M, //
        E, E, S, S, S, S, // after lead byte
    ],
    &[0, 1, 1, 2, 1, 0],
    Charset::ShiftJis,
);

/// EUC-JP, with `8E` half-width katakana and `8F` JIS X 0212 units.
pub static EUC_JP: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        1,
        &[
            (0x80, 0xFF, 0),
            (0x8E, 0x8E, 4),
            (0x8F, 0x8F, 5),
            (0xA1, 0xDF, 2),
            (0xE0, 0xFE, 3),
            (0xFF, 0xFF, 0),
        ],
    ),
    6,
    &[
        E, S, 3, 3, 4, 5, //
        E, E, E, E, E, E, //
        M, M, M, M, M, M, //
        E, E, S, S, E, E, // after lead byte
        E, E, S, E, E, E, // after 8E
        E, E, 3, 3, E, E, // after 8F
    ],
    &[0, 1, 2, 2, 2, 3],
    Charset::EucJp,
);

/// GB18030, with two- and four-byte units.
pub static GB18030: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        1,
        &[
            (0x30, 0x39, 2),
            (0x40, 0x7E, 3),
            (0x80, 0x80, 4),
            (0x81, 0xFE, 5),
            (0xFF, 0xFF, 0),
        ],
    ),
    6,
    &[
        E, S, S, S, E, 3, //
        E, E, E, E, E, E, //
        M, M, M, M, M, M, //
        E, E, 4, S, S, S, // after lead byte
        E, E, E, E, E, 5, // second byte a digit
        E, E, S, E, E, E, // third byte
    ],
    &[0, 1, 1, 1, 0, 2],
    Charset::Gb18030,
);

pub static EUC_KR: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(1, &[(0x80, 0xA0, 0), (0xA1, 0xFE, 2), (0xFF, 0xFF, 0)]),
    3,
    &[
        E, S, 3, //
        E, E, E, //
        M, M, M, //
        E, E, S, // after lead byte
    ],
    &[0, 1, 2],
    Charset::EucKr,
);

pub static BIG5: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        1,
        &[
            (0x40, 0x7E, 2),
            (0x80, 0x80, 0),
            (0x81, 0xA0, 4),
            (0xA1, 0xFE, 3),
            (0xFF, 0xFF, 0),
        ],
    ),
    5,
    &[
        E, S, S, 3, 3, //
        E, E, E, E, E, //
        M, M, M, M, M, //
        E, E, S, S, E, // after lead byte
    ],
    &[0, 1, 1, 2, 2],
    Charset::Big5,
);

/// EUC-TW, with `8E` four-byte units addressing CNS 11643 planes.
pub static EUC_TW: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        1,
        &[
            (0x80, 0xFF, 0),
            (0x8E, 0x8E, 4),
            (0xA1, 0xB0, 2),
            (0xB1, 0xFE, 3),
            (0xFF, 0xFF, 0),
        ],
    ),
    5,
    &[
        E, S, 3, 3, 4, //
        E, E, E, E, E, //
        M, M, M, M, M, //
        E, E, S, S, E, // after lead byte
        E, E, 5, E, E, // after 8E
        E, E, 3, 3, E, // after plane byte
    ],
    &[0, 1, 2, 2, 4],
    Charset::EucTw,
);

/// HZ-GB-2312: `~{` enters GB mode, `~}` leaves it, `~~` and `~\n` are escapes.
///
/// Classes: 0 other 7-bit, 1 illegal, 2 `~`, 3 `\n`, 4 `{`, 5 `}`.
pub static HZ_GB_2312: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        0,
        &[
            (0x00, 0x00, 1),
            (0x0A, 0x0A, 3),
            (0x1B, 0x1B, 1),
            (0x7B, 0x7B, 4),
            (0x7D, 0x7D, 5),
            (0x7E, 0x7E, 2),
            (0x80, 0xFF, 1),
        ],
    ),
    6,
    &[
        S, E, 3, S, S, S, // ASCII mode
        E, E, E, E, E, E, //
        M, M, M, M, M, M, //
        E, E, S, S, 4, E, // `~` in ASCII mode
        5, E, 6, 4, 5, 5, // GB mode, first byte
        4, E, 4, E, 4, 4, // GB mode, second byte
        E, E, E, E, E, M, // `~` in GB mode
    ],
    &[0; 6],
    Charset::HzGb2312,
);

/// ISO-2022-CN designations of GB 2312, ISO-IR-165 and CNS 11643 planes.
///
/// Classes: 0 other, 1 ESC, 2 `$`, 3 `)`, 4 `*`, 5 `+`, 6 `A` or `G`, 7 `H`,
/// 8 `I..=M`, 9 illegal.
pub static ISO_2022_CN: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        0,
        &[
            (0x1B, 0x1B, 1),
            (0x24, 0x24, 2),
            (0x29, 0x29, 3),
            (0x2A, 0x2A, 4),
            (0x2B, 0x2B, 5),
            (0x41, 0x41, 6),
            (0x47, 0x47, 6),
            (0x48, 0x48, 7),
            (0x49, 0x4D, 8),
            (0x80, 0xFF, 9),
        ],
    ),
    10,
    &[
        S, 3, S, S, S, S, S, S, S, E, //
        E, E, E, E, E, E, E, E, E, E, //
        M, M, M, M, M, M, M, M, M, M, //
        E, E, 4, E, E, E, E, E, E, E, // ESC
        E, E, E, 5, 6, 7, E, E, E, E, // ESC $
        E, E, E, E, E, E, M, E, E, E, // ESC $ )
        E, E, E, E, E, E, E, M, E, E, // ESC $ *
        E, E, E, E, E, E, E, E, M, E, // ESC $ +
    ],
    &[0; 10],
    Charset::Iso2022Cn,
);

/// ISO-2022-JP designations of JIS X 0201, JIS X 0208 and JIS X 0212.
///
/// Classes: 0 other, 1 ESC, 2 `(`, 3 `$`, 4 `&`, 5 `@`, 6 `B`, 7 `J` or `I`,
/// 8 `D`, 9 illegal.
pub static ISO_2022_JP: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        0,
        &[
            (0x0E, 0x0F, 9),
            (0x1B, 0x1B, 1),
            (0x24, 0x24, 3),
            (0x26, 0x26, 4),
            (0x28, 0x28, 2),
            (0x40, 0x40, 5),
            (0x42, 0x42, 6),
            (0x44, 0x44, 8),
            (0x49, 0x4A, 7),
            (0x80, 0xFF, 9),
        ],
    ),
    10,
    &[
        S, 3, S, S, S, S, S, S, S, E, //
        E, E, E, E, E, E, E, E, E, E, //
        M, M, M, M, M, M, M, M, M, M, //
        E, E, 4, 5, 6, E, E, E, E, E, // ESC
        E, E, E, E, E, E, M, M, E, E, // ESC (
        E, E, 7, E, E, M, M, E, E, E, // ESC $
        E, E, E, E, E, M, E, E, E, E, // ESC &
        E, E, E, E, E, E, E, E, M, E, // ESC $ (
    ],
    &[0; 10],
    Charset::Iso2022Jp,
);

/// ISO-2022-KR, confirmed by its `ESC $ ) C` announcer.
///
/// Classes: 0 other, 1 ESC, 2 `$`, 3 `)`, 4 `C`, 5 illegal.
pub static ISO_2022_KR: StateMachineModel = StateMachineModel::new(
    ClassTable::classes(
        0,
        &[
            (0x1B, 0x1B, 1),
            (0x24, 0x24, 2),
            (0x29, 0x29, 3),
            (0x43, 0x43, 4),
            (0x80, 0xFF, 5),
        ],
    ),
    6,
    &[
        S, 3, S, S, S, E, //
        E, E, E, E, E, E, //
        M, M, M, M, M, M, //
        E, E, 4, E, E, E, // ESC
        E, E, E, 5, E, E, // ESC $
        E, E, E, E, M, E, // ESC $ )
    ],
    &[0; 6],
    Charset::Iso2022Kr,
);
