//! The top-level detector.

use either::Either::{self, Left, Right};
use tinyvec::ArrayVec;
use tracing::{debug, trace};
use zerocopy::FromBytes;

use crate::{charset::Charset, language::LanguageFilter};

use super::{
    escape::EscapeProber,
    group::{MultiByteGroup, SingleByteGroup},
    latin1::Latin1Prober,
    prober::{CharsetProber, ProbingState},
};

/// Confidence a prober must exceed to be reported at the end of input.
pub const MINIMUM_THRESHOLD: f32 = 0.20;

const ESC: u8 = 0x1B;
/// No-break space in most single-byte encodings. Alone it is not enough to
/// leave pure ASCII.
const NBSP: u8 = 0xA0;
/// Stands in for bytes not yet seen. No byte order mark contains it.
const PAD: u8 = 0x01;

/// The outcome of detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// The most likely charset.
    pub charset: Charset,
    /// Between 0 and 1.
    pub confidence: f32,
}

impl Detection {
    /// The charset's name, as used to select a decoder.
    pub fn name(&self) -> &'static str {
        self.charset.name()
    }
}

/// Classification of the input seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Only 7-bit bytes, with no escape sequence.
    PureAscii,
    /// 7-bit bytes including an escape sequence.
    EscAscii,
    /// At least one high byte. Final until reset.
    HighByte,
}

/// The probers run once a high byte is seen.
#[derive(Debug, Clone)]
struct HighByteProbers {
    multi_byte: MultiByteGroup,
    single_byte: Option<SingleByteGroup>,
    latin1: Option<Latin1Prober>,
}

impl HighByteProbers {
    fn new(filter: LanguageFilter) -> Self {
        let non_cjk = filter.non_cjk();

        Self {
            multi_byte: MultiByteGroup::new(filter),
            single_byte: non_cjk.then(SingleByteGroup::new),
            latin1: non_cjk.then(Latin1Prober::new),
        }
    }

    fn probers(&self) -> impl Iterator<Item = &dyn CharsetProber> {
        let single_byte = self.single_byte.as_ref().map(|p| p as &dyn CharsetProber);
        let latin1 = self.latin1.as_ref().map(|p| p as &dyn CharsetProber);

        core::iter::once(&self.multi_byte as &dyn CharsetProber)
            .chain(single_byte)
            .chain(latin1)
    }

    fn probers_mut(&mut self) -> impl Iterator<Item = &mut dyn CharsetProber> {
        let single_byte = self.single_byte.as_mut().map(|p| p as &mut dyn CharsetProber);
        let latin1 = self.latin1.as_mut().map(|p| p as &mut dyn CharsetProber);

        core::iter::once(&mut self.multi_byte as &mut dyn CharsetProber)
            .chain(single_byte)
            .chain(latin1)
    }

    /// Feed one byte to every prober, returning the first confirmation.
    fn feed_byte(&mut self, byte: u8) -> Option<Detection> {
        for prober in self.probers_mut() {
            if prober.feed_byte(byte) == ProbingState::FoundIt {
                return Some(Detection {
                    charset: prober.charset()?,
                    confidence: prober.confidence(),
                });
            }
        }

        None
    }

    /// The first prober with the highest confidence.
    fn best(&self) -> Option<Detection> {
        let mut best: Option<Detection> = None;

        for prober in self.probers() {
            let confidence = prober.confidence();
            let Some(charset) = prober.charset() else {
                continue;
            };

            trace!(%charset, confidence, "candidate");

            if best.is_none_or(|best| confidence > best.confidence) {
                best = Some(Detection {
                    charset,
                    confidence,
                });
            }
        }

        best
    }
}

/// Streaming charset detector.
///
/// Feed the input in order, in chunks of any size, then call
/// [`data_end`](Self::data_end) and read the [`detection`](Self::detection).
/// The result never depends on how the input was split.
///
/// ```
/// use telltale::{Charset, UniversalDetector};
///
/// let mut detector = UniversalDetector::default();
/// detector.feed("Größe".as_bytes());
/// detector.feed("ändern".as_bytes());
/// detector.data_end();
///
/// let detection = detector.detection().unwrap();
/// assert_eq!(detection.charset, Charset::Utf8);
/// ```
#[derive(Debug, Clone)]
pub struct UniversalDetector {
    filter: LanguageFilter,
    /// Leading bytes, held until the byte order mark check is settled.
    head: ArrayVec<[u8; 4]>,
    head_settled: bool,
    probers: Option<Either<EscapeProber, HighByteProbers>>,
    last_byte: u8,
    got_data: bool,
    ended: bool,
    detection: Option<Detection>,
}

impl UniversalDetector {
    /// Create a detector considering only the charsets of `filter`'s families.
    pub fn new(filter: LanguageFilter) -> Self {
        Self {
            filter,
            head: ArrayVec::new(),
            head_settled: false,
            probers: None,
            last_byte: 0,
            got_data: false,
            ended: false,
            detection: None,
        }
    }

    /// Consume the next chunk of input.
    ///
    /// Does nothing once a result is known or input has ended.
    pub fn feed(&mut self, bytes: &[u8]) {
        if self.is_done() || bytes.is_empty() {
            return;
        }

        self.got_data = true;

        for &byte in bytes {
            if self.detection.is_some() {
                break;
            }

            if self.head_settled {
                self.process(byte);
            } else {
                self.head.push(byte);
                if self.head.len() == self.head.capacity() || !may_grow_into_bom(&self.head) {
                    self.settle_head();
                }
            }
        }
    }

    /// Mark the end of input, and decide on a result.
    ///
    /// Only the first call has any effect.
    pub fn data_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if !self.got_data {
            debug!("no input");
            return;
        }

        if !self.head_settled {
            self.settle_head();
        }

        if self.detection.is_some() {
            return;
        }

        self.detection = match &self.probers {
            None => Some(Detection {
                charset: Charset::Ascii,
                confidence: 1.0,
            }),
            Some(Left(_)) => None,
            Some(Right(high)) => high
                .best()
                .filter(|best| best.confidence > MINIMUM_THRESHOLD),
        };

        match self.detection {
            Some(Detection {
                charset,
                confidence,
            }) => debug!(%charset, confidence, "input ended"),
            None => debug!("input ended without a result"),
        }
    }

    /// Restore the state the detector was constructed in.
    pub fn reset(&mut self) {
        *self = Self::new(self.filter);
    }

    /// The result, once known.
    pub fn detection(&self) -> Option<Detection> {
        self.detection
    }

    /// Whether further input would be ignored.
    pub fn is_done(&self) -> bool {
        self.ended || self.detection.is_some()
    }

    /// What kind of input has been seen so far.
    pub fn input_state(&self) -> InputState {
        match self.probers {
            None => InputState::PureAscii,
            Some(Left(_)) => InputState::EscAscii,
            Some(Right(_)) => InputState::HighByte,
        }
    }

    /// The families this detector was created with.
    pub fn language_filter(&self) -> LanguageFilter {
        self.filter
    }

    /// Check the held bytes for a byte order mark, replaying them as input
    /// if there is none.
    fn settle_head(&mut self) {
        self.head_settled = true;

        if let Some(charset) = byte_order_mark(&self.head) {
            debug!(%charset, "byte order mark");
            self.detection = Some(Detection {
                charset,
                confidence: 1.0,
            });
            return;
        }

        for byte in self.head {
            if self.detection.is_some() {
                break;
            }
            self.process(byte);
        }
    }

    fn process(&mut self, byte: u8) {
        if byte >= 0x80 && byte != NBSP {
            if !matches!(self.probers, Some(Right(_))) {
                debug!(from = ?self.input_state(), "high byte");
                self.probers = Some(Right(HighByteProbers::new(self.filter)));
            }
        } else {
            let hz_start = byte == b'{' && self.last_byte == b'~';

            if self.probers.is_none() && (byte == ESC || hz_start) {
                debug!("escape sequence");

                let mut escape = EscapeProber::new(self.filter);
                if hz_start {
                    escape.feed_byte(b'~');
                }
                self.probers = Some(Left(escape));
            }

            self.last_byte = byte;
        }

        let detection = match &mut self.probers {
            None => None,
            Some(Left(escape)) => match escape.feed_byte(byte) {
                ProbingState::FoundIt => escape.charset().map(|charset| Detection {
                    charset,
                    confidence: escape.confidence(),
                }),
                _ => None,
            },
            Some(Right(high)) => high.feed_byte(byte),
        };

        if let Some(Detection {
            charset,
            confidence,
        }) = detection
        {
            debug!(%charset, confidence, "confirmed before end of input");
            self.detection = detection;
        }
    }
}

impl Default for UniversalDetector {
    fn default() -> Self {
        Self::new(LanguageFilter::ALL)
    }
}

/// Whether more bytes could still complete a byte order mark that changes the
/// outcome.
fn may_grow_into_bom(head: &[u8]) -> bool {
    matches!(
        head,
        [0xEF]
            | [0xEF, 0xBB]
            | [0xFE]
            | [0xFE, 0xFF]
            | [0xFE, 0xFF, 0x00]
            | [0xFF]
            | [0xFF, 0xFE]
            | [0xFF, 0xFE, 0x00]
            | [0x00]
            | [0x00, 0x00]
            | [0x00, 0x00, 0xFE]
            | [0x00, 0x00, 0xFF]
    )
}

/// The charset signalled by a byte order mark at the start of `head`.
fn byte_order_mark(head: &[u8]) -> Option<Charset> {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct Prefix {
        mark: [u8; 2],
        rest: [u8; 2],
    }

    let mut bytes = [PAD; 4];
    let len = head.len().min(bytes.len());
    bytes[..len].copy_from_slice(&head[..len]);

    let Prefix { mark, rest } = zerocopy::transmute!(bytes);

    let charset = match (mark, rest) {
        ([0xEF, 0xBB], [0xBF, _]) => Charset::Utf8,
        ([0x00, 0x00], [0xFE, 0xFF]) => Charset::Utf32Be,
        ([0x00, 0x00], [0xFF, 0xFE]) => Charset::Ucs4_2143,
        ([0xFF, 0xFE], [0x00, 0x00]) => Charset::Utf32Le,
        ([0xFE, 0xFF], [0x00, 0x00]) => Charset::Ucs4_3412,
        ([0xFF, 0xFE], _) => Charset::Utf16Le,
        ([0xFE, 0xFF], _) => Charset::Utf16Be,
        _ => return None,
    };

    Some(charset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(chunks: &[&[u8]]) -> Option<Detection> {
        let mut detector = UniversalDetector::default();
        for chunk in chunks {
            detector.feed(chunk);
        }
        detector.data_end();
        detector.detection()
    }

    fn charset(chunks: &[&[u8]]) -> Option<Charset> {
        detect(chunks).map(|d| d.charset)
    }

    #[test]
    fn byte_order_marks() {
        let cases: [(&[u8], Charset); 7] = [
            (b"\xef\xbb\xbfhi", Charset::Utf8),
            (b"\xff\xfeh\x00", Charset::Utf16Le),
            (b"\xfe\xff\x00h", Charset::Utf16Be),
            (b"\xff\xfe\x00\x00h\x00\x00\x00", Charset::Utf32Le),
            (b"\x00\x00\xfe\xff\x00\x00\x00h", Charset::Utf32Be),
            (b"\xfe\xff\x00\x00", Charset::Ucs4_3412),
            (b"\x00\x00\xff\xfe", Charset::Ucs4_2143),
        ];

        for (input, expected) in cases {
            let whole = detect(&[input]);
            assert_eq!(
                whole,
                Some(Detection {
                    charset: expected,
                    confidence: 1.0
                })
            );

            let bytes: [&[u8]; 8] = core::array::from_fn(|i| input.get(i..=i).unwrap_or(&[]));
            assert_eq!(detect(&bytes), whole, "{expected} split into bytes");
        }
    }

    #[test]
    fn short_streams_settle_at_end() {
        assert_eq!(charset(&[b"\xff\xfe"]), Some(Charset::Utf16Le));
        assert_eq!(charset(&[b"\xfe", b"\xff"]), Some(Charset::Utf16Be));

        let mut detector = UniversalDetector::default();
        detector.feed(b"\xff\xfe");
        assert_eq!(detector.detection(), None);
        assert!(!detector.is_done());
    }

    #[test]
    fn ascii_is_reported_at_end() {
        let mut detector = UniversalDetector::default();
        detector.feed(b"hi");
        assert_eq!(detector.detection(), None);

        detector.data_end();
        let detection = detector.detection().unwrap();
        assert_eq!(detection.name(), "ASCII");
        assert_eq!(detection.confidence, 1.0);
    }

    #[test]
    fn no_input_means_no_result() {
        assert_eq!(detect(&[]), None);
        assert_eq!(detect(&[b""]), None);
    }

    #[test]
    fn no_break_space_stays_ascii() {
        let mut detector = UniversalDetector::default();
        detector.feed(b"a\xa0b");
        assert_eq!(detector.input_state(), InputState::PureAscii);

        detector.data_end();
        assert_eq!(detector.detection().map(|d| d.charset), Some(Charset::Ascii));
    }

    #[test]
    fn escape_sequences_are_resolved() {
        let mut detector = UniversalDetector::default();
        detector.feed(b"Subject: \x1b$B");
        assert_eq!(detector.input_state(), InputState::EscAscii);
        assert_eq!(
            detector.detection(),
            Some(Detection {
                charset: Charset::Iso2022Jp,
                confidence: 0.99
            })
        );
        assert!(detector.is_done());
    }

    #[test]
    fn hz_marker_primes_escape_prober() {
        assert_eq!(charset(&[b"abc ~", b"{<:Ky2;~} def"]), Some(Charset::HzGb2312));
    }

    #[test]
    fn unresolved_escapes_give_no_result() {
        let mut detector = UniversalDetector::default();
        detector.feed(b"\x1b[1mbold\x1b[0m");
        detector.data_end();

        assert_eq!(detector.input_state(), InputState::EscAscii);
        assert_eq!(detector.detection(), None);
    }

    #[test]
    fn high_bytes_replace_escape_prober() {
        let mut detector = UniversalDetector::default();
        detector.feed(b"\x1b[0m caf\xc3\xa9");
        assert_eq!(detector.input_state(), InputState::HighByte);
    }

    #[test]
    fn utf_8_confirms_early() {
        let mut detector = UniversalDetector::default();
        detector.feed("Größe ändern, Straße überqueren".as_bytes());

        assert!(detector.is_done());
        let detection = detector.detection().unwrap();
        assert_eq!(detection.charset, Charset::Utf8);
        assert!(detection.confidence >= 0.95);
    }

    #[test]
    fn lifecycle_misuse_is_ignored() {
        let mut detector = UniversalDetector::default();
        detector.feed(b"plain");
        detector.data_end();
        let first = detector.detection();

        detector.feed(b"\xc3\xa9\xc3\xa9\xc3\xa9");
        detector.data_end();
        assert_eq!(detector.detection(), first);
        assert_eq!(detector.input_state(), InputState::PureAscii);
    }

    #[test]
    fn reset_allows_reuse() {
        let mut detector = UniversalDetector::new(LanguageFilter::JAPANESE);
        detector.feed(b"\x1b$B");
        assert!(detector.is_done());

        detector.reset();
        assert_eq!(detector.detection(), None);
        assert_eq!(detector.input_state(), InputState::PureAscii);
        assert_eq!(detector.language_filter(), LanguageFilter::JAPANESE);

        detector.feed(b"ok");
        detector.data_end();
        assert_eq!(detector.detection().map(|d| d.charset), Some(Charset::Ascii));
    }

    #[test]
    fn filter_limits_probers() {
        let mut detector = UniversalDetector::new(LanguageFilter::CJK);
        detector.feed(b"\xe9t\xe9");

        let Some(Right(high)) = &detector.probers else {
            panic!("expected high byte probers");
        };
        assert!(high.single_byte.is_none());
        assert!(high.latin1.is_none());
    }
}
