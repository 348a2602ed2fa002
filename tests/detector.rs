#![cfg(feature = "std")]

use encoding_rs::WINDOWS_1251;
use telltale::{Charset, Detection, LanguageFilter, UniversalDetector, sans::InputState};

fn detect(bytes: &[u8]) -> Option<Detection> {
    telltale::avec::detect_slice(bytes, LanguageFilter::ALL)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("fixtures/{name}.txt")).unwrap()
}

#[test]
fn seven_bit_input_is_ascii() {
    let input: Vec<u8> = (0..0x80u8).filter(|&b| b != 0x1B && b != b'~').collect();

    assert_eq!(
        detect(&input),
        Some(Detection {
            charset: Charset::Ascii,
            confidence: 1.0
        })
    );
}

#[test]
fn byte_order_mark_decides_regardless_of_rest() {
    let mut input = b"\xef\xbb\xbf".to_vec();
    input.extend_from_slice(b"\x1b$B\xff\xfe\x82\xa0");

    let detection = detect(&input).unwrap();
    assert_eq!(detection.name(), "UTF-8");
    assert_eq!(detection.confidence, 1.0);
}

#[test]
fn signed_greeting_is_utf_8() {
    let mut detector = UniversalDetector::default();
    detector.feed(&[0xEF, 0xBB, 0xBF, b'h', b'i']);
    detector.data_end();

    assert_eq!(
        detector.detection(),
        Some(Detection {
            charset: Charset::Utf8,
            confidence: 1.0
        })
    );
}

#[test]
fn plain_greeting_is_ascii() {
    let mut detector = UniversalDetector::default();
    detector.feed(b"hi");
    detector.data_end();

    assert_eq!(
        detector.detection(),
        Some(Detection {
            charset: Charset::Ascii,
            confidence: 1.0
        })
    );
}

#[test]
fn end_without_input_has_no_result() {
    let mut detector = UniversalDetector::default();
    detector.data_end();
    assert_eq!(detector.detection(), None);
    assert!(detector.is_done());
}

#[test]
fn utf_8_prose_is_confident() {
    let text = fixture("french");
    let detection = detect(text.as_bytes()).unwrap();

    assert_eq!(detection.charset, Charset::Utf8);
    assert!(detection.confidence >= 0.95);
}

#[test]
fn windows_1251_prose_is_cyrillic() {
    let text = fixture("russian");
    let (bytes, _, _) = WINDOWS_1251.encode(&text);
    let detection = detect(&bytes).unwrap();

    assert!(matches!(
        detection.charset,
        Charset::Windows1251
            | Charset::Koi8R
            | Charset::Iso8859_5
            | Charset::MacCyrillic
            | Charset::Ibm866
            | Charset::Ibm855
    ));
    assert!(detection.confidence > 0.5);
}

#[test]
fn reset_reproduces_result() {
    let text = fixture("korean");
    let (bytes, _, _) = encoding_rs::EUC_KR.encode(&text);

    let mut detector = UniversalDetector::default();
    detector.feed(&bytes);
    detector.data_end();
    let first = detector.detection();

    detector.reset();
    detector.feed(&bytes);
    detector.data_end();

    assert!(first.is_some());
    assert_eq!(detector.detection(), first);
}

#[test]
fn result_is_fixed_once_found() {
    let text = fixture("japanese");
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(&text);

    let mut detector = UniversalDetector::default();
    let mut found = None;

    for chunk in bytes.chunks(64) {
        detector.feed(chunk);

        if let Some(detection) = detector.detection() {
            let found = found.get_or_insert(detection);
            assert_eq!(*found, detection);
            assert!(detector.is_done());
        }
    }

    detector.data_end();
    assert_eq!(detector.detection(), found);
    assert_eq!(found.map(|d| d.charset), Some(Charset::ShiftJis));
}

#[test]
fn latin_text_falls_back_to_windows_1252() {
    let text = fixture("german");
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&text);

    let mut detector = UniversalDetector::default();
    detector.feed(&bytes);
    assert_eq!(detector.input_state(), InputState::HighByte);
    assert!(!detector.is_done());

    detector.data_end();
    let detection = detector.detection().unwrap();
    assert_eq!(detection.charset, Charset::Windows1252);
    assert!(detection.confidence <= 0.73);
}

#[test]
fn weak_evidence_gives_no_result() {
    // A lone high byte convinces no prober.
    let mut detector = UniversalDetector::new(LanguageFilter::CJK);
    detector.feed(b"price: 5\x80");
    detector.data_end();

    assert_eq!(detector.input_state(), InputState::HighByte);
    assert_eq!(detector.detection(), None);
}

#[test]
fn names_round_trip() {
    for &charset in Charset::ALL {
        assert_eq!(charset.name().parse::<Charset>().unwrap(), charset);
    }
}
