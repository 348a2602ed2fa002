#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use telltale::{Detection, LanguageFilter, UniversalDetector, avec};

const MANIFEST: &str = "fixtures/manifest.csv";

#[test]
fn detect_slice_fixtures() {
    for fixture in Fixture::load(MANIFEST) {
        let detection = avec::detect_slice(&fixture.bytes, LanguageFilter::ALL);
        fixture.validate(detection);
    }
}

#[test]
fn detect_reader_fixtures() {
    for fixture in Fixture::load(MANIFEST) {
        let mut reader = fixture.bytes.as_slice();
        let detection = avec::detect_reader(&mut reader, LanguageFilter::ALL).unwrap();
        fixture.validate(detection);
    }
}

#[test]
fn detect_fixtures_byte_by_byte() {
    for fixture in Fixture::load(MANIFEST) {
        let mut detector = UniversalDetector::default();
        for b in fixture.bytes.chunks(1) {
            detector.feed(b);
        }
        detector.data_end();

        let whole = avec::detect_slice(&fixture.bytes, LanguageFilter::ALL);
        assert_eq!(detector.detection(), whole, "{}", fixture.name);
    }
}

#[test]
fn detect_fixtures_in_uneven_chunks() {
    for fixture in Fixture::load(MANIFEST) {
        let mut detector = UniversalDetector::default();
        for chunk in fixture.bytes.chunks(7) {
            detector.feed(chunk);
        }
        detector.data_end();

        let whole = avec::detect_slice(&fixture.bytes, LanguageFilter::ALL);
        assert_eq!(detector.detection(), whole, "{}", fixture.name);
    }
}

#[test]
fn detect_cjk_only() {
    for fixture in Fixture::load(MANIFEST) {
        let detection = avec::detect_slice(&fixture.bytes, LanguageFilter::CJK);

        // Single-byte charsets are out of reach without the non-CJK family.
        if let Some(Detection { charset, .. }) = detection {
            assert!(
                !matches!(
                    charset.name(),
                    "windows-1251" | "KOI8-R" | "IBM866" | "IBM855" | "windows-1252"
                ),
                "{} detected as {charset}",
                fixture.name
            );
        }
    }
}

/// A row of the fixture manifest, with its bytes ready to detect.
struct Fixture {
    name: String,
    bytes: Vec<u8>,
    expected: Vec<String>,
    min_confidence: f32,
}

impl Fixture {
    fn load(path: impl AsRef<Path>) -> Vec<Self> {
        let path = path.as_ref();
        let dir = path.parent().unwrap();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .unwrap();

        reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                let (file, label) = (&r[0], &r[1]);

                let raw = std::fs::read(dir.join(file)).unwrap();

                // Rows without a label name a pre-encoded fixture.
                let bytes = if label.is_empty() {
                    raw
                } else {
                    let text = String::from_utf8(raw).unwrap();
                    let encoding = Encoding::for_label(label.as_bytes()).unwrap();
                    let (bytes, _, unmappable) = encoding.encode(&text);
                    assert!(!unmappable, "{file} does not fit in {label}");
                    bytes.into_owned()
                };

                Self {
                    name: format!("{file} ({label})"),
                    bytes,
                    expected: r[2].split('|').map(|s| s.to_string()).collect(),
                    min_confidence: r[3].parse().unwrap(),
                }
            })
            .collect()
    }

    fn validate(&self, detection: Option<Detection>) {
        let detection = detection.unwrap_or_else(|| panic!("{}: no result", self.name));

        assert!(
            self.expected.iter().any(|e| e == detection.name()),
            "{}: expected {:?}, detected {}",
            self.name,
            self.expected,
            detection.name()
        );
        assert!(
            detection.confidence >= self.min_confidence,
            "{}: confidence {} below {}",
            self.name,
            detection.confidence,
            self.min_confidence
        );
    }
}
