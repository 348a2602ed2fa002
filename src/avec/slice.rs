//! Slice-based detection.

use crate::{
    language::LanguageFilter,
    sans::{Detection, UniversalDetector},
};

/// Detect the charset of a complete slice of input.
///
/// This method is also re-exported as `telltale::avec::detect_slice`.
pub fn detect(r: &[u8], filter: LanguageFilter) -> Option<Detection> {
    let mut detector = UniversalDetector::new(filter);
    detector.feed(r);
    detector.data_end();
    detector.detection()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;

    #[test]
    fn slices_are_detected_whole() {
        let detection = detect(b"\xef\xbb\xbfsigned", LanguageFilter::ALL);
        assert_eq!(detection.map(|d| d.charset), Some(Charset::Utf8));

        let detection = detect(b"unsigned", LanguageFilter::ALL);
        assert_eq!(detection.map(|d| d.charset), Some(Charset::Ascii));

        assert_eq!(detect(b"", LanguageFilter::ALL), None);
    }
}
