//! Reader-based detection.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::{
    language::LanguageFilter,
    sans::{Detection, UniversalDetector},
};

extern crate std;

/// Bytes requested from the reader at a time.
const CHUNK_SIZE: usize = 4096;

/// Errors occurring while detecting from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Detect the charset of a reader's contents.
///
/// Reading stops as soon as the result is certain, so the reader may be left
/// part-way through its input.
///
/// This method is also re-exported as `telltale::avec::detect_reader`.
///
/// _Requires Cargo feature `std`._
pub fn detect(r: &mut impl Read, filter: LanguageFilter) -> Result<Option<Detection>, Error> {
    let mut detector = UniversalDetector::new(filter);
    let mut buf = [0; CHUNK_SIZE];

    while !detector.is_done() {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => Err(e)?,
        };

        detector.feed(&buf[..n]);
    }

    detector.data_end();
    Ok(detector.detection())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::io::Cursor;

    use super::*;
    use crate::charset::Charset;

    /// Yields one byte per read, failing with `Interrupted` in between.
    struct Stuttering<'a> {
        bytes: &'a [u8],
        interrupt: bool,
    }

    impl Read for Stuttering<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(ErrorKind::Interrupted.into());
            }

            match self.bytes.split_first() {
                Some((&first, rest)) if !buf.is_empty() => {
                    buf[0] = first;
                    self.bytes = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut r = Stuttering {
            bytes: "Größe ändern, Straße".as_bytes(),
            interrupt: false,
        };

        let detection = detect(&mut r, LanguageFilter::ALL).unwrap();
        assert_eq!(detection.map(|d| d.charset), Some(Charset::Utf8));
    }

    #[test]
    fn reading_stops_once_certain() {
        let mut data = [b'a'; 3 * CHUNK_SIZE];
        data[..2].copy_from_slice(b"\xfe\xff");

        let mut r = Cursor::new(&data[..]);
        let detection = detect(&mut r, LanguageFilter::ALL).unwrap();

        assert_eq!(detection.map(|d| d.charset), Some(Charset::Utf16Be));
        assert_eq!(r.position(), CHUNK_SIZE as u64);
    }

    #[test]
    fn reader_errors_propagate() {
        let result = detect(&mut Broken, LanguageFilter::ALL);
        assert!(matches!(result, Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe));
    }
}
