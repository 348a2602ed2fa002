//! Names of the character encodings the detector can report.

use core::{fmt, str::FromStr};

use thiserror::Error;

/// A character encoding reported by the detector.
///
/// Names follow the IANA-style vocabulary text decoders are resolved by. See
/// [`Charset::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Ascii,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    /// UCS-4 with the unusual 3412 octet order.
    Ucs4_3412,
    /// UCS-4 with the unusual 2143 octet order.
    Ucs4_2143,

    Gb18030,
    Big5,
    EucJp,
    EucKr,
    EucTw,
    ShiftJis,

    HzGb2312,
    Iso2022Cn,
    Iso2022Jp,
    Iso2022Kr,

    Windows1251,
    Koi8R,
    Iso8859_5,
    MacCyrillic,
    Ibm866,
    Ibm855,

    Iso8859_7,
    Windows1253,

    /// Hebrew in logical order.
    Windows1255,
    /// Hebrew in visual order.
    Iso8859_8,

    Windows1252,
}

macro_rules! charset_names {
    ($($variant:ident => $name:literal,)*) => {
        impl Charset {
            /// Every reportable charset.
            pub const ALL: &[Charset] = &[$(Charset::$variant,)*];

            /// The name callers use to resolve a text decoder.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Charset::$variant => $name,)*
                }
            }
        }
    };
}

charset_names! {
    Ascii => "ASCII",
    Utf8 => "UTF-8",
    Utf16Le => "UTF-16LE",
    Utf16Be => "UTF-16BE",
    Utf32Le => "UTF-32LE",
    Utf32Be => "UTF-32BE",
    Ucs4_3412 => "X-ISO-10646-UCS-4-3412",
    Ucs4_2143 => "X-ISO-10646-UCS-4-2143",
    Gb18030 => "GB18030",
    Big5 => "Big5",
    EucJp => "EUC-JP",
    EucKr => "EUC-KR",
    EucTw => "EUC-TW",
    ShiftJis => "Shift-JIS",
    HzGb2312 => "HZ-GB-2312",
    Iso2022Cn => "ISO-2022-CN",
    Iso2022Jp => "ISO-2022-JP",
    Iso2022Kr => "ISO-2022-KR",
    Windows1251 => "windows-1251",
    Koi8R => "KOI8-R",
    Iso8859_5 => "ISO-8859-5",
    MacCyrillic => "x-mac-cyrillic",
    Ibm866 => "IBM866",
    Ibm855 => "IBM855",
    Iso8859_7 => "ISO-8859-7",
    Windows1253 => "windows-1253",
    Windows1255 => "windows-1255",
    Iso8859_8 => "ISO-8859-8",
    Windows1252 => "windows-1252",
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error parsing a charset name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown charset name.")]
pub struct UnknownCharsetError;

impl FromStr for Charset {
    type Err = UnknownCharsetError;

    /// Parse a name as returned by [`Charset::name`], ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownCharsetError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for &charset in Charset::ALL {
            assert_eq!(charset.name().parse::<Charset>(), Ok(charset));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("shift-jis".parse::<Charset>(), Ok(Charset::ShiftJis));
        assert_eq!(" Windows-1251 ".parse::<Charset>(), Ok(Charset::Windows1251));
        assert_eq!("latin-9".parse::<Charset>(), Err(UnknownCharsetError));
    }
}
