//! Families of languages a detector attempts.

use core::{ops::BitOr, str::FromStr};

use tartan_bitfield::bitfield;
use thiserror::Error;

bitfield! {
    struct Families(u8) {
        [0] chinese_simplified,
        [1] chinese_traditional,
        [2] japanese,
        [3] korean,
        [4] non_cjk,
    }
}

/// A set of language families restricting which encodings are attempted.
///
/// UTF-8, ASCII and byte order marks are always detected. Filters combine with
/// `|`, and parse from a list such as `"japanese, korean"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageFilter(u8);

impl LanguageFilter {
    /// GB18030, HZ-GB-2312 and ISO-2022-CN.
    pub const CHINESE_SIMPLIFIED: Self = Self(1 << 0);
    /// Big5, EUC-TW and ISO-2022-CN.
    pub const CHINESE_TRADITIONAL: Self = Self(1 << 1);
    /// Shift-JIS, EUC-JP and ISO-2022-JP.
    pub const JAPANESE: Self = Self(1 << 2);
    /// EUC-KR and ISO-2022-KR.
    pub const KOREAN: Self = Self(1 << 3);
    /// Single-byte scripts and the Latin-1 fallback.
    pub const NON_CJK: Self = Self(1 << 4);

    /// Both Chinese families.
    pub const CHINESE: Self = Self(Self::CHINESE_SIMPLIFIED.0 | Self::CHINESE_TRADITIONAL.0);
    /// Every CJK family.
    pub const CJK: Self = Self(Self::CHINESE.0 | Self::JAPANESE.0 | Self::KOREAN.0);
    /// Every family.
    pub const ALL: Self = Self(Self::CJK.0 | Self::NON_CJK.0);

    pub fn chinese_simplified(self) -> bool {
        Families(self.0).chinese_simplified()
    }

    pub fn chinese_traditional(self) -> bool {
        Families(self.0).chinese_traditional()
    }

    /// Either Chinese family.
    pub fn chinese(self) -> bool {
        let families = Families(self.0);
        families.chinese_simplified() || families.chinese_traditional()
    }

    pub fn japanese(self) -> bool {
        Families(self.0).japanese()
    }

    pub fn korean(self) -> bool {
        Families(self.0).korean()
    }

    pub fn non_cjk(self) -> bool {
        Families(self.0).non_cjk()
    }

    /// Whether every family in `other` is also in this filter.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for LanguageFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// An error parsing a language filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLanguageFilterError {
    /// No families were listed.
    #[error("No language families listed.")]
    Empty,
    /// A listed family is not recognised.
    #[error("Unknown language family.")]
    UnknownFamily,
}

impl FromStr for LanguageFilter {
    type Err = ParseLanguageFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut filter = Self(0);

        for token in s.split([',', '+']).map(str::trim) {
            if token.is_empty() {
                continue;
            }

            let family = [
                ("all", Self::ALL),
                ("cjk", Self::CJK),
                ("non-cjk", Self::NON_CJK),
                ("chinese", Self::CHINESE),
                ("chinese-simplified", Self::CHINESE_SIMPLIFIED),
                ("chinese-traditional", Self::CHINESE_TRADITIONAL),
                ("japanese", Self::JAPANESE),
                ("korean", Self::KOREAN),
            ]
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token));

            match family {
                Some((_, family)) => filter = filter | family,
                None => Err(ParseLanguageFilterError::UnknownFamily)?,
            }
        }

        if filter.0 == 0 {
            Err(ParseLanguageFilterError::Empty)?;
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_decode_from_bits() {
        let filter = LanguageFilter::JAPANESE | LanguageFilter::KOREAN;
        assert!(filter.japanese());
        assert!(filter.korean());
        assert!(!filter.chinese());
        assert!(!filter.non_cjk());

        assert!(LanguageFilter::CHINESE.chinese_simplified());
        assert!(LanguageFilter::CHINESE.chinese_traditional());
        assert!(LanguageFilter::ALL.contains(LanguageFilter::CJK));
        assert!(!LanguageFilter::CJK.contains(LanguageFilter::NON_CJK));
    }

    #[test]
    fn parse_lists() {
        assert_eq!("all".parse::<LanguageFilter>(), Ok(LanguageFilter::ALL));
        assert_eq!(
            "Japanese, korean".parse::<LanguageFilter>(),
            Ok(LanguageFilter::JAPANESE | LanguageFilter::KOREAN)
        );
        assert_eq!(
            "chinese+non-cjk".parse::<LanguageFilter>(),
            Ok(LanguageFilter::CHINESE | LanguageFilter::NON_CJK)
        );
        assert_eq!(
            " , ".parse::<LanguageFilter>(),
            Err(ParseLanguageFilterError::Empty)
        );
        assert_eq!(
            "klingon".parse::<LanguageFilter>(),
            Err(ParseLanguageFilterError::UnknownFamily)
        );
    }
}
