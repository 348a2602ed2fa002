//! Compact lookup tables of small integers.
//!
//! Byte classes, state transitions and likelihood categories all fit in four
//! bits. Tables are packed eight values to a word and built at compile time, so
//! a malformed table fails the build instead of misbehaving at runtime.

/// A table of values 0 to 15, packed eight to a `u32` word.
#[derive(Debug)]
pub struct NibbleTable<const WORDS: usize> {
    words: [u32; WORDS],
}

impl<const WORDS: usize> NibbleTable<WORDS> {
    /// Pack a slice of values.
    pub const fn from_nibbles(values: &[u8]) -> Self {
        assert!(values.len() <= WORDS * 8, "too many values for table");

        let mut words = [0; WORDS];
        let mut i = 0;
        while i < values.len() {
            assert!(values[i] < 16, "value does not fit in four bits");
            words[i / 8] |= (values[i] as u32) << ((i % 8) * 4);
            i += 1;
        }

        Self { words }
    }

    /// Pack rows of ASCII digits, concatenated in order.
    pub const fn from_digit_rows<const COLS: usize>(rows: &[&[u8; COLS]]) -> Self {
        assert!(rows.len() * COLS <= WORDS * 8, "too many values for table");

        let mut words = [0; WORDS];
        let mut r = 0;
        while r < rows.len() {
            let mut c = 0;
            while c < COLS {
                let digit = rows[r][c];
                assert!(digit.is_ascii_digit(), "expected an ASCII digit");

                let i = r * COLS + c;
                words[i / 8] |= ((digit - b'0') as u32) << ((i % 8) * 4);
                c += 1;
            }
            r += 1;
        }

        Self { words }
    }

    /// Unpack the value at an index.
    #[inline]
    pub const fn get(&self, index: usize) -> u8 {
        ((self.words[index / 8] >> ((index % 8) * 4)) & 0xF) as u8
    }
}

/// A byte-to-class table for all 256 byte values.
pub type ClassTable = NibbleTable<32>;

impl ClassTable {
    /// Build a class table, assigning `default` outside the listed inclusive
    /// ranges. Later ranges override earlier ones.
    pub const fn classes(default: u8, ranges: &[(u8, u8, u8)]) -> Self {
        let mut values = [default; 256];

        let mut r = 0;
        while r < ranges.len() {
            let (low, high, class) = ranges[r];
            let mut b = low as usize;
            while b <= high as usize {
                values[b] = class;
                b += 1;
            }
            r += 1;
        }

        Self::from_nibbles(&values)
    }

    /// The class of a byte.
    #[inline]
    pub const fn class_of(&self, byte: u8) -> u8 {
        self.get(byte as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_through_words() {
        const TABLE: NibbleTable<2> =
            NibbleTable::from_nibbles(&[0, 1, 2, 3, 15, 14, 13, 12, 7, 9]);

        let unpacked: [u8; 10] = core::array::from_fn(|i| TABLE.get(i));
        assert_eq!(unpacked, [0, 1, 2, 3, 15, 14, 13, 12, 7, 9]);
        assert_eq!(TABLE.get(10), 0);
    }

    #[test]
    fn digit_rows_concatenate() {
        const TABLE: NibbleTable<1> = NibbleTable::from_digit_rows(&[b"012", b"345"]);
        assert_eq!(TABLE.get(2), 2);
        assert_eq!(TABLE.get(3), 3);
        assert_eq!(TABLE.get(5), 5);
    }

    #[test]
    fn later_ranges_override() {
        const TABLE: ClassTable = ClassTable::classes(1, &[(0x80, 0xFF, 0), (0x8E, 0x8E, 4)]);
        assert_eq!(TABLE.class_of(b'a'), 1);
        assert_eq!(TABLE.class_of(0x8D), 0);
        assert_eq!(TABLE.class_of(0x8E), 4);
        assert_eq!(TABLE.class_of(0xFF), 0);
    }
}
