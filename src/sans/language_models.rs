//! Letter frequency orders and letter pair precedence of single-byte scripts.
//!
//! Each script has one precedence matrix over its 64 most frequent letters,
//! shared by every encoding of the script. Orders map each byte of an encoding
//! to the frequency rank of the letter it encodes; see [`SequenceModel`] for the
//! reserved orders of digits, symbols and control bytes.
//!
//! The tables are generated by `models/emit.py languages` from the prose in
//! `models/corpus/`. Letters rank by corpus frequency, then unseen letters of
//! the script follow in code point order. Pair categories fold case, so an
//! upper-case letter's row repeats its lower-case row, and letters the corpus
//! never shows have all-zero rows. Folded pairs are ranked by count: those
//! covering the first 97.5% of pairs are positive (3), the next 2% likely (2),
//! the rest unlikely (1), and unseen pairs negative (0). A script's
//! typical positive ratio is the share of its corpus pairs that land in the
//! positive category.

use crate::charset::Charset;

use super::{packed::NibbleTable, single_byte::SequenceModel};

static RUSSIAN_PRECEDENCE: NibbleTable<512> = NibbleTable::from_digit_rows(&[
    b"0033333333333303300333333322030333033330333330033033000000000000",
    b"0030333333333023300333333303200330033330333330233233000000000000",
    b"2030333333333302300333332332332133033320333330333013000000000000",
    b"3333333333333003300333332233023030033330333330033002000000000000",
    b"3333030333023033033000000020003230023330003330000320000000000000",
    b"3333330300000033033000000020033000003030003030003300000000000000",
    b"3333232300003033303000300003223000003330003030232300000000000000",
    b"3333333333033333033030000000003033233330003330003300000000000000",
    b"3333330200333032333010200200003000033320033020023302000000000000",
    b"3333333330323033032200000000223000023330033330203300000000000000",
    b"3333033333203330032000000030303033203300023330300300000000000000",
    b"3333032000023333033000000000003003023330003000000300000000000000",
    b"3333333030000030000200000000003000003000003300003300000000000000",
    b"3333203030000033000000000000003000000030003300002300000000000000",
    b"0030333333333200300330303303010032033300033330033003000000000000",
    b"0010333201230003000000020022020010033030021020003000000000000000",
    b"3303021030300030000000000000003000002000030300000300000000000000",
    b"0030303333030300000002033300000033030000203330003003000000000000",
    b"0031230300303203200000003002000002003330033030002000000000000000",
    b"3333032033332022230000000000003030033220033300000200000000000000",
    b"0333330000000030001000001000300000003000003000303300000000000000",
    b"3333033331000022030000000000023010303020003330000200000000000000",
    b"0233030000303020002001000000200000003300133000200200000000000000",
    b"2000320200000000000000000000002000002000000020003000000000000000",
    b"0333003000003010000000000000200000000300003000200100000000000000",
    b"3312003022000030000000000000003020000000001200000300000000000000",
    b"0333000003000030030000000000000030000000003000000300000000000000",
    b"0000300000300000000011000000030000000000130000003000000000000000",
    b"0000333000030000000000300000000000033000000000033000000000000000",
    b"0333000000000000000000000000300000000000003000300000000000000000",
    b"0033333333333303300333333322030333033330333330033033000000000000",
    b"3203000010000000010000000000003000000000000100000000000000000000",
    b"3333333330323033032200000000223000023330033330203300000000000000",
    b"3333203030000033000000000000003000000030003300002300000000000000",
    b"0020000000000001000000000000300000000010002000300000000000000000",
    b"3333032000023333033000000000003003023330003000000300000000000000",
    b"3333330300000033033000000020033000003030003030003300000000000000",
    b"3333333030000030000200000000003000003000003300003300000000000000",
    b"0010333201230003000000020022020010033030021020003000000000000000",
    b"0000300000002000000000000000000000000200000000003000000000000000",
    b"3333033331000022030000000000023010303020003330000200000000000000",
    b"3333033333203330032000000030303033203300023330300300000000000000",
    b"2030333333333302300333332332332133033320333330333013000000000000",
    b"3333330200333032333010200200003000033320033020023302000000000000",
    b"3333333333033333033030000000003033233330003330003300000000000000",
    b"0000300000002000000000000000000000000200000000003000000000000000",
    b"0000333000030000000000300000000000033000000000033000000000000000",
    b"0233030000303020002001000000200000003300133000200200000000000000",
    b"3333030333023033033000000020003230023330003330000320000000000000",
    b"0030333333333200300330303303010032033300033330033003000000000000",
    b"3203000010000000010000000000003000000000000100000000000000000000",
    b"3312003022000030000000000000003020000000001200000300000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
]);

static WINDOWS_1251_RUSSIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    52, 53, 253, 80, 253, 253, 253, 253, 253, 253, 59, 253, 60, 62, 61, 64,
    79, 253, 253, 253, 253, 253, 253, 253, 255, 253, 86, 253, 87, 89, 88, 91,
    253, 63, 90, 58, 253, 92, 253, 253, 46, 253, 54, 253, 253, 255, 253, 57,
    253, 253, 56, 83, 93, 253, 253, 253, 28, 253, 81, 253, 85, 55, 82, 84,
    65, 40, 32, 66, 41, 42, 47, 67, 68, 69, 37, 70, 35, 36, 30, 33,
    43, 44, 48, 49, 50, 51, 71, 72, 73, 74, 75, 76, 77, 45, 78, 38,
    1, 21, 9, 16, 10, 2, 22, 19, 3, 23, 12, 6, 11, 5, 0, 13,
    8, 7, 4, 14, 31, 25, 26, 20, 24, 29, 34, 17, 18, 39, 27, 15,
];

static KOI8_R_RUSSIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 252, 253, 253,
    253, 253, 253, 28, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 46, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    27, 1, 21, 26, 10, 2, 31, 16, 25, 3, 23, 12, 6, 11, 5, 0,
    13, 15, 8, 7, 4, 14, 22, 9, 18, 17, 19, 24, 39, 29, 20, 34,
    78, 65, 40, 71, 41, 42, 50, 66, 51, 68, 69, 37, 70, 35, 36, 30,
    33, 38, 43, 44, 48, 49, 47, 32, 77, 76, 67, 73, 45, 74, 72, 75,
];

static ISO_8859_5_RUSSIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 46, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 255, 63, 64,
    65, 40, 32, 66, 41, 42, 47, 67, 68, 69, 37, 70, 35, 36, 30, 33,
    43, 44, 48, 49, 50, 51, 71, 72, 73, 74, 75, 76, 77, 45, 78, 38,
    1, 21, 9, 16, 10, 2, 22, 19, 3, 23, 12, 6, 11, 5, 0, 13,
    8, 7, 4, 14, 31, 25, 26, 20, 24, 29, 34, 17, 18, 39, 27, 15,
    253, 28, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 253, 90, 91,
];

static MAC_CYRILLIC_RUSSIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    65, 40, 32, 66, 41, 42, 47, 67, 68, 69, 37, 70, 35, 36, 30, 33,
    43, 44, 48, 49, 50, 51, 71, 72, 73, 74, 75, 76, 77, 45, 78, 38,
    253, 253, 92, 253, 253, 253, 253, 56, 253, 253, 253, 52, 79, 253, 53, 80,
    253, 253, 253, 253, 83, 253, 93, 58, 54, 81, 57, 84, 59, 86, 60, 87,
    85, 55, 253, 253, 253, 253, 253, 253, 253, 253, 253, 61, 88, 62, 89, 82,
    253, 253, 253, 253, 253, 253, 253, 253, 63, 90, 64, 91, 253, 46, 28, 15,
    1, 21, 9, 16, 10, 2, 22, 19, 3, 23, 12, 6, 11, 5, 0, 13,
    8, 7, 4, 14, 31, 25, 26, 20, 24, 29, 34, 17, 18, 39, 27, 253,
];

static IBM866_RUSSIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    65, 40, 32, 66, 41, 42, 47, 67, 68, 69, 37, 70, 35, 36, 30, 33,
    43, 44, 48, 49, 50, 51, 71, 72, 73, 74, 75, 76, 77, 45, 78, 38,
    1, 21, 9, 16, 10, 2, 22, 19, 3, 23, 12, 6, 11, 5, 0, 13,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    8, 7, 4, 14, 31, 25, 26, 20, 24, 29, 34, 17, 18, 39, 27, 15,
    46, 28, 54, 81, 57, 84, 63, 90, 253, 253, 253, 253, 253, 253, 253, 253,
];

static IBM855_RUSSIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    79, 52, 80, 53, 28, 46, 81, 54, 82, 55, 83, 56, 84, 57, 85, 58,
    86, 59, 87, 60, 88, 61, 89, 62, 90, 63, 91, 64, 27, 78, 34, 75,
    1, 65, 21, 40, 26, 71, 10, 41, 2, 42, 31, 50, 16, 66, 253, 253,
    253, 253, 253, 253, 253, 25, 51, 3, 68, 253, 253, 253, 253, 23, 69, 253,
    253, 253, 253, 253, 253, 253, 12, 37, 253, 253, 253, 253, 253, 253, 253, 253,
    6, 70, 11, 35, 5, 36, 0, 30, 13, 253, 253, 253, 253, 33, 15, 253,
    38, 8, 43, 7, 44, 4, 48, 14, 49, 22, 47, 9, 32, 18, 77, 253,
    255, 17, 76, 19, 67, 24, 73, 39, 45, 29, 74, 20, 72, 253, 253, 253,
];

pub static WINDOWS_1251_RUSSIAN: SequenceModel = SequenceModel {
    orders: &WINDOWS_1251_RUSSIAN_ORDER,
    precedence: &RUSSIAN_PRECEDENCE,
    typical_positive_ratio: 0.975169,
    charset: Charset::Windows1251,
};

pub static KOI8_R_RUSSIAN: SequenceModel = SequenceModel {
    orders: &KOI8_R_RUSSIAN_ORDER,
    precedence: &RUSSIAN_PRECEDENCE,
    typical_positive_ratio: 0.975169,
    charset: Charset::Koi8R,
};

pub static ISO_8859_5_RUSSIAN: SequenceModel = SequenceModel {
    orders: &ISO_8859_5_RUSSIAN_ORDER,
    precedence: &RUSSIAN_PRECEDENCE,
    typical_positive_ratio: 0.975169,
    charset: Charset::Iso8859_5,
};

pub static MAC_CYRILLIC_RUSSIAN: SequenceModel = SequenceModel {
    orders: &MAC_CYRILLIC_RUSSIAN_ORDER,
    precedence: &RUSSIAN_PRECEDENCE,
    typical_positive_ratio: 0.975169,
    charset: Charset::MacCyrillic,
};

pub static IBM866_RUSSIAN: SequenceModel = SequenceModel {
    orders: &IBM866_RUSSIAN_ORDER,
    precedence: &RUSSIAN_PRECEDENCE,
    typical_positive_ratio: 0.975169,
    charset: Charset::Ibm866,
};

pub static IBM855_RUSSIAN: SequenceModel = SequenceModel {
    orders: &IBM855_RUSSIAN_ORDER,
    precedence: &RUSSIAN_PRECEDENCE,
    typical_positive_ratio: 0.975169,
    charset: Charset::Ibm855,
};

static BULGARIAN_PRECEDENCE: NibbleTable<512> = NibbleTable::from_digit_rows(&[
    b"0300333333323333332033330333333230333303320000000000000000033330",
    b"0200333333333333330023333033323330233303300000000000000000033330",
    b"2303333333303333330020333303323030333303300000000000000000233303",
    b"0220333333333333330033303333333332233323302000000000000000033330",
    b"3333033332000303033320000003323000333030030000000000000000332003",
    b"3333333000000000233300001003003030300030030000000000000000300003",
    b"3333330330332300013300000000303330333033230000000000000000300003",
    b"3333333010032302233303003003103330330030230000000000000000320003",
    b"3333333200300000030300000003003030302033000000000000000000300003",
    b"3333033330230300003300000003303300333032030000000000000000300003",
    b"3333233000000303033100000003003020330030030200000000000000330003",
    b"3333000320300000000200000000200000303033000000000000000000300003",
    b"3333030000330300023000000000003300330033030000000000000000300003",
    b"3333020330200000202300000000302000303032020000000000000000300003",
    b"3333232333310301002032000002333120333033020000000000000000313003",
    b"3033030300300000000000000000003000003033000000000000000000300003",
    b"3332330000000200003000000000003030320030030000000000000000300002",
    b"0000303033303320020033020003330030030203300000000000000000003000",
    b"0000323333302303300003312003302030033003200000000000000000033300",
    b"0000313331323030300030303303331230003303300000000000000000001300",
    b"3333003320300000013300000003200000303033030000000000000000300003",
    b"3023000200203000003000000000000000002022330000000000000000300003",
    b"1332030003000000000000000000003000300030000000000000000000103002",
    b"3330000000000000000000000000000000300030000000000000000000300000",
    b"3330000000000000000300000000000000300030000000000000000000300000",
    b"3331000000000000000000000000000000300030000000000000000000300001",
    b"0002023000000300000000000003002000030000000000000000000000000002",
    b"3333330330332300013300000000303330333033230000000000000000300003",
    b"3333333200300000030300000003003030302033000000000000000000300003",
    b"3333003320300000013300000003200000303033030000000000000000300003",
    b"3333333000000000233300001003003030300030030000000000000000300003",
    b"3333000320300000000200000000200000303033000000000000000000300003",
    b"3333033332000303033320000003323000333030030000000000000000332003",
    b"3030000000000000000000000000000000000030000000000000000000300000",
    b"0200333333333333330023333033323330233303300000000000000000033330",
    b"3333020330200000202300000000302000303032020000000000000000300003",
    b"3333333010032302233303003003103330330030230000000000000000320003",
    b"3333232333310301002032000002333120333033020000000000000000313003",
    b"2303333333303333330020333303323030333303300000000000000000233303",
    b"3333233000000303033100000003003020330030030200000000000000330003",
    b"3333030000330300023000000000003300330033030000000000000000300003",
    b"0000323333302303300003312003302030033003200000000000000000033300",
    b"3030000000000000000000000000000000000030000000000000000000300000",
    b"0000000000000000000020000000020000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0300333333323333332033330333333230333303320000000000000000033330",
    b"3033030300300000000000000000003000003033000000000000000000300003",
    b"3333033330230300003300000003303300333032030000000000000000300003",
    b"1332030003000000000000000000003000300030000000000000000000103002",
    b"0002023000000300000000000003002000030000000000000000000000000002",
    b"0220333333333333330033303333333332233323302000000000000000033330",
]);

static ISO_8859_5_BULGARIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 255, 56, 57,
    58, 29, 28, 59, 60, 34, 61, 37, 38, 62, 35, 39, 40, 30, 63, 31,
    36, 27, 32, 41, 42, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74,
    0, 20, 8, 15, 9, 1, 22, 14, 2, 26, 13, 10, 12, 5, 3, 11,
    7, 6, 4, 18, 33, 21, 24, 16, 23, 25, 19, 75, 76, 77, 43, 17,
    253, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 253, 90, 91,
];

static WINDOWS_1251_BULGARIAN_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 122, 139, 131, 129, 120, 135, 136, 127, 124, 142, 141, 130, 133, 125, 123,
    138, 144, 128, 126, 121, 132, 140, 134, 143, 137, 145, 253, 253, 253, 253, 253,
    253, 96, 113, 105, 103, 94, 109, 110, 101, 98, 116, 115, 104, 107, 99, 97,
    112, 118, 102, 100, 95, 106, 114, 108, 117, 111, 119, 253, 253, 253, 253, 255,
    45, 46, 253, 80, 253, 253, 253, 253, 253, 253, 52, 253, 53, 55, 54, 57,
    79, 253, 253, 253, 253, 253, 253, 253, 255, 253, 86, 253, 87, 89, 88, 91,
    253, 56, 90, 51, 253, 92, 253, 253, 44, 253, 47, 253, 253, 255, 253, 50,
    253, 253, 49, 83, 93, 253, 253, 253, 78, 253, 81, 253, 85, 48, 82, 84,
    58, 29, 28, 59, 60, 34, 61, 37, 38, 62, 35, 39, 40, 30, 63, 31,
    36, 27, 32, 41, 42, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74,
    0, 20, 8, 15, 9, 1, 22, 14, 2, 26, 13, 10, 12, 5, 3, 11,
    7, 6, 4, 18, 33, 21, 24, 16, 23, 25, 19, 75, 76, 77, 43, 17,
];

pub static ISO_8859_5_BULGARIAN: SequenceModel = SequenceModel {
    orders: &ISO_8859_5_BULGARIAN_ORDER,
    precedence: &BULGARIAN_PRECEDENCE,
    typical_positive_ratio: 0.975052,
    charset: Charset::Iso8859_5,
};

pub static WINDOWS_1251_BULGARIAN: SequenceModel = SequenceModel {
    orders: &WINDOWS_1251_BULGARIAN_ORDER,
    precedence: &BULGARIAN_PRECEDENCE,
    typical_positive_ratio: 0.975052,
    charset: Charset::Windows1251,
};

static GREEK_PRECEDENCE: NibbleTable<512> = NibbleTable::from_digit_rows(&[
    b"0330033333033330303302200333030303003320000003000033003333333333",
    b"3033303300300303130330033000300033030003333330003031300003000330",
    b"3303333323333033001203330230333333033233300031303020303320333300",
    b"0330033333323330303003303322000303032330000303000003002033333332",
    b"0330033333033332303003333002003303303330200303333003000003333332",
    b"3333300000300303030320030300300330030003323030003030300033000030",
    b"3333320013230003333332332000300330023123333233003033300003302000",
    b"3333300333330303330000333222000333033303303330003003002023300032",
    b"3333323000303003330330000000300330030003333030000033300003032300",
    b"3033303023303203030332000000300030030223333030000030300003330320",
    b"0300033303033030003000000300000303003000000003000000000030333300",
    b"3033300030330003330330020023300030033303333030002033302003000003",
    b"3233300000333303330330023000300230033003333330002033300003030030",
    b"2300033333033030003023300020033303203330020023320000002300333300",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0330333330033000003003300300030303003333000003000000000333033300",
    b"3303331333221030000003330000030333022333000030003000000300313100",
    b"0300033330033030003000300003002303003300000003200000000000033303",
    b"3033333002323303323330203000000030032003332333000033000003233330",
    b"1003033333020030003003120023000033002330000013002000002000303303",
    b"0300033323033030003003000300003303003230000003300000000030333300",
    b"0033303000300302030100002000300030030003203200000010300003000330",
    b"3313333000000000300320030300200330000003020030003033200031003300",
    b"0300033331030000302020000300000303003300020002000003000030103300",
    b"0303033330030020002000000200000333003300000002000000000020003300",
    b"2003303000330303020230000000000030033003332020000020000000000330",
    b"3033303000003001023210000000000030000003112033000020000003030300",
    b"3333233000000300330300030000300330000002003030003033300003003330",
    b"0300033330020030000000000200000303002300000000000000000020003300",
    b"3013300000300000330000030000000030030003003030003003000001000000",
    b"3000300000300000200330012000000000030003030230001032000000000000",
    b"3033303300300303130330033000300033030003333330003031300003000330",
    b"0330033333323330303003303322000303032330000303000003002033333332",
    b"3333300333330303330000333222000333033303303330003003002023300032",
    b"3000000000300003000000030000000000030000300030003000000000000000",
    b"0300033303033030003000000300000303003000000003000000000030333300",
    b"3033300030330003330330020023300030033303333030002033302003000003",
    b"3333323000303003330330000000300330030003333030000033300003032300",
    b"0033303000300302030100002000300030030003203200000010300003000330",
    b"0330033333033332303003333002003303303330200303333003000003333332",
    b"0330333330033000003003300300030303003333000003000000000333033300",
    b"0300033323033030003003000300003303003230000003300000000030333300",
    b"0300033330033030003000300003002303003300000003200000000000033303",
    b"0303033330030020002000000200000333003300000002000000000020003300",
    b"0330033333033330303302200333030303003320000003000033003333333333",
    b"3033333002323303323330203000000030032003332333000033000003233330",
    b"3000300000300000200330012000000000030003030230001032000000000000",
    b"3000000000300003000000030000000000030000300030003000000000000000",
    b"0300033331030000302020000300000303003300020002000003000030103300",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"1003033333020030003003120023000033002330000013002000002000303303",
    b"3303331333221030000003330000030333022333000030003000000300313100",
    b"0300033330020030000000000200000303002300000000000000000020003300",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"3033303000003001023210000000000030000003112033000020000003030300",
    b"3013300000300000330000030000000030030003003030003003000001000000",
    b"2003303000330303020230000000000030033003332020000020000000000330",
    b"3303333323333033001203330230333333033233300031303020303320333300",
    b"3033303023303203030332000000300030030223333030000030300003330320",
    b"3233300000333303330330023000300230033003333330002033300003030030",
    b"3333300000300303030320030300300330030003323030003030300033000030",
    b"3333320013230003333332332000300330023123333233003033300003302000",
    b"2300033333033030003023300020033303203330020023320000002300333300",
    b"3333233000000300330300030000300330000002003030003033300003003330",
]);

static ISO_8859_7_GREEK_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 98, 115, 107, 105, 96, 111, 112, 103, 100, 118, 117, 106, 109, 101, 99,
    114, 120, 104, 102, 97, 108, 116, 110, 119, 113, 121, 253, 253, 253, 253, 253,
    253, 72, 89, 81, 79, 70, 85, 86, 77, 74, 92, 91, 80, 83, 75, 73,
    88, 94, 78, 76, 71, 82, 90, 84, 93, 87, 95, 253, 253, 253, 253, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 49, 253, 253, 255, 255, 253,
    253, 253, 252, 252, 253, 253, 40, 253, 50, 41, 51, 253, 42, 253, 43, 52,
    53, 44, 54, 45, 38, 39, 55, 35, 56, 57, 58, 59, 36, 60, 46, 32,
    37, 61, 255, 33, 31, 62, 63, 64, 47, 48, 65, 66, 15, 19, 20, 16,
    67, 0, 26, 18, 21, 4, 29, 10, 25, 2, 9, 12, 11, 5, 30, 3,
    8, 6, 14, 7, 1, 13, 27, 22, 34, 23, 68, 69, 17, 24, 28, 255,
];

static WINDOWS_1253_GREEK_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 98, 115, 107, 105, 96, 111, 112, 103, 100, 118, 117, 106, 109, 101, 99,
    114, 120, 104, 102, 97, 108, 116, 110, 119, 113, 121, 253, 253, 253, 253, 253,
    253, 72, 89, 81, 79, 70, 85, 86, 77, 74, 92, 91, 80, 83, 75, 73,
    88, 94, 78, 76, 71, 82, 90, 84, 93, 87, 95, 253, 253, 253, 253, 255,
    253, 255, 253, 253, 253, 253, 253, 253, 255, 253, 255, 253, 255, 255, 255, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 255, 253, 255, 253, 255, 255, 255, 255,
    253, 253, 40, 253, 253, 253, 253, 253, 253, 253, 255, 253, 253, 255, 253, 253,
    253, 253, 252, 252, 253, 253, 253, 253, 50, 41, 51, 253, 42, 253, 43, 52,
    53, 44, 54, 45, 38, 39, 55, 35, 56, 57, 58, 59, 36, 60, 46, 32,
    37, 61, 255, 33, 31, 62, 63, 64, 47, 48, 65, 66, 15, 19, 20, 16,
    67, 0, 26, 18, 21, 4, 29, 10, 25, 2, 9, 12, 11, 5, 30, 3,
    8, 6, 14, 7, 1, 13, 27, 22, 34, 23, 68, 69, 17, 24, 28, 255,
];

pub static ISO_8859_7_GREEK: SequenceModel = SequenceModel {
    orders: &ISO_8859_7_GREEK_ORDER,
    precedence: &GREEK_PRECEDENCE,
    typical_positive_ratio: 0.975076,
    charset: Charset::Iso8859_7,
};

pub static WINDOWS_1253_GREEK: SequenceModel = SequenceModel {
    orders: &WINDOWS_1253_GREEK_ORDER,
    precedence: &GREEK_PRECEDENCE,
    typical_positive_ratio: 0.975076,
    charset: Charset::Windows1253,
};

static HEBREW_PRECEDENCE: NibbleTable<512> = NibbleTable::from_digit_rows(&[
    b"3333333333333333333330333300000000000000000000000000000000000000",
    b"3333333333333333332323033010000000000000000000000000000000000000",
    b"3303333333333333333333300000000000000000000000000000000000000000",
    b"3333033300333033033003303220000000000000000000000000000000000000",
    b"3333333333333333333030003000000000000000000000000000000000000000",
    b"3333303333303333323331030000000000000000000000000000000000000000",
    b"3333333332223300020000000000000000000000000000000000000000000000",
    b"3333333330333333033032000000000000000000000000000000000000000000",
    b"3333323330333233333300130000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"3333333333031333332000002000000000000000000000000000000000000000",
    b"3333303333300302303333000000000000000000000000000000000000000000",
    b"3333333333300303330330000020000000000000000000000000000000000000",
    b"3332033000313023033302000000000000000000000000000000000000000000",
    b"3333332330303302300020003000000000000000000000000000000000000000",
    b"3333323333330303000000000000000000000000000000000000000000000000",
    b"3333033000333300000000000000000000000000000000000000000000000000",
    b"3333302301120002100003000000000000000000000000000000000000000000",
    b"3330003220000000330003000000000000000000000000000000000000000000",
    b"3303330320032000200000000000000000000000000000000000000000000000",
    b"3333030330000000020000000000000000000000000000000000000000000000",
    b"3320220030000300000002030000000000000000000000000000000000000000",
    b"2303100300030003000000300000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000",
]);

static WINDOWS_1255_HEBREW_ORDER: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 254, 255, 255, 254, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 253, 253, 253, 253, 253, 253,
    253, 92, 109, 101, 99, 90, 105, 106, 97, 94, 112, 111, 100, 103, 95, 93,
    108, 114, 98, 96, 91, 102, 110, 104, 113, 107, 115, 253, 253, 253, 253, 253,
    253, 66, 83, 75, 73, 64, 79, 80, 71, 68, 86, 85, 74, 77, 69, 67,
    82, 88, 72, 70, 65, 76, 84, 78, 87, 81, 89, 253, 253, 253, 253, 255,
    253, 255, 253, 253, 253, 253, 253, 253, 253, 253, 255, 253, 255, 255, 255, 255,
    255, 253, 253, 253, 253, 253, 253, 253, 253, 253, 255, 253, 255, 255, 255, 255,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 255, 253, 253,
    253, 253, 252, 252, 253, 253, 253, 253, 253, 252, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 255, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 27, 28, 29, 253, 253, 255, 255, 255, 255, 255, 255, 255,
    5, 7, 22, 15, 2, 0, 20, 12, 21, 1, 24, 14, 4, 9, 8, 23,
    13, 18, 11, 25, 16, 26, 19, 17, 3, 10, 6, 255, 255, 255, 255, 255,
];

pub static WINDOWS_1255_HEBREW: SequenceModel = SequenceModel {
    orders: &WINDOWS_1255_HEBREW_ORDER,
    precedence: &HEBREW_PRECEDENCE,
    typical_positive_ratio: 0.975467,
    charset: Charset::Windows1255,
};
