//! Character frequency data for the CJK families.
//!
//! Each list holds table orders of the most frequent characters of a family,
//! most frequent first, as computed by the family's order function in
//! [`super::distribution`].
//!
//! Generated by `models/emit.py frequency` from the character lists in
//! `models/frequent_chars.py`. The EUC-TW list reuses the traditional Chinese
//! list, mapped through Big5 onto CNS 11643 plane 1. The hiragana pair
//! categories come from `models/corpus/ja.txt`.

use super::packed::NibbleTable;

/// Most frequent GB2312 characters, by descending frequency.
pub(super) const GB2312_FREQUENT: [u16; 512] = [
    505, 3222, 2482, 214, 1640, 3441, 2298, 3337, 2869, 2628, 3543, 837, 1824, 3619, 1523, 2396,
    458, 2829, 984, 935, 525, 498, 3247, 2558, 2460, 3205, 1360, 367, 1098, 1450, 3213, 1946,
    615, 2439, 1939, 651, 3716, 1918, 504, 3347, 3702, 2947, 3717, 3585, 1953, 938, 659, 1022,
    3752, 1582, 3324, 501, 3055, 2626, 2282, 1177, 3625, 2477, 322, 686, 627, 1328, 1805, 2260,
    665, 3108, 2326, 591, 2737, 2967, 486, 1812, 578, 1855, 2147, 1429, 571, 2707, 711, 1058,
    1309, 974, 3008, 218, 2135, 3016, 3658, 3190, 1580, 3043, 2630, 123, 2177, 1419, 480, 3277,
    3598, 426, 2988, 2464, 2308, 1407, 3540, 3261, 2881, 1603, 2629, 3364, 285, 48, 1123, 2457,
    1866, 527, 856, 418, 3244, 849, 2468, 2234, 1872, 3059, 3581, 2266, 2348, 3343, 901, 536,
    3570, 3216, 2791, 1232, 1626, 814, 1195, 3330, 2861, 999, 3743, 3627, 189, 2898, 2497, 3295,
    3506, 2995, 2748, 2855, 2700, 3571, 1817, 2977, 1218, 120, 1594, 2461, 657, 509, 277, 1115,
    3041, 1153, 3609, 2426, 936, 1178, 2906, 2562, 3417, 1049, 986, 1089, 2687, 465, 1937, 3044,
    170, 1048, 1550, 839, 2475, 2846, 421, 603, 1822, 2301, 284, 2953, 942, 2733, 1265, 652,
    3396, 574, 2438, 2696, 1599, 1143, 133, 3400, 1287, 2551, 1876, 3547, 1750, 381, 3728, 3264,
    838, 2330, 1151, 1467, 2302, 2716, 2096, 2934, 2155, 2697, 1111, 654, 843, 173, 457, 1987,
    161, 2573, 2430, 3725, 985, 540, 2536, 17, 2406, 101, 224, 1286, 677, 2503, 1910, 2642,
    1628, 3440, 799, 1229, 2900, 3751, 1272, 149, 282, 1221, 1165, 905, 2125, 2491, 3588, 503,
    3707, 1877, 2378, 1301, 3595, 1452, 3084, 2744, 2249, 96, 3604, 614, 3053, 2420, 160, 1462,
    1401, 3617, 3502, 1768, 1447, 2567, 2888, 1122, 3160, 2516, 696, 3465, 2724, 54, 2275, 1292,
    454, 911, 694, 2192, 1147, 2994, 1928, 2211, 2263, 2565, 2810, 2996, 2799, 2421, 2472, 2360,
    1714, 1166, 1926, 2090, 3666, 821, 1567, 2244, 1376, 325, 110, 156, 2569, 3514, 786, 1248,
    915, 2807, 2256, 1516, 832, 2816, 1400, 2528, 1673, 863, 2278, 386, 2449, 904, 2230, 1302,
    2209, 3409, 2290, 2465, 1021, 463, 497, 3566, 3426, 3013, 698, 728, 216, 787, 2496, 840,
    792, 3459, 3153, 1607, 335, 3738, 1816, 1162, 302, 2216, 1138, 1651, 751, 1485, 75, 3268,
    2814, 3393, 3291, 2474, 3575, 1313, 2450, 3675, 739, 1675, 3693, 215, 2471, 3468, 1935, 445,
    2839, 3405, 1269, 2639, 474, 3305, 1378, 1753, 3719, 13, 1120, 1684, 117, 181, 1609, 556,
    2427, 2393, 2604, 3613, 2762, 1142, 56, 3079, 1186, 1041, 488, 1043, 320, 2458, 1149, 3568,
    765, 1578, 1495, 3140, 2236, 1155, 1169, 3411, 2473, 771, 188, 2915, 1346, 2976, 2575, 902,
    1113, 610, 1326, 1781, 3578, 2494, 3004, 3412, 2154, 2316, 3530, 3082, 1352, 3469, 3149, 3027,
    319, 2150, 42, 851, 1771, 91, 2079, 2466, 2834, 1024, 260, 2226, 3250, 3454, 3471, 374,
    1982, 3527, 3681, 912, 2965, 40, 1, 1581, 167, 2655, 333, 2753, 1957, 1686, 3288, 1593,
    2498, 3224, 1369, 2752, 3673, 706, 976, 1316, 1674, 3631, 1268, 3667, 3368, 1307, 1437, 1759,
    2225, 2607, 3102, 1645, 2887, 1015, 2989, 2605, 2763, 2481, 233, 2916, 882, 3629, 870, 688,
];

/// Most frequent Big5 characters, by descending frequency.
pub(super) const BIG5_FREQUENT: [u16; 512] = [
    1030, 0, 1271, 65, 6, 348, 8, 395, 591, 169, 2402, 1526, 1519, 66, 741, 23,
    42, 1334, 798, 2020, 347, 766, 165, 3674, 1673, 1459, 2526, 181, 3043, 198, 29, 472,
    3438, 264, 1853, 427, 44, 716, 2088, 930, 2790, 21, 435, 69, 376, 3309, 2716, 1226,
    471, 3246, 265, 3301, 446, 897, 2682, 1603, 3572, 728, 384, 134, 354, 3179, 3755, 197,
    985, 4183, 362, 2420, 330, 2257, 3122, 647, 1988, 1492, 1915, 1379, 840, 111, 94, 4672,
    2867, 360, 48, 2418, 758, 729, 161, 3873, 2256, 125, 361, 246, 1136, 2887, 469, 343,
    210, 2090, 3000, 3433, 135, 1469, 1048, 2997, 2681, 15, 225, 3627, 1092, 599, 4231, 17,
    252, 2296, 91, 401, 55, 53, 737, 2104, 937, 889, 1034, 313, 20, 19, 5015, 4719,
    250, 3045, 219, 2055, 756, 1956, 2889, 268, 2007, 1221, 2461, 1486, 725, 1015, 128, 4477,
    4196, 336, 4421, 131, 5316, 1262, 1410, 1377, 693, 2372, 488, 78, 7, 2736, 2263, 893,
    3034, 54, 3662, 703, 949, 184, 448, 2595, 137, 3262, 338, 344, 1746, 171, 88, 1107,
    1081, 100, 425, 2756, 157, 452, 400, 1216, 1093, 303, 2073, 312, 1724, 2404, 2151, 754,
    1551, 948, 4599, 2577, 282, 108, 143, 1566, 3251, 146, 337, 1780, 4042, 2357, 701, 3189,
    335, 10, 2536, 38, 3670, 2191, 232, 680, 1712, 4871, 1319, 3540, 616, 486, 239, 43,
    5303, 217, 1800, 4585, 459, 3346, 3868, 369, 116, 2505, 62, 2749, 109, 782, 275, 113,
    2875, 315, 2999, 1217, 1986, 1967, 2124, 237, 2502, 302, 1461, 3578, 2607, 230, 1033, 3823,
    3276, 803, 51, 1091, 1253, 481, 2383, 2306, 1993, 1114, 436, 2892, 579, 1036, 1110, 1041,
    641, 996, 1611, 1954, 1394, 206, 75, 2028, 2280, 1681, 1103, 1139, 5248, 272, 1146, 1359,
    3303, 309, 928, 2083, 496, 3378, 5017, 159, 5235, 1229, 155, 2834, 558, 2384, 377, 442,
    3286, 1899, 1145, 1161, 453, 512, 5023, 632, 4202, 2728, 188, 4997, 402, 2082, 3253, 289,
    2378, 3161, 780, 899, 1702, 2173, 5103, 2369, 3739, 314, 3945, 2927, 1624, 5365, 2211, 83,
    95, 1944, 5336, 4978, 1527, 2074, 4185, 1011, 3299, 1815, 1499, 1498, 630, 612, 388, 1690,
    1960, 2412, 695, 4601, 1250, 2313, 631, 4515, 704, 4344, 3050, 954, 943, 587, 4377, 5105,
    872, 86, 1443, 40, 4979, 1085, 221, 4836, 112, 172, 3084, 231, 829, 1232, 800, 365,
    247, 3696, 208, 213, 2487, 3822, 757, 4954, 364, 3001, 4485, 1313, 2455, 483, 2406, 4040,
    2230, 1997, 3582, 4059, 3405, 2904, 418, 3734, 3762, 1069, 5136, 2787, 1177, 278, 1826, 4211,
    865, 4859, 990, 730, 4035, 595, 3731, 1407, 279, 2543, 1765, 1639, 679, 3978, 468, 841,
    147, 4741, 3591, 3517, 130, 2819, 1720, 2848, 4169, 1607, 3096, 2911, 5, 3791, 1385, 3807,
    3573, 307, 11, 185, 2948, 186, 151, 211, 822, 164, 1292, 3693, 933, 389, 2605, 1949,
    3298, 601, 3245, 3819, 5310, 504, 1096, 618, 3878, 4032, 339, 3406, 879, 89, 124, 4234,
    1501, 4841, 562, 1398, 2054, 2841, 3227, 3557, 209, 801, 3293, 974, 3668, 2928, 426, 3210,
    1102, 4404, 4380, 317, 968, 1403, 5201, 4701, 2135, 2941, 1995, 571, 199, 2279, 3489, 895,
];

/// Most frequent CNS 11643 plane 1 characters, by descending frequency.
pub(super) const EUC_TW_FREQUENT: [u16; 512] = [
    1030, 0, 1271, 65, 6, 348, 8, 395, 591, 169, 2402, 1526, 1519, 66, 741, 23,
    42, 1334, 798, 2020, 347, 766, 165, 3674, 1673, 1459, 2526, 181, 3043, 198, 29, 472,
    3438, 264, 1853, 427, 44, 716, 2088, 930, 2790, 21, 435, 69, 376, 3309, 2716, 1226,
    471, 3246, 265, 3301, 446, 897, 2682, 1603, 3572, 728, 384, 134, 354, 3179, 3755, 197,
    985, 4183, 362, 2420, 330, 2257, 3122, 647, 1988, 1492, 1915, 1379, 840, 111, 94, 4672,
    2867, 360, 48, 2418, 758, 729, 161, 3873, 2256, 125, 361, 246, 1136, 2887, 469, 343,
    210, 2090, 3000, 3433, 135, 1469, 1048, 2997, 2681, 15, 225, 3627, 1092, 599, 4231, 17,
    252, 2296, 91, 401, 55, 53, 737, 2104, 937, 889, 1034, 313, 20, 19, 5015, 4719,
    250, 3045, 219, 2055, 756, 1956, 2889, 268, 2007, 1221, 2461, 1486, 725, 1015, 128, 4477,
    4196, 336, 4421, 131, 5316, 1262, 1410, 1377, 693, 2372, 488, 78, 7, 2736, 2263, 893,
    3034, 54, 3662, 703, 949, 184, 448, 2595, 137, 3262, 338, 344, 1746, 171, 88, 1107,
    1081, 100, 425, 2756, 157, 452, 400, 1216, 1093, 303, 2073, 312, 1724, 2404, 2151, 754,
    1551, 948, 4599, 2577, 282, 108, 143, 1566, 3251, 146, 337, 1780, 4042, 2357, 701, 3189,
    335, 10, 2536, 38, 3670, 2191, 232, 680, 1712, 4871, 1319, 3540, 616, 486, 239, 43,
    5303, 217, 1800, 4585, 459, 3346, 3868, 369, 116, 2505, 62, 2749, 109, 782, 275, 113,
    2875, 315, 2999, 1217, 1986, 1967, 2124, 237, 2502, 302, 1461, 3578, 2607, 230, 1033, 3823,
    3276, 803, 51, 1091, 1253, 481, 2383, 2306, 1993, 1114, 436, 2892, 579, 1036, 1110, 1041,
    641, 996, 1611, 1954, 1394, 206, 75, 2028, 2280, 1681, 1103, 1139, 5248, 272, 1146, 1359,
    3303, 309, 928, 2083, 496, 3378, 5017, 159, 5235, 1229, 155, 2834, 558, 2384, 377, 442,
    3286, 1899, 1145, 1161, 453, 512, 5023, 632, 4202, 2728, 188, 4997, 402, 2082, 3253, 289,
    2378, 3161, 780, 899, 1702, 2173, 5103, 2369, 3739, 314, 3945, 2927, 1624, 5365, 2211, 83,
    95, 1944, 5336, 4978, 1527, 2074, 4185, 1011, 3299, 1815, 1499, 1498, 630, 612, 388, 1690,
    1960, 2412, 695, 4601, 1250, 2313, 631, 4515, 704, 4344, 3050, 954, 943, 587, 4377, 5105,
    872, 86, 1443, 40, 4979, 1085, 221, 4836, 112, 172, 3084, 231, 829, 1232, 800, 365,
    247, 3696, 208, 213, 2487, 3822, 757, 4954, 364, 3001, 4485, 1313, 2455, 483, 2406, 4040,
    2230, 1997, 3582, 4059, 3405, 2904, 418, 3734, 3762, 1069, 5136, 2787, 1177, 278, 1826, 4211,
    865, 4859, 990, 730, 4035, 595, 3731, 1407, 279, 2543, 1765, 1639, 679, 3978, 468, 841,
    147, 4741, 3591, 3517, 130, 2819, 1720, 2848, 4169, 1607, 3096, 2911, 5, 3791, 1385, 3807,
    3573, 307, 11, 185, 2948, 186, 151, 211, 822, 164, 1292, 3693, 933, 389, 2605, 1949,
    3298, 601, 3245, 3819, 5310, 504, 1096, 618, 3878, 4032, 339, 3406, 879, 89, 124, 4234,
    1501, 4841, 562, 1398, 2054, 2841, 3227, 3557, 209, 801, 3293, 974, 3668, 2928, 426, 3210,
    1102, 4404, 4380, 317, 968, 1403, 5201, 4701, 2135, 2941, 1995, 571, 199, 2279, 3489, 895,
];

/// Most frequent KS X 1001 syllables, by descending frequency.
pub(super) const EUC_KR_FREQUENT: [u16; 504] = [
    1547, 432, 1542, 409, 1410, 2208, 76, 1530, 0, 1683, 159, 765, 1140, 1104, 703, 490,
    2210, 1561, 450, 422, 1393, 1353, 291, 1549, 1557, 1213, 148, 1256, 1601, 2217, 1550, 646,
    757, 985, 51, 1477, 1595, 542, 1418, 1485, 118, 1651, 117, 1497, 963, 1116, 1594, 859,
    1603, 1572, 308, 2268, 1527, 775, 44, 500, 1153, 87, 1421, 1177, 347, 824, 1685, 1660,
    1126, 69, 1144, 915, 1, 672, 1355, 1258, 1619, 71, 773, 856, 91, 1020, 861, 1510,
    509, 1155, 2211, 2209, 1257, 1260, 1593, 1441, 18, 2, 778, 2291, 831, 1484, 908, 570,
    508, 1403, 1178, 889, 987, 1880, 64, 2048, 2247, 2225, 966, 1813, 2214, 446, 828, 1487,
    112, 12, 474, 171, 2018, 2224, 15, 1555, 1806, 1107, 36, 906, 1851, 1778, 1430, 435,
    2279, 1804, 1469, 2166, 7, 1574, 1262, 1653, 902, 891, 1839, 1562, 1146, 1827, 2253, 539,
    658, 1690, 356, 1419, 150, 437, 294, 1598, 1402, 515, 1454, 89, 2213, 1378, 460, 776,
    602, 205, 2342, 907, 989, 165, 2258, 1119, 917, 1554, 154, 954, 1518, 1848, 2269, 2271,
    2008, 1882, 1358, 964, 132, 9, 2103, 2144, 1532, 2177, 416, 1491, 1812, 1684, 784, 1379,
    690, 893, 1687, 2273, 4, 1253, 2326, 2233, 754, 647, 1016, 654, 1422, 1451, 913, 228,
    163, 40, 546, 770, 1566, 839, 1630, 57, 345, 427, 1345, 681, 676, 677, 682, 695,
    708, 715, 722, 727, 728, 746, 747, 756, 758, 761, 764, 771, 772, 785, 786, 788,
    789, 790, 793, 797, 802, 803, 804, 805, 809, 810, 813, 822, 825, 829, 832, 835,
    837, 838, 840, 851, 858, 870, 879, 892, 898, 901, 903, 909, 912, 916, 923, 931,
    935, 937, 938, 939, 953, 955, 959, 965, 967, 968, 971, 972, 982, 986, 990, 996,
    1023, 1030, 1031, 1034, 1056, 1065, 1084, 1109, 1111, 1112, 1118, 1141, 1142, 1149, 1150, 1157,
    1161, 1164, 1180, 1181, 1186, 1199, 1214, 1215, 1217, 1218, 1220, 1233, 1238, 1247, 1250, 1252,
    1255, 1261, 1263, 1267, 1271, 1333, 1346, 1354, 1356, 1357, 1361, 1362, 1363, 1364, 1368, 1369,
    1370, 1386, 1389, 1394, 1395, 1398, 1401, 1404, 1412, 1425, 1426, 1432, 1434, 1439, 1442, 1443,
    1444, 1446, 1448, 1456, 1462, 1463, 1471, 1478, 1488, 1493, 1495, 1498, 1503, 1516, 1519, 1520,
    1529, 1535, 1548, 1551, 1553, 1556, 1559, 1560, 1563, 1564, 1568, 1569, 1582, 1596, 1597, 1599,
    1602, 1611, 1620, 1621, 1622, 1624, 1625, 1627, 1631, 1640, 1652, 1654, 1675, 1676, 1678, 1679,
    1682, 1689, 1691, 1696, 1697, 1707, 1733, 1770, 1779, 1780, 1781, 1783, 1787, 1788, 1789, 1790,
    1805, 1807, 1810, 1829, 1834, 1849, 1852, 1855, 1860, 1873, 1879, 1881, 1884, 1886, 1889, 1890,
    1910, 1912, 1915, 1920, 1937, 1939, 1940, 1956, 1982, 1984, 1985, 1989, 1997, 1998, 1999, 2000,
    2003, 2004, 2007, 2020, 2021, 2028, 2031, 2041, 2043, 2053, 2058, 2081, 2082, 2085, 2095, 2099,
    2106, 2107, 2115, 2126, 2135, 2149, 2150, 2154, 2155, 2171, 2175, 2180, 2194, 2200, 2203, 2216,
    2218, 2227, 2228, 2230, 2237, 2248, 2250, 2254, 2259, 2260, 2266, 2270, 2280, 2286, 2293, 2301,
    2317, 2324, 2325, 2329, 2334, 2336, 2337, 2346,
];

/// Most frequent JIS X 0208 characters, by descending frequency.
pub(super) const JIS_FREQUENT: [u16; 408] = [
    1, 2, 53, 54, 27, 5, 24, 41, 42, 327, 324, 328, 363, 312, 293, 320,
    319, 321, 304, 357, 302, 285, 292, 323, 356, 347, 306, 283, 316, 355, 287, 300,
    343, 354, 291, 364, 296, 353, 313, 294, 298, 317, 289, 308, 310, 360, 344, 322,
    346, 326, 305, 329, 299, 307, 331, 340, 345, 349, 358, 334, 351, 335, 301, 297,
    332, 309, 338, 311, 341, 330, 342, 333, 336, 339, 315, 318, 348, 350, 352, 282,
    284, 286, 288, 290, 361, 362, 359, 458, 400, 450, 415, 379, 390, 448, 449, 406,
    398, 413, 386, 416, 452, 394, 437, 410, 440, 377, 451, 399, 444, 417, 385, 414,
    378, 430, 428, 382, 438, 442, 396, 388, 429, 423, 391, 424, 446, 426, 381, 411,
    387, 402, 404, 441, 419, 420, 421, 422, 425, 431, 434, 439, 443, 445, 447, 454,
    457, 395, 393, 401, 403, 405, 407, 409, 412, 435, 436, 427, 433, 432, 376, 380,
    384, 460, 461, 3569, 1485, 2336, 2864, 3586, 3172, 2660, 3560, 4007, 3265, 3314, 2679, 2459,
    2537, 2307, 2172, 2145, 2230, 3023, 2937, 2223, 1839, 2794, 3459, 2488, 2352, 2039, 2042, 3571,
    1747, 2321, 1566, 2493, 1707, 3677, 4350, 1625, 4207, 1883, 2739, 2560, 2462, 4358, 2718, 3991,
    2226, 3779, 2712, 2985, 4071, 2991, 2986, 2888, 3695, 3238, 2943, 3420, 2282, 2237, 3441, 4099,
    3878, 2828, 2591, 1628, 3555, 4039, 4019, 3653, 3406, 3929, 1645, 1509, 3518, 4142, 2373, 1936,
    3826, 1514, 1678, 3494, 2529, 2548, 2587, 3680, 2589, 3242, 2013, 3946, 2842, 2801, 1496, 4238,
    1702, 2611, 4276, 4109, 3170, 4073, 3493, 1973, 4101, 3333, 2193, 4228, 3147, 3419, 2608, 3175,
    1462, 3811, 2427, 4184, 3440, 1988, 2249, 2536, 4119, 1451, 2498, 1637, 2917, 3132, 2934, 1443,
    1504, 2839, 1697, 1994, 3877, 2182, 2668, 2038, 2300, 1669, 1695, 3639, 3241, 3504, 2655, 3897,
    3863, 2483, 3801, 2122, 2507, 3512, 2511, 2490, 3300, 1534, 2641, 3171, 2268, 2658, 2850, 4148,
    2254, 2740, 3303, 4262, 2264, 2157, 2058, 1941, 2506, 3094, 2971, 3413, 2167, 3114, 1949, 1749,
    1894, 3264, 3408, 3793, 2570, 3153, 2521, 3119, 2041, 3072, 1542, 2857, 2180, 1552, 1478, 2480,
    1957, 4044, 2581, 2533, 3473, 4116, 1624, 3272, 1881, 2198, 1643, 3638, 1422, 2881, 2652, 2565,
    3919, 3846, 2513, 2340, 1651, 2684, 2967, 2949, 1844, 1613, 2826, 3093, 2640, 1635, 2643, 1559,
    4181, 4254, 3853, 4163, 2595, 4178, 1500, 3566, 3164, 3495, 3316, 3716, 3910, 3446, 3270, 3262,
    3368, 1956, 1970, 2094, 2165, 4016, 2491, 1818,
];

/// Likelihood category (0 to 5) of each hiragana pair, indexed by the order
/// of the first and second kana.
pub(super) static HIRAGANA_CONTEXT: NibbleTable<862> = NibbleTable::from_digit_rows(&[
    b"01010101011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11111111111111111121111111111111111111111111111111111111111111111101010111211111111",
    b"01010101011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11141411111111111111111111111151112315311231242111111111111115111301010111521111111",
    b"01010101011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11111111112211111121112111111111111111231251122111111111111111111101010111111111121",
    b"01010101011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11111111111111111111111112111111111114111111112111111111111113111101010111321111111",
    b"01010101011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11111111111111112111111111112111111111111111111111111111111111111101010211111111111",
    b"11111112111121113111113111211111113211131311111111111111111111111201010143131111121",
    b"12121111111111111111111111113111114212322111111111111111111111111101010122121111111",
    b"11111111111111211111111111111111112112111211111111111111111115111111112112111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111111212111111111111",
    b"11111111111111211111211111111112111111111411141111111111111111111101010113141111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111211111111111111112111121111111111111111112111101010121411111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11121211111211111121111111111111111111251111141111111111111111111101010111112111111",
    b"11111111111111111111113111111111111111111111111111111111111111111101010111111111111",
    b"11121111111111211111111111111111111111111321111111111111111113111101010111131111113",
    b"11111111111111111111111111111111111111111111111111111111111112111101010111111111111",
    b"11141111114111111111111111111151111115111111111211111111111113112121114111121111112",
    b"11111111111111111111111111111111111112111111111111111111111111111111211111211111111",
    b"11111111111111111111111121111111111111211111211111111111111112112101010111311111111",
    b"11111111111121111111111111111111112111111121111111111111111111111101010111111111111",
    b"11111111111211111111111111111111111113121211121111111111111111111101010111111111124",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111211111111111111112111111111111111111111131111111111111111111101010121131111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11121111112321211121111111112122511111141111121111111111112111113101010214111111111",
    b"11111211111111111111211111111111111111131111121111111111111111111101010111111111111",
    b"11111111111311111111111111111112111111111111124111111111111111111111112111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111111111111111111111",
    b"00000000001121211121111111111141210115141000001121111111111110000000000000000000000",
    b"11131111111121114111111111111111111112111111121111111111111111112201010111111111111",
    b"11111111111111211111111111111111111111111111111111111111111111111101010111111111111",
    b"11151111111141411111111111111111111111111111111111111111111111111301010111111111111",
    b"11131111112131111111115141111111111111111121124111112111111111111101010111111111111",
    b"11141111121421111121113111111111111112211121123111111111111111111301010113111111122",
    b"11111111111111111111111111111111111111111111131111111111111111111101010111111111131",
    b"11141111114211411111111112111111112111114111111111111111111111111101010123211111111",
    b"12111111121111211121111121111111111311211211114111111111111111211211221411111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11121111111111111111111111111111111111111111111111111111111112111101010111111111111",
    b"11111111114111111121111111111132111121211211111111111111111211111102010311111111122",
    b"11111111142111111111112121111111112111121211111111111111113112111301010111111111111",
    b"11121111111111111111111111111111111111111111111111111111111111111101010121111111111",
    b"11121111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111112111111111111111111111111111111111111111111111111111111111111111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111111111111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111111111111111111111",
    b"11111111112111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111211111111111111111111111111111111121111111111111111111211111101010111111111111",
    b"11111111111111111111111111111111113111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111125151511112111111311211111111111111111111111101010113111111111",
    b"11111111111111111111111111111111111112111111111111111111111111111111111111111111111",
    b"11111111111111111121111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111121112113111121121111111111111111111101010111111111111",
    b"11141311111111111111112112111111112111111111141111111111111111111101010222111111111",
    b"01010101011111111111112111111111110111111111111111111111111111111101010111111011111",
    b"11111111111211111111111111111111111111111111111111111111111111111201010111111111111",
    b"01010301011112111111111111111111110111111111111111111111111111111101010111111011111",
    b"11111111111111111111111111111111112111111111111111111111111111111101010111111111111",
    b"01010501011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11121411111111211111111111112111112111111111111111111111111111111101010112311111111",
    b"11111111121111311111112112111111112111111211111111111111111111111101010111131111111",
    b"11111111111211111111113111111111111112121121131111111111111115111211111111211111111",
    b"11111111111111111141112111111111111111251211121111111111111111111101010411111111111",
    b"11111111113211111111111111111131111114111111111311111111111114111101010111211111111",
    b"11111211111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"01010101011111111111111111111111110111111111111111111111111111111101010111111011111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11111111111111111111111111111111111111111111111111111111111111111101010111111111111",
    b"11121111111111111111211121111131111111131111111112111111111111111101010111111111111",
    b"01010101011111111111111111111111110111512121111111111111111111111101010111111011121",
]);
