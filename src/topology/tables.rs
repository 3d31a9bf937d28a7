//! Static slot tables, one per deck type.
//!
//! Slot ids are assigned cluster by cluster: a main slot followed by its
//! two side slots. The friend slot always comes last.

use super::frame::Cluster;
use super::{SlotAssignment, SlotEntry, SlotId, SlotRole};

const fn main(id: u16, name: &'static str, row: u8, col: u8) -> SlotEntry {
    SlotEntry::new(SlotId(id), SlotAssignment::Character(name), SlotRole::Main, row, col)
}

const fn side(id: u16, name: &'static str, row: u8, col: u8) -> SlotEntry {
    SlotEntry::new(SlotId(id), SlotAssignment::Character(name), SlotRole::Side, row, col)
}

const fn free(id: u16, role: SlotRole, row: u8, col: u8) -> SlotEntry {
    SlotEntry::new(SlotId(id), SlotAssignment::Free, role, row, col)
}

const fn friend(id: u16, row: u8, col: u8) -> SlotEntry {
    SlotEntry::new(SlotId(id), SlotAssignment::Friend, SlotRole::Main, row, col)
}

const fn cluster(main: u16, sides: &'static [SlotId]) -> Cluster {
    Cluster { main: SlotId(main), sides }
}

/// First-year roster: 1st and 2nd generation.
pub(super) static YEAR1: &[SlotEntry] = &[
    main(0, "Aiko Hoshino", 0, 0),
    side(1, "Aiko Hoshino", 0, 1),
    side(2, "Aiko Hoshino", 0, 2),
    main(3, "Mei Tachibana", 0, 3),
    side(4, "Mei Tachibana", 0, 4),
    side(5, "Mei Tachibana", 0, 5),
    main(6, "Rin Kasuga", 0, 6),
    side(7, "Rin Kasuga", 0, 7),
    side(8, "Rin Kasuga", 0, 8),
    main(9, "Hana Mizuki", 0, 9),
    side(10, "Hana Mizuki", 0, 10),
    side(11, "Hana Mizuki", 0, 11),
    main(12, "Sora Takeda", 1, 0),
    side(13, "Sora Takeda", 1, 1),
    side(14, "Sora Takeda", 1, 2),
    main(15, "Yui Amano", 1, 3),
    side(16, "Yui Amano", 1, 4),
    side(17, "Yui Amano", 1, 5),
    friend(18, 1, 6),
];

pub(super) static YEAR1_FRAME: &[Cluster] = &[
    cluster(0, &[SlotId(1), SlotId(2)]),
    cluster(9, &[SlotId(10), SlotId(11)]),
    cluster(3, &[SlotId(4), SlotId(5)]),
    cluster(12, &[SlotId(13), SlotId(14)]),
    cluster(6, &[SlotId(7), SlotId(8)]),
    cluster(15, &[SlotId(16), SlotId(17)]),
    cluster(18, &[]),
];

/// Second-year roster: 2nd and 3rd generation.
pub(super) static YEAR2: &[SlotEntry] = &[
    main(0, "Hana Mizuki", 0, 0),
    side(1, "Hana Mizuki", 0, 1),
    side(2, "Hana Mizuki", 0, 2),
    main(3, "Sora Takeda", 0, 3),
    side(4, "Sora Takeda", 0, 4),
    side(5, "Sora Takeda", 0, 5),
    main(6, "Yui Amano", 0, 6),
    side(7, "Yui Amano", 0, 7),
    side(8, "Yui Amano", 0, 8),
    main(9, "Kokoro Ishida", 0, 9),
    side(10, "Kokoro Ishida", 0, 10),
    side(11, "Kokoro Ishida", 0, 11),
    main(12, "Nana Fujii", 1, 0),
    side(13, "Nana Fujii", 1, 1),
    side(14, "Nana Fujii", 1, 2),
    main(15, "Tsubaki Mori", 1, 3),
    side(16, "Tsubaki Mori", 1, 4),
    side(17, "Tsubaki Mori", 1, 5),
    main(18, "Ayane Sakaki", 1, 6),
    side(19, "Ayane Sakaki", 1, 7),
    side(20, "Ayane Sakaki", 1, 8),
    friend(21, 1, 9),
];

pub(super) static YEAR2_FRAME: &[Cluster] = &[
    cluster(0, &[SlotId(1), SlotId(2)]),
    cluster(9, &[SlotId(10), SlotId(11)]),
    cluster(3, &[SlotId(4), SlotId(5)]),
    cluster(12, &[SlotId(13), SlotId(14)]),
    cluster(18, &[SlotId(19), SlotId(20)]),
    cluster(6, &[SlotId(7), SlotId(8)]),
    cluster(15, &[SlotId(16), SlotId(17)]),
    cluster(21, &[]),
];

/// Second-year roster featuring Mei Tachibana in place of Sora Takeda.
pub(super) static YEAR2_FEAT_MEI: &[SlotEntry] = &[
    main(0, "Hana Mizuki", 0, 0),
    side(1, "Hana Mizuki", 0, 1),
    side(2, "Hana Mizuki", 0, 2),
    main(3, "Mei Tachibana", 0, 3),
    side(4, "Mei Tachibana", 0, 4),
    side(5, "Mei Tachibana", 0, 5),
    main(6, "Yui Amano", 0, 6),
    side(7, "Yui Amano", 0, 7),
    side(8, "Yui Amano", 0, 8),
    main(9, "Kokoro Ishida", 0, 9),
    side(10, "Kokoro Ishida", 0, 10),
    side(11, "Kokoro Ishida", 0, 11),
    main(12, "Nana Fujii", 1, 0),
    side(13, "Nana Fujii", 1, 1),
    side(14, "Nana Fujii", 1, 2),
    main(15, "Tsubaki Mori", 1, 3),
    side(16, "Tsubaki Mori", 1, 4),
    side(17, "Tsubaki Mori", 1, 5),
    main(18, "Ayane Sakaki", 1, 6),
    side(19, "Ayane Sakaki", 1, 7),
    side(20, "Ayane Sakaki", 1, 8),
    friend(21, 1, 9),
];

pub(super) static YEAR2_FEAT_MEI_FRAME: &[Cluster] = &[
    cluster(0, &[SlotId(1), SlotId(2)]),
    cluster(9, &[SlotId(10), SlotId(11)]),
    cluster(3, &[SlotId(4), SlotId(5)]),
    cluster(12, &[SlotId(13), SlotId(14)]),
    cluster(18, &[SlotId(19), SlotId(20)]),
    cluster(6, &[SlotId(7), SlotId(8)]),
    cluster(15, &[SlotId(16), SlotId(17)]),
    cluster(21, &[]),
];

/// Third-year roster: 3rd and 4th generation plus a free cluster.
pub(super) static YEAR3: &[SlotEntry] = &[
    main(0, "Kokoro Ishida", 0, 0),
    side(1, "Kokoro Ishida", 0, 1),
    side(2, "Kokoro Ishida", 0, 2),
    main(3, "Nana Fujii", 0, 3),
    side(4, "Nana Fujii", 0, 4),
    side(5, "Nana Fujii", 0, 5),
    main(6, "Tsubaki Mori", 0, 6),
    side(7, "Tsubaki Mori", 0, 7),
    side(8, "Tsubaki Mori", 0, 8),
    main(9, "Ayane Sakaki", 0, 9),
    side(10, "Ayane Sakaki", 0, 10),
    side(11, "Ayane Sakaki", 0, 11),
    main(12, "Emi Sakuraba", 1, 0),
    side(13, "Emi Sakuraba", 1, 1),
    side(14, "Emi Sakuraba", 1, 2),
    main(15, "Ran Oda", 1, 3),
    side(16, "Ran Oda", 1, 4),
    side(17, "Ran Oda", 1, 5),
    main(18, "Chiyo Kuroda", 1, 6),
    side(19, "Chiyo Kuroda", 1, 7),
    side(20, "Chiyo Kuroda", 1, 8),
    free(21, SlotRole::Main, 1, 9),
    free(22, SlotRole::Side, 1, 10),
    free(23, SlotRole::Side, 1, 11),
    friend(24, 2, 0),
];

pub(super) static YEAR3_FRAME: &[Cluster] = &[
    cluster(0, &[SlotId(1), SlotId(2)]),
    cluster(12, &[SlotId(13), SlotId(14)]),
    cluster(3, &[SlotId(4), SlotId(5)]),
    cluster(9, &[SlotId(10), SlotId(11)]),
    cluster(15, &[SlotId(16), SlotId(17)]),
    cluster(6, &[SlotId(7), SlotId(8)]),
    cluster(18, &[SlotId(19), SlotId(20)]),
    cluster(21, &[SlotId(22), SlotId(23)]),
    cluster(24, &[]),
];

/// Third-year roster featuring Izumi Katsuragi in place of Ayane Sakaki.
pub(super) static YEAR3_FEAT_IZUMI: &[SlotEntry] = &[
    main(0, "Kokoro Ishida", 0, 0),
    side(1, "Kokoro Ishida", 0, 1),
    side(2, "Kokoro Ishida", 0, 2),
    main(3, "Nana Fujii", 0, 3),
    side(4, "Nana Fujii", 0, 4),
    side(5, "Nana Fujii", 0, 5),
    main(6, "Tsubaki Mori", 0, 6),
    side(7, "Tsubaki Mori", 0, 7),
    side(8, "Tsubaki Mori", 0, 8),
    main(9, "Izumi Katsuragi", 0, 9),
    side(10, "Izumi Katsuragi", 0, 10),
    side(11, "Izumi Katsuragi", 0, 11),
    main(12, "Emi Sakuraba", 1, 0),
    side(13, "Emi Sakuraba", 1, 1),
    side(14, "Emi Sakuraba", 1, 2),
    main(15, "Ran Oda", 1, 3),
    side(16, "Ran Oda", 1, 4),
    side(17, "Ran Oda", 1, 5),
    main(18, "Chiyo Kuroda", 1, 6),
    side(19, "Chiyo Kuroda", 1, 7),
    side(20, "Chiyo Kuroda", 1, 8),
    free(21, SlotRole::Main, 1, 9),
    free(22, SlotRole::Side, 1, 10),
    free(23, SlotRole::Side, 1, 11),
    friend(24, 2, 0),
];

pub(super) static YEAR3_FEAT_IZUMI_FRAME: &[Cluster] = &[
    cluster(0, &[SlotId(1), SlotId(2)]),
    cluster(12, &[SlotId(13), SlotId(14)]),
    cluster(3, &[SlotId(4), SlotId(5)]),
    cluster(15, &[SlotId(16), SlotId(17)]),
    cluster(6, &[SlotId(7), SlotId(8)]),
    cluster(18, &[SlotId(19), SlotId(20)]),
    cluster(9, &[SlotId(10), SlotId(11)]),
    cluster(21, &[SlotId(22), SlotId(23)]),
    cluster(24, &[]),
];
