//! Static per-game variable-code tables.
//!
//! Data only: each entry is `(code, name)`. Names are ASCII identifiers
//! except for a few entries that stand for a single printable character
//! (e.g. the Pokédollar sign at `0xE300`) - those decode and encode as the
//! literal character rather than `[VAR NAME]`. Entries are in declaration
//! order, which matters for the (structurally possible but unobserved)
//! case of two codes sharing one name: the reverse lookup returns the
//! first declared match.
//!
//! LGPE and LZA carry the fullest tables available; SWSH, LA and SV are
//! partial - unmapped codes still round-trip via their 4-hex-digit form
//! (`[VAR 1234]`), so a partial table never blocks a decode or encode.

pub(super) const LGPE: &[(u16, &str)] = &[
    (0xFF00, "COLOR"),
    (0x0100, "TRNAME"),
    (0x0101, "POKNAME"),
    (0x0102, "PKNICK"),
    (0x0103, "TYPE"),
    (0x0104, "SPECIES"),
    (0x0105, "LOCATION"),
    (0x0106, "ABILITY"),
    (0x0107, "MOVE"),
    (0x0108, "ITEM1"),
    (0x0109, "ITEM2"),
    (0x010B, "GERM00"),
    (0x010C, "PKMLVUP"),
    (0x010D, "EVSTAT"),
    (0x010E, "TRCLASS"),
    (0x0110, "GERM01"),
    (0x0112, "BAG"),
    (0x010A, "ITEMBAG"),
    (0x012D, "FORBIDDENCHAR"),
    (0x012E, "MISTERYCAP"),
    (0x01B0, "WBALLTYPE"),
    (0x01B1, "STPKM"),
    (0x01C6, "STYLEITEM"),
    (0x01C9, "PGOTRAINER"),
    (0x01C8, "SUPPORT"),
    (0x01CA, "GIFT00"),
    (0x01CB, "GOPARKLOCAL"),
    (0x01CC, "GOPARKPKM"),
    (0x01CE, "PKMPKEVEE"),
    (0x01CD, "RIVALNAME"),
    (0x019E, "FR|GER|SPA"),
    (0x1000, "NUM0"),
    (0x1001, "NUM10"),
    (0x1002, "FRAITA"),
    (0x1100, "GENDBR"),
    (0x1101, "ITEMPLUR1"),
    (0x1102, "FRAITA01"),
    (0x1104, "GARTFR"),
    (0x1302, "INDEF_ART"),
    (0x1303, "AMOUNT"),
    (0x1400, "ARTFRA"),
    (0x1401, "DARTFRA"),
    (0x1402, "INARTFRA"),
    (0x1403, "VARFRA00"),
    (0x1404, "VARFRA01"),
    (0x1406, "VARFRA02"),
    (0x1408, "VARFRA03"),
    (0x140A, "VARFRA03"), // duplicate of 0x1408 in the ground-truth table
    (0x1500, "VARITA00"),
    (0x1501, "VARITA01"),
    (0x1502, "VARITA02"),
    (0x1503, "VARITA03"),
    (0x1504, "VARITA04"),
    (0x1506, "VARITA05"),
    (0x1508, "VARITA06"),
    (0x150A, "VARITA07"),
    (0x1603, "VARGER00"),
    (0x1606, "VARGER01"),
    (0x1700, "VARESP00"),
    (0x1701, "VARESP01"),
    (0x1702, "VARESP02"),
    (0x1704, "VARESP03"),
    (0x1706, "VARESP04"),
    (0x1708, "VARESP05"),
    (0x1709, "VARESP06"),
    (0x1900, "VARKOR00"),
    (0x0200, "NUM1"),
    (0x0201, "NUM2"),
    (0x0202, "NUM3"),
    (0x0203, "NUM4"),
    (0x0204, "NUM5"),
    (0x0205, "NUM6"),
    (0x0206, "NUM7"),
    (0x0207, "NUM8"),
    (0x0208, "NUM9"),
    (0x0189, "UNKNOWNPOKEMON"),
    (0xBD03, "SYMBOL"),
    (0xBD04, "BTLTPFX"),
    (0xBD06, "BTEFECT"),
    (0xBE05, "SFX"),
    (0xE300, "₽"), // Pokédollar - literal character, not a [VAR] token
];

pub(super) const SWSH: &[(u16, &str)] = &[(0xFF00, "COLOR")];

pub(super) const LA: &[(u16, &str)] = &[(0xFF00, "COLOR")];

pub(super) const SV: &[(u16, &str)] = &[(0xFF00, "COLOR")];

pub(super) const LZA: &[(u16, &str)] = &[
    (0xFF00, "COLOR"),
    (0x0100, "TRNAME"),
    (0x0101, "POKNAME"),
    (0x0102, "PKNICK"),
    (0x0103, "TYPE"),
    (0x0104, "SPECIES"),
    (0x0105, "LOCATION"),
    (0x0106, "ABILITY"),
    (0x0107, "MOVE"),
    (0x0108, "ITEM1"),
    (0x0109, "ITEM2"),
    (0xE300, "₽"),
    (0x1100, "GENDBR"),
];
