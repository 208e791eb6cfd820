//! Site-specific lookup tables.
//!
//! Callers pick banks, card flags and vehicle brands by a small integer; the
//! site expects its own codes. Index 0 always means "random" and maps to the
//! empty string.

/// A lookup table addressed by caller-facing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// Banks offered by the bank account generator
    Bank,
    /// Credit card flags
    CardFlag,
    /// Vehicle brands with their FIPE codes
    VehicleBrand,
}

impl Catalog {
    /// Number of selectable entries, not counting the random slot.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bank => BANKS.len(),
            Self::CardFlag => CARD_FLAGS.len(),
            Self::VehicleBrand => VEHICLE_BRANDS.len(),
        }
    }

    /// Always false; every catalog has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Site code for a caller index. `Some("")` for 0, `None` past the end.
    #[must_use]
    pub fn site_code(&self, index: usize) -> Option<&'static str> {
        if index == 0 {
            return Some("");
        }
        match self {
            Self::Bank => BANKS.get(index - 1).map(|(_, code)| *code),
            Self::CardFlag => CARD_FLAGS.get(index - 1).map(|(_, code)| *code),
            Self::VehicleBrand => VEHICLE_BRANDS.get(index - 1).map(|(_, code)| *code),
        }
    }

    /// Human-readable name for a caller index.
    #[must_use]
    pub fn display_name(&self, index: usize) -> Option<&'static str> {
        if index == 0 {
            return Some("Random");
        }
        match self {
            Self::Bank => BANKS.get(index - 1).map(|(name, _)| *name),
            Self::CardFlag => CARD_FLAGS.get(index - 1).map(|(name, _)| *name),
            Self::VehicleBrand => VEHICLE_BRANDS.get(index - 1).map(|(name, _)| *name),
        }
    }
}

/// `(name, site code)` for indices 1..=5.
pub const BANKS: [(&str, &str); 5] = [
    ("Banco do Brasil", "2"),
    ("Bradesco", "121"),
    ("Citibank", "85"),
    ("Itaú", "120"),
    ("Santander", "151"),
];

/// `(name, site code)` for indices 1..=10.
pub const CARD_FLAGS: [(&str, &str); 10] = [
    ("MasterCard", "master"),
    ("Visa 16 Dígitos", "visa16"),
    ("American Express", "amex"),
    ("Diners Club", "diners"),
    ("Discover", "discover"),
    ("enRoute", "enroute"),
    ("JCB", "jcb"),
    ("Voyager", "voyager"),
    ("HiperCard", "hipercard"),
    ("Aura", "aura"),
];

/// `(name, FIPE brand code)` for indices 1..=87.
pub const VEHICLE_BRANDS: [(&str, &str); 87] = [
    ("Acura", "1"),
    ("Agrale", "2"),
    ("Alfa Romeo", "3"),
    ("AM Gen", "4"),
    ("Asia Motors", "5"),
    ("ASTON MARTIN", "189"),
    ("Audi", "6"),
    ("BMW", "7"),
    ("BRM", "8"),
    ("Buggy", "9"),
    ("Bugre", "123"),
    ("Cadillac", "10"),
    ("CBT Jipe", "11"),
    ("CHANA", "136"),
    ("CHANGAN", "182"),
    ("CHERY", "161"),
    ("Chrysler", "12"),
    ("Citroen", "13"),
    ("Cross Lander", "14"),
    ("Daewoo", "15"),
    ("Daihatsu", "16"),
    ("Dodge", "17"),
    ("EFFA", "147"),
    ("Engesa", "18"),
    ("Envemo", "19"),
    ("Ferrari", "20"),
    ("Fiat", "21"),
    ("Fibravan", "149"),
    ("Ford", "22"),
    ("FOTON", "190"),
    ("Fyber", "170"),
    ("GEELY", "199"),
    ("GM - Chevrolet", "23"),
    ("GREAT WALL", "153"),
    ("Gurgel", "24"),
    ("HAFEI", "152"),
    ("Honda", "25"),
    ("Hyundai", "26"),
    ("Isuzu", "27"),
    ("JAC", "208"),
    ("Jaguar", "28"),
    ("Jeep", "29"),
    ("JINBEI", "154"),
    ("JPX", "30"),
    ("Kia Motors", "31"),
    ("Lada", "32"),
    ("LAMBORGHINI", "171"),
    ("Land Rover", "33"),
    ("Lexus", "34"),
    ("LIFAN", "168"),
    ("LOBINI", "127"),
    ("Lotus", "35"),
    ("Mahindra", "140"),
    ("Maserati", "36"),
    ("Matra", "37"),
    ("Mazda", "38"),
    ("Mercedes-Benz", "39"),
    ("Mercury", "40"),
    ("MG", "167"),
    ("MINI", "156"),
    ("Mitsubishi", "41"),
    ("Miura", "42"),
    ("Nissan", "43"),
    ("Peugeot", "44"),
    ("Plymouth", "45"),
    ("Pontiac", "46"),
    ("Porsche", "47"),
    ("RAM", "185"),
    ("RELY", "186"),
    ("Renault", "48"),
    ("Rolls-Royce", "195"),
    ("Rover", "49"),
    ("Saab", "50"),
    ("Saturn", "51"),
    ("Seat", "52"),
    ("SHINERAY", "183"),
    ("smart", "157"),
    ("SSANGYONG", "125"),
    ("Subaru", "54"),
    ("Suzuki", "55"),
    ("TAC", "165"),
    ("Toyota", "56"),
    ("Troller", "57"),
    ("Volvo", "58"),
    ("VW - VolksWagen", "59"),
    ("Wake", "163"),
    ("Walk", "120"),
];
