use std::fmt;

pub const BYTE: i64 = 1;

pub const KIB: i64 = BYTE * 1024;
pub const MIB: i64 = KIB * 1024;
pub const GIB: i64 = MIB * 1024;
pub const TIB: i64 = GIB * 1024;
pub const PIB: i64 = TIB * 1024;

pub const KB: i64 = BYTE * 1000;
pub const MB: i64 = KB * 1000;
pub const GB: i64 = MB * 1000;
pub const TB: i64 = GB * 1000;
pub const PB: i64 = TB * 1000;

/// A size unit and its byte multiplier.
///
/// Short letters (`k`, `m`, ...) are binary aliases; decimal scaling is only
/// reachable through the explicit `kb`, `mb`, ... symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Byte,
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
    KB,
    MB,
    GB,
    TB,
    PB,
}

impl Unit {
    /// Candidate units for display, largest first.
    pub const BINARY_DESCENDING: [Unit; 5] =
        [Unit::PiB, Unit::TiB, Unit::GiB, Unit::MiB, Unit::KiB];

    /// Looks up a unit symbol, ignoring ASCII case.
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        let unit = match symbol.to_ascii_lowercase().as_str() {
            "b" | "byte" | "bytes" => Unit::Byte,

            "k" | "kib" => Unit::KiB,
            "m" | "mib" => Unit::MiB,
            "g" | "gib" => Unit::GiB,
            "t" | "tib" => Unit::TiB,
            "p" | "pib" => Unit::PiB,

            "kb" => Unit::KB,
            "mb" => Unit::MB,
            "gb" => Unit::GB,
            "tb" => Unit::TB,
            "pb" => Unit::PB,

            _ => return None,
        };
        Some(unit)
    }

    pub fn multiplier(self) -> i64 {
        match self {
            Unit::Byte => BYTE,
            Unit::KiB => KIB,
            Unit::MiB => MIB,
            Unit::GiB => GIB,
            Unit::TiB => TIB,
            Unit::PiB => PIB,
            Unit::KB => KB,
            Unit::MB => MB,
            Unit::GB => GB,
            Unit::TB => TB,
            Unit::PB => PB,
        }
    }

    /// Canonical display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Byte => "B",
            Unit::KiB => "KiB",
            Unit::MiB => "MiB",
            Unit::GiB => "GiB",
            Unit::TiB => "TiB",
            Unit::PiB => "PiB",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
            Unit::PB => "PB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_explicit_binary_are_aliases() {
        for (short, explicit) in [("k", "kib"), ("m", "mib"), ("g", "gib"), ("t", "tib"), ("p", "pib")] {
            assert_eq!(Unit::from_symbol(short), Unit::from_symbol(explicit));
            assert_eq!(Unit::from_symbol(short).unwrap().multiplier() % 1024, 0);
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Unit::from_symbol("KiB"), Some(Unit::KiB));
        assert_eq!(Unit::from_symbol("GB"), Some(Unit::GB));
        assert_eq!(Unit::from_symbol("Bytes"), Some(Unit::Byte));
        assert_eq!(Unit::from_symbol("zib"), None);
        assert_eq!(Unit::from_symbol(""), None);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Unit::KiB.multiplier(), 1024);
        assert_eq!(Unit::KB.multiplier(), 1000);
        assert_eq!(Unit::PiB.multiplier(), 1 << 50);
        assert_eq!(Unit::PB.multiplier(), 1_000_000_000_000_000);
        assert_eq!(Unit::MiB.to_string(), "MiB");
    }
}
