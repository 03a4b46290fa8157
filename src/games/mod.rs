//! Game selector and per-game variable tables.
//!
//! A [`Game`] is a closed set of five identifiers; selecting one picks the
//! [`VariableTable`] used by [`crate::grammar`] to name (or resolve) the
//! codes embedded in `[VAR ...]` tokens. Tables are read-only `'static`
//! data; the name/code reverse indices and the literal-character index are
//! built once, on first use, and cached - matching the "read-only after
//! construction, built once" discipline the rest of the codec follows for
//! its key and remap tables.

mod tables;

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::{Error, Result};

/// The closed set of supported games. Selects the active [`VariableTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    /// Pokémon: Let's Go, Pikachu! / Let's Go, Eevee!
    Lgpe,
    /// Pokémon Sword / Shield
    Swsh,
    /// Pokémon Legends: Arceus
    La,
    /// Pokémon Scarlet / Violet
    Sv,
    /// Pokémon Legends Z-A
    Lza,
}

impl Game {
    /// The variable table active for this game.
    #[must_use]
    pub fn table(self) -> &'static VariableTable {
        static LGPE: OnceLock<VariableTable> = OnceLock::new();
        static SWSH: OnceLock<VariableTable> = OnceLock::new();
        static LA: OnceLock<VariableTable> = OnceLock::new();
        static SV: OnceLock<VariableTable> = OnceLock::new();
        static LZA: OnceLock<VariableTable> = OnceLock::new();

        match self {
            Game::Lgpe => LGPE.get_or_init(|| VariableTable::new(tables::LGPE)),
            Game::Swsh => SWSH.get_or_init(|| VariableTable::new(tables::SWSH)),
            Game::La => LA.get_or_init(|| VariableTable::new(tables::LA)),
            Game::Sv => SV.get_or_init(|| VariableTable::new(tables::SV)),
            Game::Lza => LZA.get_or_init(|| VariableTable::new(tables::LZA)),
        }
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LGPE" => Ok(Game::Lgpe),
            "SWSH" => Ok(Game::Swsh),
            "LA" => Ok(Game::La),
            "SV" => Ok(Game::Sv),
            "LZA" => Ok(Game::Lza),
            other => Err(Error::UnknownGame(other.to_owned())),
        }
    }
}

/// A per-game `code <-> name` mapping, plus the derived reverse indices.
pub struct VariableTable {
    entries: &'static [(u16, &'static str)],
    by_code: HashMap<u16, &'static str>,
    by_name: OnceLock<HashMap<&'static str, u16>>,
    literal_chars: OnceLock<HashMap<char, u16>>,
}

impl VariableTable {
    fn new(entries: &'static [(u16, &'static str)]) -> Self {
        Self {
            entries,
            by_code: entries.iter().copied().collect(),
            by_name: OnceLock::new(),
            literal_chars: OnceLock::new(),
        }
    }

    fn by_name(&self) -> &HashMap<&'static str, u16> {
        self.by_name.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.entries.len());
            // First entry in declaration order wins on a name collision.
            for &(code, name) in self.entries {
                map.entry(name).or_insert(code);
            }
            map
        })
    }

    fn literal_chars(&self) -> &HashMap<char, u16> {
        self.literal_chars.get_or_init(|| {
            let mut map = HashMap::new();
            for &(code, name) in self.entries {
                let mut chars = name.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    map.entry(c).or_insert(code);
                }
            }
            map
        })
    }

    /// Name for `code`, or `None` if `code` is not in this table.
    #[must_use]
    pub fn name(&self, code: u16) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    /// Name for `code`, falling back to its 4-hex-digit uppercase form.
    #[must_use]
    pub fn name_or_hex(&self, code: u16) -> String {
        self.name(code)
            .map_or_else(|| format!("{code:04X}"), str::to_owned)
    }

    /// Code for a variable `name`. Accepts a table name first, then
    /// `0x`-prefixed or bare 4-hex-digit numeric forms.
    pub fn code(&self, name: &str) -> Result<u16> {
        if let Some(&code) = self.by_name().get(name) {
            return Ok(code);
        }
        let hex = name.strip_prefix("0x").unwrap_or(name);
        u16::from_str_radix(hex, 16).map_err(|_| Error::MalformedVariable(name.to_owned()))
    }

    /// If `code` names a single printable character in this table (e.g. the
    /// Pokédollar sign), that character; otherwise `None`.
    #[must_use]
    pub fn literal_char(&self, code: u16) -> Option<char> {
        let name = self.name(code)?;
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// The table code whose literal-character rendering is `c`, if any.
    #[must_use]
    pub fn code_for_char(&self, c: char) -> Option<u16> {
        self.literal_chars().get(&c).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_five_identifiers() {
        assert_eq!("LGPE".parse(), Ok(Game::Lgpe));
        assert_eq!("SWSH".parse(), Ok(Game::Swsh));
        assert_eq!("LA".parse(), Ok(Game::La));
        assert_eq!("SV".parse(), Ok(Game::Sv));
        assert_eq!("LZA".parse(), Ok(Game::Lza));
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(
            "XYZW".parse::<Game>(),
            Err(Error::UnknownGame("XYZW".to_owned()))
        );
    }

    #[test]
    fn lgpe_resolves_color_both_ways() {
        let table = Game::Lgpe.table();
        assert_eq!(table.name(0xFF00), Some("COLOR"));
        assert_eq!(table.code("COLOR"), Ok(0xFF00));
    }

    #[test]
    fn unknown_code_falls_back_to_hex() {
        let table = Game::Swsh.table();
        assert_eq!(table.name_or_hex(0x9999), "9999");
    }

    #[test]
    fn numeric_fallback_accepts_0x_and_bare_hex() {
        let table = Game::Lgpe.table();
        assert_eq!(table.code("0x1A2B"), Ok(0x1A2B));
        assert_eq!(table.code("1A2B"), Ok(0x1A2B));
    }

    #[test]
    fn pokedollar_is_a_literal_character() {
        let table = Game::Lgpe.table();
        assert_eq!(table.literal_char(0xE300), Some('₽'));
        assert_eq!(table.code_for_char('₽'), Some(0xE300));
    }

    #[test]
    fn ordinary_variable_is_not_a_literal_character() {
        let table = Game::Lgpe.table();
        assert_eq!(table.literal_char(0xFF00), None);
    }
}
