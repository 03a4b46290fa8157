//! The `.tbl` label sidecar: a flat `hash -> name` table, in the legacy
//! Windows-1252 encoding the original tool's platform used for identifiers.
//!
//! A label table carries no relationship to a particular `.dat` container's
//! line order; it is looked up by position (the Nth record corresponds to
//! the Nth line entry in some external convention) or by hash, never by
//! name equality against decoded text.

use encoding_rs::WINDOWS_1252;

use crate::utils::{push_u16_le, push_u32_le, push_u64_le, u16_le, u32_le, u64_le};
use crate::{Error, Result};

const MAGIC: u32 = 0x4254_4841;

/// One label record: a 64-bit hash and its Windows-1252 name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub hash: u64,
    pub name: String,
}

/// A decoded `.tbl` sidecar: an ordered list of [`LabelEntry`] records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    /// Wrap an already-constructed sequence of entries.
    #[must_use]
    pub fn new(entries: Vec<LabelEntry>) -> Self {
        Self { entries }
    }

    /// Decode a `.tbl` buffer whole.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let magic = u32_le(data, 0, Error::LabelShort)?;
        if magic != MAGIC {
            return Err(Error::LabelMagicMismatch);
        }
        let count = u32_le(data, 4, Error::LabelShort)?;

        let mut entries = Vec::with_capacity(count as usize);
        let mut offset = 8usize;
        for _ in 0..count {
            let hash = u64_le(data, offset, Error::LabelShort)?;
            let name_length = u16_le(data, offset + 8, Error::LabelShort)? as usize;
            let name_start = offset + 10;
            let name_end = name_start
                .checked_add(name_length)
                .ok_or(Error::LabelShort)?;
            let raw = data.get(name_start..name_end).ok_or(Error::LabelShort)?;
            let trimmed = trim_trailing_nulls(raw);
            let (name, _, _) = WINDOWS_1252.decode(trimmed);
            entries.push(LabelEntry {
                hash,
                name: name.into_owned(),
            });
            offset = name_end;
        }

        Ok(Self { entries })
    }

    /// Encode to the on-disk `.tbl` layout. Writes the exact Windows-1252
    /// byte length of each name as `name_length`; no padding is added.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        push_u32_le(&mut out, MAGIC);
        push_u32_le(&mut out, self.entries.len() as u32);
        for entry in &self.entries {
            push_u64_le(&mut out, entry.hash);
            let (bytes, _, _) = WINDOWS_1252.encode(&entry.name);
            push_u16_le(&mut out, bytes.len() as u16);
            out.extend_from_slice(&bytes);
        }
        out
    }

    /// Number of entries in this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at on-disk position `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LabelEntry> {
        self.entries.get(index)
    }

    /// The first entry whose hash matches, if any.
    #[must_use]
    pub fn find_by_hash(&self, hash: u64) -> Option<&LabelEntry> {
        self.entries.iter().find(|e| e.hash == hash)
    }

    /// Iterate entries in on-disk order.
    pub fn iter(&self) -> impl Iterator<Item = &LabelEntry> {
        self.entries.iter()
    }
}

fn trim_trailing_nulls(raw: &[u8]) -> &[u8] {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &raw[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabelTable {
        LabelTable::new(vec![
            LabelEntry {
                hash: 0x1122_3344_5566_7788,
                name: "Hello".to_owned(),
            },
            LabelEntry {
                hash: 0,
                name: String::new(),
            },
        ])
    }

    #[test]
    fn round_trips_through_bytes() {
        let table = sample();
        let bytes = table.encode();
        let decoded = LabelTable::decode(&bytes).unwrap();
        assert_eq!(decoded, table);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = sample().encode();
        bytes[0] ^= 0xFF;
        assert_eq!(LabelTable::decode(&bytes), Err(Error::LabelMagicMismatch));
    }

    #[test]
    fn rejects_truncated_buffer() {
        let bytes = sample().encode();
        assert_eq!(
            LabelTable::decode(&bytes[..bytes.len() - 2]),
            Err(Error::LabelShort)
        );
    }

    #[test]
    fn tolerates_null_padded_names_on_read() {
        // Hand-build one record with a name field padded past its content.
        let mut bytes = Vec::new();
        push_u32_le(&mut bytes, MAGIC);
        push_u32_le(&mut bytes, 1);
        push_u64_le(&mut bytes, 42);
        push_u16_le(&mut bytes, 8);
        bytes.extend_from_slice(b"Hi\0\0\0\0\0\0");

        let table = LabelTable::decode(&bytes).unwrap();
        assert_eq!(table.get(0).unwrap().name, "Hi");
    }

    #[test]
    fn find_by_hash_locates_entry() {
        let table = sample();
        assert_eq!(
            table.find_by_hash(0x1122_3344_5566_7788).map(|e| &e.name),
            Some(&"Hello".to_owned())
        );
        assert!(table.find_by_hash(0xDEAD).is_none());
    }

    #[test]
    fn cp1252_round_trips_extended_characters() {
        let table = LabelTable::new(vec![LabelEntry {
            hash: 1,
            name: "café".to_owned(),
        }]);
        let bytes = table.encode();
        let decoded = LabelTable::decode(&bytes).unwrap();
        assert_eq!(decoded.get(0).unwrap().name, "café");
    }
}
