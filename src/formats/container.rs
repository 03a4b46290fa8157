//! The `.dat` container: header, section table, per-line offset/length/flags
//! entries, and the concatenated ciphertext payload.
//!
//! [`Container::decode`] parses a whole buffer in memory and returns a
//! read-only [`Container`] - no incremental or streaming decode is
//! attempted, matching the original tool's own "load it all, then index
//! into it" design. [`Container::encode`] is the inverse: it walks the
//! encoded code-unit sequences once to size the output buffer exactly, then
//! writes header, entries, and ciphertext in a single pass. The two
//! directions share no mutable state - [`Container`] never rewrites its own
//! bytes in place, so there is nothing to invalidate after construction.

use crate::cipher::{line_cipher, line_key};
use crate::games::Game;
use crate::grammar::{decode_line, encode_line};
use crate::utils::{i32_le, push_i32_le, push_u16_le, push_u32_le, u16_le, u32_le};
use crate::{Error, Result};

const HEADER_LEN: usize = 0x10;
const LINE_ENTRY_LEN: usize = 8;

/// The canonical zero-line container (§4.4.4): a fixed 20-byte blob with
/// `text_sections=1, line_count=0, total_length=4, initial_key=0,
/// section_data_offset=0x10, section_length=4`.
pub const EMPTY: [u8; 20] = [
    0x01, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x00, 0x00,
];

/// A decoded container: a parallel list of strings and their opaque
/// per-line flag words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    /// Decoded line text, in on-disk order.
    pub lines: Vec<String>,
    /// Opaque per-line flag word, preserved byte-for-byte across a round
    /// trip. Same length as `lines`.
    pub flags: Vec<u16>,
}

#[derive(Debug, Clone, Copy)]
struct LineEntry {
    offset: i32,
    length: u16,
    flags: u16,
}

impl Container {
    /// Build a container from an existing pair of parallel sequences.
    ///
    /// # Panics
    /// Panics if `lines.len() != flags.len()` - this is a caller contract,
    /// not a property of untrusted input.
    #[must_use]
    pub fn from_lines(lines: Vec<String>, flags: Vec<u16>) -> Self {
        assert_eq!(lines.len(), flags.len(), "lines and flags length mismatch");
        Self { lines, flags }
    }

    /// Decode a `.dat` buffer whole, validating every header and line-entry
    /// invariant from §4.4.3 before trusting any offset derived from it.
    pub fn decode(data: &[u8], game: Game, remap_characters: bool) -> Result<Self> {
        let header_err = Error::MalformedHeader("buffer shorter than the 16-byte header");
        if data.len() < HEADER_LEN {
            return Err(header_err);
        }

        let text_sections = u16_le(data, 0x00, header_err.clone())?;
        let line_count = u16_le(data, 0x02, header_err.clone())?;
        let total_length = u32_le(data, 0x04, header_err.clone())?;
        let initial_key = u32_le(data, 0x08, header_err.clone())?;
        let sdo = u32_le(data, 0x0C, header_err.clone())? as usize;

        if text_sections != 1 {
            return Err(Error::MalformedHeader("text_sections must be 1"));
        }
        if initial_key != 0 {
            return Err(Error::MalformedHeader("initial_key must be 0"));
        }
        if sdo.checked_add(total_length as usize) != Some(data.len()) {
            return Err(Error::MalformedHeader(
                "section_data_offset + total_length must equal the file length",
            ));
        }

        let section_length = u32_le(data, sdo, header_err.clone())?;
        if section_length != total_length {
            return Err(Error::MalformedHeader(
                "section_length must equal total_length",
            ));
        }

        let entries = read_line_entries(data, sdo, line_count)?;

        let mut lines = Vec::with_capacity(entries.len());
        let mut flags = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.offset < 0 {
                return Err(Error::MalformedLineEntry);
            }
            let start = sdo
                .checked_add(entry.offset as usize)
                .ok_or(Error::MalformedLineEntry)?;
            let byte_len = usize::from(entry.length) * 2;
            let end = start
                .checked_add(byte_len)
                .ok_or(Error::MalformedLineEntry)?;
            if end > sdo + total_length as usize || end > data.len() {
                return Err(Error::MalformedLineEntry);
            }

            let mut ciphertext = data[start..end].to_vec();
            line_cipher(&mut ciphertext, line_key(i))?;
            let units: Vec<u16> = ciphertext
                .chunks_exact(2)
                .map(|w| u16::from_le_bytes([w[0], w[1]]))
                .collect();

            lines.push(decode_line(&units, game, remap_characters));
            flags.push(entry.flags);
        }

        Ok(Self { lines, flags })
    }

    /// Encode this container's lines and flags into a canonical `.dat`
    /// buffer. The output need not byte-match whatever buffer this
    /// container was decoded from (that buffer may carry non-canonical
    /// padding); it is always the minimal, 4-byte-aligned encoding.
    pub fn encode(&self, game: Game, remap_characters: bool) -> Result<Vec<u8>> {
        let mut builder = ContainerBuilder::new();
        for (i, line) in self.lines.iter().enumerate() {
            let units = encode_line(line, game, remap_characters)?;
            // `flags` is normally the same length as `lines` (see
            // `from_lines`), but the fields are public - a caller building a
            // `Container` directly with mismatched lengths must not panic
            // here. Zeros are valid flags (§6), so a missing entry gets 0.
            let flags = self.flags.get(i).copied().unwrap_or(0);
            builder.push_line(i, &units, flags)?;
        }
        builder.finish()
    }
}

fn read_line_entries(data: &[u8], sdo: usize, line_count: u16) -> Result<Vec<LineEntry>> {
    let mut entries = Vec::with_capacity(line_count as usize);
    for i in 0..usize::from(line_count) {
        let base = sdo + 4 + i * LINE_ENTRY_LEN;
        let offset = i32_le(data, base, Error::MalformedLineEntry)?;
        let length = u16_le(data, base + 4, Error::MalformedLineEntry)?;
        let flags = u16_le(data, base + 6, Error::MalformedLineEntry)?;
        entries.push(LineEntry {
            offset,
            length,
            flags,
        });
    }
    Ok(entries)
}

/// Accumulates encoded lines into a single ciphertext payload, inserting
/// 4-byte-alignment padding between runs as it goes, then assembles the
/// final header + entries + payload buffer in one pass.
///
/// Offsets are tracked relative to the start of the ciphertext body while
/// lines are being pushed, since the body's absolute position (which
/// depends on `section_data_offset + 4 + line_count * 8`) isn't known until
/// every line has been seen. [`ContainerBuilder::finish`] rebases them.
struct ContainerBuilder {
    entries: Vec<(u16, u16)>, // (relative length in units, flags) recorded alongside body_offsets
    body_offsets: Vec<usize>,
    payload: Vec<u8>,
}

impl ContainerBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            body_offsets: Vec::new(),
            payload: Vec::new(),
        }
    }

    fn push_line(&mut self, index: usize, units: &[u16], flags: u16) -> Result<()> {
        let mut bytes: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
        line_cipher(&mut bytes, line_key(index))?;

        self.body_offsets.push(self.payload.len());
        self.entries.push((units.len() as u16, flags));
        self.payload.extend_from_slice(&bytes);

        // Insert 2-byte alignment padding before the *next* run if this run
        // left the cursor at an odd multiple of 2 bytes (§4.4.2).
        if self.payload.len() % 4 == 2 {
            self.payload.extend_from_slice(&[0, 0]);
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let line_count = self.entries.len();
        let body_start = 4 + line_count * LINE_ENTRY_LEN;
        let section_length = body_start as u32 + self.payload.len() as u32;
        let sdo: u32 = HEADER_LEN as u32;
        let total_length = section_length;
        let file_length = sdo + total_length;

        let mut out = Vec::with_capacity(file_length as usize);
        push_u16_le(&mut out, 1); // text_sections
        push_u16_le(&mut out, line_count as u16);
        push_u32_le(&mut out, total_length);
        push_u32_le(&mut out, 0); // initial_key
        push_u32_le(&mut out, sdo);
        debug_assert_eq!(out.len(), HEADER_LEN);

        push_u32_le(&mut out, section_length);
        for (i, &(length, flags)) in self.entries.iter().enumerate() {
            let offset = i32::try_from(body_start + self.body_offsets[i])
                .map_err(|_| Error::MalformedLineEntry)?;
            push_i32_le(&mut out, offset);
            push_u16_le(&mut out, length);
            push_u16_le(&mut out, flags);
        }
        out.extend_from_slice(&self.payload);

        Ok(out)
    }
}
