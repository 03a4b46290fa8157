//! Low-level byte primitives shared by the container and label parsers.
//!
//! The codec processes a container whole in memory (see the crate root
//! docs), so unlike a streaming parser every read here is a bounds-checked
//! slice access rather than a fallible `Read` call - there is no partial
//! read to report, only "in bounds" or [`Error::MalformedHeader`].

use crate::{Error, Result};

/// Read a little-endian `u16` at `offset`. Out of bounds is reported via
/// `err`.
#[inline]
pub(crate) fn u16_le(buf: &[u8], offset: usize, err: Error) -> Result<u16> {
    let b: [u8; 2] = buf.get(offset..offset + 2).ok_or(err)?.try_into().unwrap();
    Ok(u16::from_le_bytes(b))
}

/// Read a little-endian `u32` at `offset`.
#[inline]
pub(crate) fn u32_le(buf: &[u8], offset: usize, err: Error) -> Result<u32> {
    let b: [u8; 4] = buf.get(offset..offset + 4).ok_or(err)?.try_into().unwrap();
    Ok(u32::from_le_bytes(b))
}

/// Read a little-endian `i32` at `offset`.
#[inline]
pub(crate) fn i32_le(buf: &[u8], offset: usize, err: Error) -> Result<i32> {
    let b: [u8; 4] = buf.get(offset..offset + 4).ok_or(err)?.try_into().unwrap();
    Ok(i32::from_le_bytes(b))
}

/// Read a little-endian `u64` at `offset`.
#[inline]
pub(crate) fn u64_le(buf: &[u8], offset: usize, err: Error) -> Result<u64> {
    let b: [u8; 8] = buf.get(offset..offset + 8).ok_or(err)?.try_into().unwrap();
    Ok(u64::from_le_bytes(b))
}

/// Append a little-endian `u16` to `out`.
#[inline]
pub(crate) fn push_u16_le(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a little-endian `u32` to `out`.
#[inline]
pub(crate) fn push_u32_le(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a little-endian `i32` to `out`.
#[inline]
pub(crate) fn push_i32_le(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a little-endian `u64` to `out`.
#[inline]
pub(crate) fn push_u64_le(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&v.to_le_bytes());
}
