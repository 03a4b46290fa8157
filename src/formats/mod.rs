//! On-disk layouts: the `.dat` text container and its `.tbl` label sidecar.
//!
//! Both parsers follow the same conventions:
//!
//! * **Whole-buffer** - a format is decoded from a complete in-memory
//!   `&[u8]`, never streamed from a [`std::io::Read`]. Containers are small
//!   enough that loading one whole is the simpler and faster design.
//! * **Content, not offsets** - [`container::Container`] holds fully
//!   decoded text, not lazy references into the source buffer; there is no
//!   separate reader wrapper.
//!
//! ## Format overview
//!
//! | Module        | Format | Description |
//! |---------------|--------|-------------|
//! | [`container`] | `.dat` | Ciphered, line-oriented text container |
//! | [`label`]     | `.tbl` | Flat `hash -> name` sidecar, Windows-1252 encoded |

pub mod container;
pub mod label;
