//! **dattext** - a codec for a handheld-console RPG's ciphered, line-
//! oriented text container format.
//!
//! A `.dat` file (see [`formats::container`]) holds a header, a table of
//! per-line offsets and flags, and a rolling-XOR-ciphered run of UTF-16-ish
//! code units per line. [`grammar`] decodes those code units into ordinary
//! `String`s with bracketed escapes standing in for variable substitutions
//! and furigana (ruby) annotations; [`formats::label`] reads and writes the
//! `.tbl` sidecar that maps a hash to a human name; [`merge`] joins or
//! splits the decoded text of several containers around a banner line for
//! editing as one flat text file.
//!
//! # Supported formats
//! | Module | Format |
//! |--------|--------|
//! | [`formats::container`] | `.dat` - ciphered, line-oriented text container |
//! | [`formats::label`]     | `.tbl` - flat `hash -> name` sidecar |
//!
//! # Example
//! ```
//! use dattext::{Container, Game};
//!
//! let container = Container::decode(&dattext::formats::container::EMPTY, Game::Lgpe, true)?;
//! assert!(container.lines.is_empty());
//! # Ok::<(), dattext::Error>(())
//! ```

pub mod cipher;
pub mod error;
pub mod formats;
pub mod games;
pub mod grammar;
pub mod merge;
pub(crate) mod remap;
pub(crate) mod utils;

pub use error::{Error, Result};
pub use formats::container::Container;
pub use formats::label::{LabelEntry, LabelTable};
pub use games::Game;
