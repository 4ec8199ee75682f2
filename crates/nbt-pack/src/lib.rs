//! NBT (Named Binary Tag) codec, SNBT rendering, and deep-merge utilities.
//!
//! The format is a tagged binary tree: twelve value kinds identified by a
//! one-byte tag, with [`NbtList`] (homogeneous sequence) and
//! [`NbtCompound`] (ordered string-keyed mapping) as the two recursive
//! containers. A complete document is a named root, a `(name, compound)`
//! pair.
//!
//! - [`NbtEncoder`] / [`NbtDecoder`] — the big-endian binary codec,
//!   bit-exact with `DataOutput`-based NBT writers (strings are modified
//!   UTF-8, see [`mutf8`]).
//! - [`to_snbt`] — one-directional human-readable rendering.
//! - [`merge`], [`merge_maps`], [`merge_lists`], [`merge_adding`],
//!   [`merge_seq`] — five pure deep-merge policies over the native form.
//! - [`to_json`] / [`from_json`] — lossy bridge to `serde_json::Value`.
//!
//! Values come in two forms: the native [`Nbt`] (plain containers, no tag
//! annotations) and the typed [`NbtValue`] (tags validated at
//! construction). The codec's convenience entry points accept and produce
//! the native form; the typed form is the seam the registry dispatches on.
//!
//! # Example
//!
//! ```
//! use nbt_pack::{Nbt, NbtDecoder, NbtEncoder};
//!
//! let doc = vec![
//!     ("answer".to_owned(), Nbt::Int(42)),
//!     ("tags".to_owned(), Nbt::List(vec![Nbt::Str("a".into())])),
//! ];
//! let mut encoder = NbtEncoder::new();
//! let bytes = encoder.encode_named_root_native("", &doc).unwrap();
//!
//! let mut decoder = NbtDecoder::new(&bytes);
//! let (name, decoded) = decoder.read_named_root_native().unwrap();
//! assert_eq!(name, "");
//! assert_eq!(decoded, doc);
//! ```

mod decoder;
mod encoder;
mod error;
mod json;
mod merge;
mod native;
mod snbt;
mod tag;
mod value;

pub mod mutf8;
pub mod registry;

pub use decoder::NbtDecoder;
pub use encoder::NbtEncoder;
pub use error::NbtError;
pub use json::{from_json, to_json};
pub use merge::{merge, merge_adding, merge_lists, merge_maps, merge_seq};
pub use native::{compound_to_native, list_to_native, list_to_typed, map_to_typed, Nbt, NbtMap};
pub use snbt::{to_snbt, to_snbt_native};
pub use tag::Tag;
pub use value::{NbtCompound, NbtList, NbtValue};
