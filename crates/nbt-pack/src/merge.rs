//! Deep-merge operations over native values.
//!
//! All five variants are pure: inputs are never mutated and a new
//! structure is returned. `c` starts as a copy of `a`; keys or indices
//! present only in `b` are added, keys or indices present only in `a` are
//! retained, and on a type mismatch `b`'s value wins. The key order of `a`
//! is preserved, with `b`'s new keys appended.

use crate::native::{Nbt, NbtMap};

fn get<'a>(map: &'a NbtMap, key: &str) -> Option<&'a Nbt> {
    map.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn put(map: &mut NbtMap, key: &str, value: Nbt) {
    match map.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = value,
        None => map.push((key.to_owned(), value)),
    }
}

/// Merges two mappings, recursing only where both sides hold mappings.
/// Lists are opaque leaf values here: `b`'s list wins wholesale.
pub fn merge_maps(a: &NbtMap, b: &NbtMap) -> NbtMap {
    let mut c = a.clone();
    for (key, value) in b {
        let merged = match (get(&c, key), value) {
            (Some(Nbt::Compound(prev)), Nbt::Compound(next)) => {
                Nbt::Compound(merge_maps(prev, next))
            }
            _ => value.clone(),
        };
        put(&mut c, key, merged);
    }
    c
}

/// Merges two sequences by index, recursing only where both elements are
/// sequences. Indices present only in `b` are appended.
pub fn merge_lists(a: &[Nbt], b: &[Nbt]) -> Vec<Nbt> {
    let mut c = a.to_vec();
    for (index, value) in b.iter().enumerate() {
        if index < c.len() {
            c[index] = match (&c[index], value) {
                (Nbt::List(prev), Nbt::List(next)) => Nbt::List(merge_lists(prev, next)),
                _ => value.clone(),
            };
        } else {
            c.push(value.clone());
        }
    }
    c
}

/// Symmetric deep merge of two mappings: recurses into both nested
/// mappings and nested sequences (by index, via [`merge_seq`]).
pub fn merge(a: &NbtMap, b: &NbtMap) -> NbtMap {
    let mut c = a.clone();
    for (key, value) in b {
        let merged = match (get(&c, key), value) {
            (Some(Nbt::Compound(prev)), Nbt::Compound(next)) => Nbt::Compound(merge(prev, next)),
            (Some(Nbt::List(prev)), Nbt::List(next)) => Nbt::List(merge_seq(prev, next)),
            _ => value.clone(),
        };
        put(&mut c, key, merged);
    }
    c
}

/// Like [`merge`], but where both sides hold sequences the result is the
/// concatenation of `a`'s elements followed by `b`'s, with no recursion.
pub fn merge_adding(a: &NbtMap, b: &NbtMap) -> NbtMap {
    let mut c = a.clone();
    for (key, value) in b {
        let merged = match (get(&c, key), value) {
            (Some(Nbt::Compound(prev)), Nbt::Compound(next)) => Nbt::Compound(merge(prev, next)),
            (Some(Nbt::List(prev)), Nbt::List(next)) => {
                Nbt::List(prev.iter().chain(next.iter()).cloned().collect())
            }
            _ => value.clone(),
        };
        put(&mut c, key, merged);
    }
    c
}

/// Symmetric deep merge of two sequences by index: recurses where both
/// elements are sequences or both are mappings; otherwise `b`'s element
/// wins. Indices present only in `b` are appended in order.
pub fn merge_seq(a: &[Nbt], b: &[Nbt]) -> Vec<Nbt> {
    let mut c = a.to_vec();
    for (index, value) in b.iter().enumerate() {
        if index < c.len() {
            c[index] = match (&c[index], value) {
                (Nbt::List(prev), Nbt::List(next)) => Nbt::List(merge_seq(prev, next)),
                (Nbt::Compound(prev), Nbt::Compound(next)) => Nbt::Compound(merge(prev, next)),
                _ => value.clone(),
            };
        } else {
            c.push(value.clone());
        }
    }
    c
}
