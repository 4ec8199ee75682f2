//! The typed value model: tagged union, homogeneous list, named compound.

use crate::{NbtError, Tag};

/// A typed NBT value.
///
/// The closed tagged union over the twelve value kinds. Scalar and array
/// kinds hold their payload directly; [`NbtList`] and [`NbtCompound`] are
/// the two recursive containers. Values are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    Str(String),
    List(NbtList),
    Compound(NbtCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl NbtValue {
    /// Returns the tag of this value. Never [`Tag::End`].
    pub fn tag(&self) -> Tag {
        match self {
            NbtValue::Byte(_) => Tag::Byte,
            NbtValue::Short(_) => Tag::Short,
            NbtValue::Int(_) => Tag::Int,
            NbtValue::Long(_) => Tag::Long,
            NbtValue::Float(_) => Tag::Float,
            NbtValue::Double(_) => Tag::Double,
            NbtValue::ByteArray(_) => Tag::ByteArray,
            NbtValue::Str(_) => Tag::Str,
            NbtValue::List(_) => Tag::List,
            NbtValue::Compound(_) => Tag::Compound,
            NbtValue::IntArray(_) => Tag::IntArray,
            NbtValue::LongArray(_) => Tag::LongArray,
        }
    }
}

/// An ordered, homogeneous sequence of values sharing one declared tag.
///
/// The declared tag and every element's tag are equal; the invariant is
/// enforced by the constructors, so a constructed list is always valid.
/// An empty list's declared tag is [`Tag::End`] unless set explicitly via
/// [`NbtList::with_tag`].
#[derive(Debug, Clone, PartialEq)]
pub struct NbtList {
    tag: Tag,
    values: Vec<NbtValue>,
}

impl NbtList {
    /// Builds a list whose declared tag is inferred from the first element.
    ///
    /// An empty input yields a list with the [`Tag::End`] sentinel as its
    /// declared element tag. Fails with [`NbtError::HeterogeneousList`] if
    /// any element's tag differs from the first element's.
    pub fn new(values: Vec<NbtValue>) -> Result<Self, NbtError> {
        let tag = values.first().map(NbtValue::tag).unwrap_or(Tag::End);
        Self::with_tag(tag, values)
    }

    /// Builds a list with an explicit declared tag, validating every element.
    pub fn with_tag(tag: Tag, values: Vec<NbtValue>) -> Result<Self, NbtError> {
        for value in &values {
            if value.tag() != tag {
                return Err(NbtError::HeterogeneousList {
                    expected: tag,
                    found: value.tag(),
                });
            }
        }
        Ok(Self { tag, values })
    }

    /// The declared element tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn values(&self) -> &[NbtValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NbtValue> {
        self.values.iter()
    }
}

/// An ordered mapping from unique string names to tagged values.
///
/// Insertion order is preserved and is what the binary codec and the SNBT
/// renderer iterate in; replacing an existing key keeps its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbtCompound {
    entries: Vec<(String, NbtValue)>,
}

impl NbtCompound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. A replaced key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: NbtValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NbtValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NbtValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, NbtValue)> for NbtCompound {
    fn from_iter<T: IntoIterator<Item = (String, NbtValue)>>(iter: T) -> Self {
        let mut compound = NbtCompound::new();
        for (name, value) in iter {
            compound.insert(name, value);
        }
        compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_infers_tag_from_first_element() {
        let list = NbtList::new(vec![NbtValue::Int(1), NbtValue::Int(2)]).unwrap();
        assert_eq!(list.tag(), Tag::Int);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_list_uses_end_sentinel() {
        let list = NbtList::new(Vec::new()).unwrap();
        assert_eq!(list.tag(), Tag::End);
        assert!(list.is_empty());
    }

    #[test]
    fn mixed_tags_fail_at_construction() {
        let err = NbtList::new(vec![NbtValue::Int(1), NbtValue::Byte(2)]).unwrap_err();
        assert_eq!(
            err,
            NbtError::HeterogeneousList {
                expected: Tag::Int,
                found: Tag::Byte,
            }
        );
    }

    #[test]
    fn with_tag_validates_elements() {
        let err = NbtList::with_tag(Tag::Long, vec![NbtValue::Int(1)]).unwrap_err();
        assert!(matches!(err, NbtError::HeterogeneousList { .. }));
        assert!(NbtList::with_tag(Tag::Long, vec![NbtValue::Long(1)]).is_ok());
    }

    #[test]
    fn compound_preserves_insertion_order() {
        let mut compound = NbtCompound::new();
        compound.insert("b", NbtValue::Int(2));
        compound.insert("a", NbtValue::Int(1));
        let keys: Vec<&str> = compound.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn compound_replace_keeps_position() {
        let mut compound = NbtCompound::new();
        compound.insert("a", NbtValue::Int(1));
        compound.insert("b", NbtValue::Int(2));
        compound.insert("a", NbtValue::Int(3));
        let entries: Vec<(&str, &NbtValue)> = compound.iter().collect();
        assert_eq!(entries[0], ("a", &NbtValue::Int(3)));
        assert_eq!(entries[1], ("b", &NbtValue::Int(2)));
        assert_eq!(compound.len(), 2);
    }
}
