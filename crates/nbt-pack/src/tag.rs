//! The one-byte tag discriminant of the NBT wire format.

/// One-byte discriminant identifying a value's kind.
///
/// `End` (0) is the compound terminator and is never the tag of a real
/// value; it doubles as the declared element tag of an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    Str = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl Tag {
    /// Maps a wire byte to its tag, or `None` for bytes outside 0..=12.
    pub fn from_u8(byte: u8) -> Option<Tag> {
        Some(match byte {
            0 => Tag::End,
            1 => Tag::Byte,
            2 => Tag::Short,
            3 => Tag::Int,
            4 => Tag::Long,
            5 => Tag::Float,
            6 => Tag::Double,
            7 => Tag::ByteArray,
            8 => Tag::Str,
            9 => Tag::List,
            10 => Tag::Compound,
            11 => Tag::IntArray,
            12 => Tag::LongArray,
            _ => return None,
        })
    }

    /// True for the six numeric primitive tags (Byte..=Double).
    ///
    /// Lists of numeric elements render inline in SNBT; everything else
    /// renders multi-line.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Tag::Byte | Tag::Short | Tag::Int | Tag::Long | Tag::Float | Tag::Double
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_roundtrips_all_tags() {
        for byte in 0u8..=12 {
            let tag = Tag::from_u8(byte).unwrap();
            assert_eq!(tag as u8, byte);
        }
    }

    #[test]
    fn from_u8_rejects_out_of_range() {
        assert_eq!(Tag::from_u8(13), None);
        assert_eq!(Tag::from_u8(0xff), None);
    }

    #[test]
    fn numeric_tags() {
        assert!(Tag::Byte.is_numeric());
        assert!(Tag::Double.is_numeric());
        assert!(!Tag::ByteArray.is_numeric());
        assert!(!Tag::Str.is_numeric());
        assert!(!Tag::List.is_numeric());
        assert!(!Tag::End.is_numeric());
    }
}
