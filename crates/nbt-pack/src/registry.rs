//! The type registry: a static table mapping each value tag to its binary
//! read, binary write, and SNBT render operations.
//!
//! The table is built at compile time and never mutated, so it is safe to
//! read from any number of threads. All recursive codec and renderer
//! dispatch funnels through [`spec`].

use crate::decoder::NbtDecoder;
use crate::encoder::NbtEncoder;
use crate::snbt;
use crate::value::NbtValue;
use crate::{NbtError, Tag};

/// The operation triple registered for one tag.
#[derive(Debug)]
pub struct TagSpec {
    /// Reads one value of this tag's kind from the decoder's cursor.
    pub read: fn(&mut NbtDecoder) -> Result<NbtValue, NbtError>,
    /// Writes one value of this tag's kind to the encoder's buffer.
    pub write: fn(&mut NbtEncoder, &NbtValue) -> Result<(), NbtError>,
    /// Renders one value of this tag's kind as SNBT.
    pub render: fn(&NbtValue) -> String,
}

/// Looks up the operations for a tag.
///
/// Fails with [`NbtError::UnknownTag`] for [`Tag::End`], which terminates
/// compounds but never tags a real value.
pub fn spec(tag: Tag) -> Result<&'static TagSpec, NbtError> {
    match tag {
        Tag::End => Err(NbtError::UnknownTag(Tag::End as u8)),
        real => Ok(&SPECS[real as usize - 1]),
    }
}

static SPECS: [TagSpec; 12] = [
    TagSpec {
        read: read_byte,
        write: write_byte,
        render: snbt::render_byte,
    },
    TagSpec {
        read: read_short,
        write: write_short,
        render: snbt::render_short,
    },
    TagSpec {
        read: read_int,
        write: write_int,
        render: snbt::render_int,
    },
    TagSpec {
        read: read_long,
        write: write_long,
        render: snbt::render_long,
    },
    TagSpec {
        read: read_float,
        write: write_float,
        render: snbt::render_float,
    },
    TagSpec {
        read: read_double,
        write: write_double,
        render: snbt::render_double,
    },
    TagSpec {
        read: read_byte_array,
        write: write_byte_array,
        render: snbt::render_byte_array,
    },
    TagSpec {
        read: read_str,
        write: write_str,
        render: snbt::render_str,
    },
    TagSpec {
        read: read_list,
        write: write_list,
        render: snbt::render_list,
    },
    TagSpec {
        read: read_compound,
        write: write_compound,
        render: snbt::render_compound,
    },
    TagSpec {
        read: read_int_array,
        write: write_int_array,
        render: snbt::render_int_array,
    },
    TagSpec {
        read: read_long_array,
        write: write_long_array,
        render: snbt::render_long_array,
    },
];

// Read shims: lift the decoder's typed readers into the tagged union.

fn read_byte(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Byte(d.read_byte()?))
}

fn read_short(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Short(d.read_short()?))
}

fn read_int(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Int(d.read_int()?))
}

fn read_long(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Long(d.read_long()?))
}

fn read_float(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Float(d.read_float()?))
}

fn read_double(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Double(d.read_double()?))
}

fn read_byte_array(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::ByteArray(d.read_byte_array()?))
}

fn read_str(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Str(d.read_string()?))
}

fn read_list(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::List(d.read_list()?))
}

fn read_compound(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::Compound(d.read_compound()?))
}

fn read_int_array(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::IntArray(d.read_int_array()?))
}

fn read_long_array(d: &mut NbtDecoder) -> Result<NbtValue, NbtError> {
    Ok(NbtValue::LongArray(d.read_long_array()?))
}

// Write shims. Dispatch is by the value's own tag, so the mismatch arms
// are unreachable through the public surface.

fn write_byte(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Byte(val) => {
            e.write_byte(*val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_short(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Short(val) => {
            e.write_short(*val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_int(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Int(val) => {
            e.write_int(*val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_long(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Long(val) => {
            e.write_long(*val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_float(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Float(val) => {
            e.write_float(*val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_double(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Double(val) => {
            e.write_double(*val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_byte_array(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::ByteArray(val) => {
            e.write_byte_array(val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_str(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Str(val) => e.write_str(val),
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_list(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::List(val) => e.write_list(val),
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_compound(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::Compound(val) => e.write_compound(val),
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_int_array(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::IntArray(val) => {
            e.write_int_array(val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}

fn write_long_array(e: &mut NbtEncoder, v: &NbtValue) -> Result<(), NbtError> {
    match v {
        NbtValue::LongArray(val) => {
            e.write_long_array(val);
            Ok(())
        }
        _ => Err(NbtError::TagMismatch),
    }
}
