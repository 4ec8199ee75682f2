//! SNBT, the human-readable textual form.
//!
//! Rendering is one-directional: there is no parser. Integers carry a type
//! suffix (`b`, `s`, none, `L`, `D`; floats are unsuffixed), strings are
//! quoted verbatim, arrays render inline. Lists of numeric elements render
//! inline too; all other lists and every compound render multi-line with
//! four-space indentation.

use crate::native::Nbt;
use crate::value::NbtValue;
use crate::{registry, NbtError};

const INDENT: &str = "    ";

/// Renders a typed value as SNBT.
pub fn to_snbt(value: &NbtValue) -> String {
    match registry::spec(value.tag()) {
        Ok(spec) => (spec.render)(value),
        // A value's tag is never End, so the registry lookup cannot fail.
        Err(_) => String::new(),
    }
}

/// Renders a native value as SNBT, validating list homogeneity on the way.
pub fn to_snbt_native(value: &Nbt) -> Result<String, NbtError> {
    Ok(to_snbt(&value.to_typed()?))
}

/// Prefixes every line with four spaces. An empty body still yields one
/// indented blank line, so empty containers render as an indented gap.
fn indent(s: &str) -> String {
    if s.is_empty() {
        return INDENT.to_string();
    }
    s.lines()
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_byte(v: &NbtValue) -> String {
    match v {
        NbtValue::Byte(val) => format!("{val}b"),
        _ => String::new(),
    }
}

pub(crate) fn render_short(v: &NbtValue) -> String {
    match v {
        NbtValue::Short(val) => format!("{val}s"),
        _ => String::new(),
    }
}

pub(crate) fn render_int(v: &NbtValue) -> String {
    match v {
        NbtValue::Int(val) => format!("{val}"),
        _ => String::new(),
    }
}

pub(crate) fn render_long(v: &NbtValue) -> String {
    match v {
        NbtValue::Long(val) => format!("{val}L"),
        _ => String::new(),
    }
}

pub(crate) fn render_float(v: &NbtValue) -> String {
    match v {
        NbtValue::Float(val) => format!("{val:?}"),
        _ => String::new(),
    }
}

pub(crate) fn render_double(v: &NbtValue) -> String {
    match v {
        NbtValue::Double(val) => format!("{val:?}D"),
        _ => String::new(),
    }
}

pub(crate) fn render_byte_array(v: &NbtValue) -> String {
    match v {
        NbtValue::ByteArray(val) => {
            let items: Vec<String> = val.iter().map(|b| format!("{}b", *b as i8)).collect();
            format!("[{}]", items.join(", "))
        }
        _ => String::new(),
    }
}

pub(crate) fn render_str(v: &NbtValue) -> String {
    match v {
        NbtValue::Str(val) => format!("\"{val}\""),
        _ => String::new(),
    }
}

pub(crate) fn render_list(v: &NbtValue) -> String {
    match v {
        NbtValue::List(list) => {
            let items: Vec<String> = list.iter().map(to_snbt).collect();
            if list.tag().is_numeric() {
                format!("[{}]", items.join(", "))
            } else {
                format!("[\n{}\n]", indent(&items.join(",\n")))
            }
        }
        _ => String::new(),
    }
}

pub(crate) fn render_compound(v: &NbtValue) -> String {
    match v {
        NbtValue::Compound(compound) => {
            let entries: Vec<String> = compound
                .iter()
                .map(|(name, value)| format!("\"{name}\": {}", to_snbt(value)))
                .collect();
            format!("{{\n{}\n}}", indent(&entries.join(",\n")))
        }
        _ => String::new(),
    }
}

pub(crate) fn render_int_array(v: &NbtValue) -> String {
    match v {
        NbtValue::IntArray(val) => {
            let items: Vec<String> = val.iter().map(|n| format!("{n}")).collect();
            format!("[{}]", items.join(", "))
        }
        _ => String::new(),
    }
}

pub(crate) fn render_long_array(v: &NbtValue) -> String {
    match v {
        NbtValue::LongArray(val) => {
            let items: Vec<String> = val.iter().map(|n| format!("{n}L")).collect();
            format!("[{}]", items.join(", "))
        }
        _ => String::new(),
    }
}
