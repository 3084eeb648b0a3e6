use crate::scalar::value::ScalarValue;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The nine scalar shapes a card entry can have: four signed integer
/// widths, two floating-point widths, booleans, character code units,
/// and reference handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    Char,
    #[serde(rename = "ref")]
    Reference,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 9] = [
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::Bool,
        ScalarKind::Char,
        ScalarKind::Reference,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Bool => "bool",
            ScalarKind::Char => "char",
            ScalarKind::Reference => "ref",
        }
    }

    /// Logical width in bits. References carry no fixed width.
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            ScalarKind::I8 => Some(8),
            ScalarKind::I16 => Some(16),
            ScalarKind::I32 => Some(32),
            ScalarKind::I64 => Some(64),
            ScalarKind::F32 => Some(32),
            ScalarKind::F64 => Some(64),
            ScalarKind::Bool => Some(1),
            ScalarKind::Char => Some(16),
            ScalarKind::Reference => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    pub fn is_signed(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// The value an entry of this kind takes when no initializer is
    /// written: zero for numbers, `false` for booleans, `'\u{0}'` for
    /// characters, null for references.
    pub fn default_value(&self) -> ScalarValue {
        match self {
            ScalarKind::I8 => ScalarValue::I8(0),
            ScalarKind::I16 => ScalarValue::I16(0),
            ScalarKind::I32 => ScalarValue::I32(0),
            ScalarKind::I64 => ScalarValue::I64(0),
            ScalarKind::F32 => ScalarValue::F32(0.0),
            ScalarKind::F64 => ScalarValue::F64(0.0),
            ScalarKind::Bool => ScalarValue::Bool(false),
            ScalarKind::Char => ScalarValue::Char('\u{0}'),
            ScalarKind::Reference => ScalarValue::Null,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ScalarKind::I8 => "8-bit signed two's-complement integer",
            ScalarKind::I16 => "16-bit signed two's-complement integer",
            ScalarKind::I32 => "32-bit signed two's-complement integer",
            ScalarKind::I64 => "64-bit signed two's-complement integer",
            ScalarKind::F32 => "single-precision 32-bit IEEE 754 floating point",
            ScalarKind::F64 => "double-precision 64-bit IEEE 754 floating point",
            ScalarKind::Bool => "truth value, either true or false",
            ScalarKind::Char => "single 16-bit character code unit",
            ScalarKind::Reference => "handle to an object, null until one is assigned",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
