use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::discriminant;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::scalar::kind::ScalarKind;
use crate::utils::to_json::ToJson;

/// Name of a referenced type, as spelled in source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    pub value: String,
}

impl TypeName {
    pub fn new(v: impl Into<String>) -> Self {
        Self { value: v.into() }
    }
}

impl ToJson for TypeName {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(json!(self.value))
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A concrete scalar value. Each numeric variant keeps the exact width
/// of its kind, so widening never happens silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    TypeRef(TypeName),
    Null,
}

// Floats compare and hash by total order, so values stay usable as map
// keys. 0.0 and -0.0 are distinct, NaN equals itself.
impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        use ScalarValue::*;
        match (self, other) {
            (I8(a), I8(b)) => a == b,
            (I16(a), I16(b)) => a == b,
            (I32(a), I32(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (F32(a), F32(b)) => a.total_cmp(b) == std::cmp::Ordering::Equal,
            (F64(a), F64(b)) => a.total_cmp(b) == std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (TypeRef(a), TypeRef(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}

impl Eq for ScalarValue {}

impl Hash for ScalarValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            ScalarValue::I8(v) => v.hash(state),
            ScalarValue::I16(v) => v.hash(state),
            ScalarValue::I32(v) => v.hash(state),
            ScalarValue::I64(v) => v.hash(state),
            ScalarValue::F32(v) => v.to_bits().hash(state),
            ScalarValue::F64(v) => v.to_bits().hash(state),
            ScalarValue::Bool(v) => v.hash(state),
            ScalarValue::Char(v) => v.hash(state),
            ScalarValue::TypeRef(v) => v.hash(state),
            ScalarValue::Null => {}
        }
    }
}

impl ScalarValue {
    pub fn i8(v: i8) -> ScalarValue {
        ScalarValue::I8(v)
    }
    pub fn i16(v: i16) -> ScalarValue {
        ScalarValue::I16(v)
    }
    pub fn i32(v: i32) -> ScalarValue {
        ScalarValue::I32(v)
    }
    pub fn i64(v: i64) -> ScalarValue {
        ScalarValue::I64(v)
    }
    pub fn f32(v: f32) -> ScalarValue {
        ScalarValue::F32(v)
    }
    pub fn f64(v: f64) -> ScalarValue {
        ScalarValue::F64(v)
    }
    pub fn bool(b: bool) -> ScalarValue {
        ScalarValue::Bool(b)
    }
    pub fn char(c: char) -> ScalarValue {
        ScalarValue::Char(c)
    }
    pub fn type_ref(name: impl Into<String>) -> ScalarValue {
        ScalarValue::TypeRef(TypeName::new(name))
    }
    pub fn null() -> ScalarValue {
        ScalarValue::Null
    }
    pub const NULL: ScalarValue = ScalarValue::Null;

    /// The kind this value inhabits. Null is a reference with nothing
    /// assigned yet, so it reports `Reference`.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::I8(_) => ScalarKind::I8,
            ScalarValue::I16(_) => ScalarKind::I16,
            ScalarValue::I32(_) => ScalarKind::I32,
            ScalarValue::I64(_) => ScalarKind::I64,
            ScalarValue::F32(_) => ScalarKind::F32,
            ScalarValue::F64(_) => ScalarKind::F64,
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::Char(_) => ScalarKind::Char,
            ScalarValue::TypeRef(_) | ScalarValue::Null => ScalarKind::Reference,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Integer payload widened to i64, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::I8(v) => Some(*v as i64),
            ScalarValue::I16(v) => Some(*v as i64),
            ScalarValue::I32(v) => Some(*v as i64),
            ScalarValue::I64(v) => Some(*v),
            _ => None,
        }
    }
}

macro_rules! from_scalar {
    ($variant:ident: $ty:ty) => {
        impl From<$ty> for ScalarValue {
            fn from(v: $ty) -> Self {
                ScalarValue::$variant(v)
            }
        }
    };
}

from_scalar!(I8: i8);
from_scalar!(I16: i16);
from_scalar!(I32: i32);
from_scalar!(I64: i64);
from_scalar!(F32: f32);
from_scalar!(F64: f64);
from_scalar!(Bool: bool);
from_scalar!(Char: char);
from_scalar!(TypeRef: TypeName);

impl ToJson for ScalarValue {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(match self {
            ScalarValue::I8(v) => json!(v),
            ScalarValue::I16(v) => json!(v),
            ScalarValue::I32(v) => json!(v),
            ScalarValue::I64(v) => json!(v),
            ScalarValue::F32(v) => json!(v),
            ScalarValue::F64(v) => json!(v),
            ScalarValue::Bool(v) => json!(v),
            ScalarValue::Char(v) => json!(v.to_string()),
            ScalarValue::TypeRef(v) => v.to_json()?,
            ScalarValue::Null => serde_json::Value::Null,
        })
    }
}

impl Display for ScalarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::I8(v) => write!(f, "{}", v),
            ScalarValue::I16(v) => write!(f, "{}", v),
            ScalarValue::I32(v) => write!(f, "{}", v),
            ScalarValue::I64(v) => write!(f, "{}", v),
            ScalarValue::F32(v) => write_float(f, *v, v.is_finite(), v.fract() == 0.0),
            ScalarValue::F64(v) => write_float(f, *v, v.is_finite(), v.fract() == 0.0),
            ScalarValue::Bool(v) => write!(f, "{}", v),
            ScalarValue::Char(c) => write_char(f, *c),
            ScalarValue::TypeRef(t) => write!(f, "{}", t),
            ScalarValue::Null => write!(f, "null"),
        }
    }
}

// Whole floats print with a trailing `.0` so `0.0` stays visibly a
// float and never reads as the integer `0`.
fn write_float<T: Display>(f: &mut Formatter<'_>, v: T, finite: bool, whole: bool) -> std::fmt::Result {
    if finite && whole {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

fn write_char(f: &mut Formatter<'_>, c: char) -> std::fmt::Result {
    f.write_str("'")?;
    match c {
        '\'' => f.write_str("\\'")?,
        '\\' => f.write_str("\\\\")?,
        '\n' => f.write_str("\\n")?,
        '\r' => f.write_str("\\r")?,
        '\t' => f.write_str("\\t")?,
        '\u{0}' => f.write_str("\\0")?,
        c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32)?,
        c => write!(f, "{}", c)?,
    }
    f.write_str("'")
}
