use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::scalar::value::ScalarValue;
use crate::utils::to_json::ToJson;

/// How an integer literal is spelled in source. All four spellings of
/// the same number denote the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    Decimal,
    Hex,
    Binary,
    Grouped,
}

impl Notation {
    pub const ALL: [Notation; 4] = [
        Notation::Decimal,
        Notation::Hex,
        Notation::Binary,
        Notation::Grouped,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Notation::Decimal => "decimal",
            Notation::Hex => "hex",
            Notation::Binary => "binary",
            Notation::Grouped => "grouped",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Notation::Decimal => "plain base-10 digits",
            Notation::Hex => "base-16 digits behind an 0x prefix",
            Notation::Binary => "base-2 digits behind an 0b prefix",
            Notation::Grouped => "base-10 digits with underscores every three places",
        }
    }
}

impl Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value together with the spelling it was declared with. Rendering
/// reproduces the source form; there is no parsing in the other
/// direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: ScalarValue,
    pub notation: Notation,
}

impl Literal {
    pub fn new(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
            notation: Notation::Decimal,
        }
    }
    pub fn hex(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
            notation: Notation::Hex,
        }
    }
    pub fn binary(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
            notation: Notation::Binary,
        }
    }
    pub fn grouped(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
            notation: Notation::Grouped,
        }
    }
    pub fn with_notation(value: impl Into<ScalarValue>, notation: Notation) -> Self {
        Self {
            value: value.into(),
            notation,
        }
    }

    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl ToJson for Literal {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(json!({
            "notation": self.notation.name(),
            "value": self.value.to_json()?,
            "rendered": self.rendered(),
        }))
    }
}

// Only integers have alternate spellings. Hex and binary render the
// magnitude with a leading sign, matching how negative literals are
// written in source.
impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.notation, self.value.as_i64()) {
            (Notation::Decimal, _) | (_, None) => write!(f, "{}", self.value),
            (Notation::Hex, Some(n)) if n < 0 => write!(f, "-0x{:x}", n.unsigned_abs()),
            (Notation::Hex, Some(n)) => write!(f, "0x{:x}", n),
            (Notation::Binary, Some(n)) if n < 0 => write!(f, "-0b{:b}", n.unsigned_abs()),
            (Notation::Binary, Some(n)) => write!(f, "0b{:b}", n),
            (Notation::Grouped, Some(n)) => f.write_str(&group_digits(n)),
        }
    }
}

fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }
    out
}
