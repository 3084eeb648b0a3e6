//! Declarations and the reference card that collects them.
//!
//! A [`Declaration`] is one named slot: its kind, its storage class,
//! and optionally the literal it was initialized with. A
//! [`ReferenceCard`] is an ordered collection of declarations with
//! unique names, plus the built-in `variables` exhibit.

use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};
use crate::scalar::{Literal, ScalarKind, ScalarValue};
use crate::storage::StorageClass;
use crate::utils::to_json::ToJson;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: ScalarKind,
    pub storage: StorageClass,
    pub init: Option<Literal>,
    pub note: Option<String>,
}

impl Declaration {
    /// Builds a declaration, rejecting initializers whose value does
    /// not inhabit the declared kind.
    pub fn new(
        name: impl Into<String>,
        kind: ScalarKind,
        storage: StorageClass,
        init: Option<Literal>,
    ) -> Result<Self> {
        let name = name.into();
        if let Some(lit) = &init {
            let found = lit.value.kind();
            if found != kind {
                return Err(Error::TypeMismatch {
                    name,
                    declared: kind,
                    found,
                });
            }
        }
        Ok(Self {
            name,
            kind,
            storage,
            init,
            note: None,
        })
    }

    pub fn instance(name: impl Into<String>, kind: ScalarKind, init: Literal) -> Result<Self> {
        Self::new(name, kind, StorageClass::Instance, Some(init))
    }
    pub fn class(name: impl Into<String>, kind: ScalarKind, init: Literal) -> Result<Self> {
        Self::new(name, kind, StorageClass::Class, Some(init))
    }
    pub fn read_only(name: impl Into<String>, kind: ScalarKind, init: Literal) -> Result<Self> {
        Self::new(name, kind, StorageClass::ReadOnly, Some(init))
    }
    pub fn local(name: impl Into<String>, kind: ScalarKind, init: Literal) -> Result<Self> {
        Self::new(name, kind, StorageClass::Local, Some(init))
    }

    /// A declaration with no initializer. Whether it still has a value
    /// depends on the storage class.
    pub fn uninitialized(name: impl Into<String>, kind: ScalarKind, storage: StorageClass) -> Self {
        Self {
            name: name.into(),
            kind,
            storage,
            init: None,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn initializer(&self) -> Option<&Literal> {
        self.init.as_ref()
    }

    /// The value this entry holds when read: the initializer if one was
    /// written, the kind's default otherwise. Locals have no default,
    /// so reading an uninitialized local is an error.
    pub fn effective_value(&self) -> Result<ScalarValue> {
        if let Some(lit) = &self.init {
            return Ok(lit.value.clone());
        }
        if self.storage.auto_initialized() {
            return Ok(self.kind.default_value());
        }
        Err(Error::UninitializedLocal(self.name.clone()))
    }
}

impl ToJson for Declaration {
    fn to_json(&self) -> Result<serde_json::Value> {
        let value = match self.effective_value() {
            Ok(v) => v.to_json()?,
            Err(_) => serde_json::Value::Null,
        };
        Ok(json!({
            "name": self.name,
            "kind": self.kind.name(),
            "storage": self.storage.name(),
            "literal": self.init.as_ref().map(|lit| lit.rendered()),
            "value": value,
            "note": self.note,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCard {
    title: String,
    entries: Vec<Declaration>,
}

impl ReferenceCard {
    /// Builds a card, rejecting duplicate names and entries whose
    /// initializer does not match the declared kind.
    pub fn new(title: impl Into<String>, entries: Vec<Declaration>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::DuplicateName(entry.name.clone()));
            }
            if let Some(lit) = &entry.init {
                let found = lit.value.kind();
                if found != entry.kind {
                    return Err(Error::TypeMismatch {
                        name: entry.name.clone(),
                        declared: entry.kind,
                        found,
                    });
                }
            }
        }
        let title = title.into();
        debug!("card {} with {} entries", title, entries.len());
        Ok(Self { title, entries })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Declaration] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn lookup(&self, name: &str) -> Result<&Declaration> {
        self.get(name)
            .ok_or_else(|| Error::UnknownEntry(name.to_string()))
    }

    /// Writes a new value into an entry. Read-only entries refuse, and
    /// the value must inhabit the declared kind. The stored spelling
    /// reverts to decimal.
    pub fn assign(&mut self, name: &str, value: ScalarValue) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::UnknownEntry(name.to_string()))?;
        if !entry.storage.is_reassignable() {
            return Err(Error::ReadOnlyAssignment(name.to_string()));
        }
        let found = value.kind();
        if found != entry.kind {
            return Err(Error::TypeMismatch {
                name: name.to_string(),
                declared: entry.kind,
                found,
            });
        }
        debug!("assign {} = {}", entry.name, value);
        entry.init = Some(Literal::new(value));
        Ok(())
    }

    /// The built-in exhibit: one entry per scalar kind, one per literal
    /// notation, and one per storage class, with the canonical names
    /// and initializers.
    pub fn variables() -> ReferenceCard {
        let entries = vec![
            Declaration {
                name: "number".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::Instance,
                init: Some(Literal::new(0)),
                note: Some("32-bit integers default to 0".into()),
            },
            Declaration {
                name: "hex".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::Instance,
                init: Some(Literal::hex(0x1a)),
                note: Some("0x marks base-16 digits".into()),
            },
            Declaration {
                name: "bin".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::Instance,
                init: Some(Literal::binary(0b11010)),
                note: Some("0b marks base-2 digits".into()),
            },
            Declaration {
                name: "big".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::Instance,
                init: Some(Literal::grouped(1_000_000)),
                note: Some("underscores group digits for readability".into()),
            },
            Declaration {
                name: "b".into(),
                kind: ScalarKind::I8,
                storage: StorageClass::Instance,
                init: Some(Literal::new(0i8)),
                note: Some("8-bit integers default to 0".into()),
            },
            Declaration {
                name: "s".into(),
                kind: ScalarKind::I16,
                storage: StorageClass::Instance,
                init: Some(Literal::new(0i16)),
                note: Some("16-bit integers default to 0".into()),
            },
            Declaration {
                name: "l".into(),
                kind: ScalarKind::I64,
                storage: StorageClass::Instance,
                init: Some(Literal::new(0i64)),
                note: Some("64-bit integers default to 0".into()),
            },
            Declaration {
                name: "f".into(),
                kind: ScalarKind::F32,
                storage: StorageClass::Instance,
                init: Some(Literal::new(0.0f32)),
                note: Some("single-precision floats default to 0.0".into()),
            },
            Declaration {
                name: "d".into(),
                kind: ScalarKind::F64,
                storage: StorageClass::Instance,
                init: Some(Literal::new(0.0f64)),
                note: Some("double-precision floats default to 0.0".into()),
            },
            Declaration {
                name: "bool".into(),
                kind: ScalarKind::Bool,
                storage: StorageClass::Instance,
                init: Some(Literal::new(false)),
                note: Some("booleans default to false".into()),
            },
            Declaration {
                name: "c".into(),
                kind: ScalarKind::Char,
                storage: StorageClass::Instance,
                init: Some(Literal::new('a')),
                note: Some("single quotes spell character literals".into()),
            },
            Declaration {
                name: "cls".into(),
                kind: ScalarKind::Reference,
                storage: StorageClass::Instance,
                init: Some(Literal::new(ScalarValue::type_ref("String"))),
                note: Some("references default to null until one is assigned".into()),
            },
            Declaration {
                name: "another_number".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::Class,
                init: Some(Literal::new(0)),
                note: Some("one slot shared by every instance".into()),
            },
            Declaration {
                name: "yet_another_number".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::ReadOnly,
                init: Some(Literal::new(0)),
                note: Some("takes exactly one assignment".into()),
            },
            Declaration {
                name: "variable".into(),
                kind: ScalarKind::I32,
                storage: StorageClass::Local,
                init: Some(Literal::new(0)),
                note: Some("locals get no default and must be assigned before use".into()),
            },
        ];
        ReferenceCard {
            title: "variables".into(),
            entries,
        }
    }
}

impl ToJson for ReferenceCard {
    fn to_json(&self) -> Result<serde_json::Value> {
        let entries: Vec<_> = self.entries.iter().map(|e| e.to_json()).try_collect()?;
        Ok(json!({
            "title": self.title,
            "entries": entries,
        }))
    }
}
