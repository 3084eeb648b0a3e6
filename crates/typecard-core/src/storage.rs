use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Where a declared name lives and how it may be written.
///
/// Instance entries belong to one object, class entries share a single
/// slot across all of them, read-only entries take exactly one
/// assignment, and locals exist only inside a body and start with no
/// value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageClass {
    Instance,
    Class,
    ReadOnly,
    Local,
}

impl StorageClass {
    pub const ALL: [StorageClass; 4] = [
        StorageClass::Instance,
        StorageClass::Class,
        StorageClass::ReadOnly,
        StorageClass::Local,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StorageClass::Instance => "instance",
            StorageClass::Class => "class",
            StorageClass::ReadOnly => "read-only",
            StorageClass::Local => "local",
        }
    }

    /// One slot shared across every instance.
    pub fn is_shared(&self) -> bool {
        matches!(self, StorageClass::Class)
    }

    /// Whether the entry accepts assignments after initialization.
    pub fn is_reassignable(&self) -> bool {
        !matches!(self, StorageClass::ReadOnly)
    }

    /// Locals never receive a default. Everything else falls back to
    /// the kind's default when no initializer is written.
    pub fn auto_initialized(&self) -> bool {
        !matches!(self, StorageClass::Local)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            StorageClass::Instance => "one slot per object, defaulted when left uninitialized",
            StorageClass::Class => "one slot shared by every object of the type",
            StorageClass::ReadOnly => "assigned once at initialization, immutable afterwards",
            StorageClass::Local => "lives inside a body and must be assigned before use",
        }
    }
}

impl Display for StorageClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
