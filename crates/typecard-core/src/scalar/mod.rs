pub mod kind;
pub mod literal;
pub mod value;

pub use kind::ScalarKind;
pub use literal::{Literal, Notation};
pub use value::{ScalarValue, TypeName};
