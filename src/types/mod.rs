pub mod error;
pub mod record;

pub use error::{Result, StitchError};
pub use record::{EventDoc, MethodDoc, ModuleKind, ModuleRecord, PropertyDoc, Visibility};
