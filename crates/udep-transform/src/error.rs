use std::fmt;

pub type Result<T, E = TransformError> = std::result::Result<T, E>;

/// Structural error that aborts a module transform.
///
/// None of these are recoverable: the input module is malformed (or uses a
/// form that has no snapshot equivalent), and the partially rewritten tree is
/// dropped with the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The same local name is bound by two imports, or the same name is
    /// exported twice.
    DuplicateBinding { name: String },
    /// An imported binding is the target of an assignment, update or
    /// `for-in`/`for-of` head.
    IllegalReassignment { name: String },
    /// An import or export form below the module top level.
    MisplacedModuleForm { kind: &'static str },
    /// A top-level module form that cannot be expressed as a value snapshot.
    UnsupportedModuleForm { form: &'static str },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBinding { name } => {
                write!(f, "expected one declaration for `{name}`")
            }
            Self::IllegalReassignment { name } => {
                write!(f, "Cannot reassign imported binding `{name}`")
            }
            Self::MisplacedModuleForm { kind } => {
                write!(f, "Unexpected non-top level {kind}")
            }
            Self::UnsupportedModuleForm { form } => {
                write!(f, "Unsupported module form: {form}")
            }
        }
    }
}

impl std::error::Error for TransformError {}
