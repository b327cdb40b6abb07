/// Name of the registration function called by the wrapper.
pub const DEFAULT_DEFINE_CALLEE: &str = "define";

/// Options for one module transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Callee of the wrapper call (`define` by default).
    pub define_callee: String,
    /// When set, the wrapper is emitted as `define("id", [...], function ...)`.
    pub module_id: Option<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            define_callee: DEFAULT_DEFINE_CALLEE.to_string(),
            module_id: None,
        }
    }
}

impl TransformOptions {
    pub fn with_module_id(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = Some(module_id.into());
        self
    }
}
