//! Configuration options for code generation.

/// Configuration options for the code generator.
///
/// # Example
///
/// ```
/// use exprtree_core::compiler::GeneratorOptions;
///
/// let options = GeneratorOptions { max_depth: 256 };
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Maximum nesting depth of the tree being lowered (recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}
