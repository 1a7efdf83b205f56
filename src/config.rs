/// Evaluation limits carried by every [`crate::eval::Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting of template instantiations and invocations.
    pub max_depth: usize,
    /// Maximum number of elements a single list or sequence expansion may produce.
    pub max_length: usize,
    /// Maximum nesting of argument lists in the textual notation.
    pub max_nesting: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const DEFAULT_MAX_LENGTH: usize = 1 << 20;
pub const DEFAULT_MAX_NESTING: usize = 64;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_length: DEFAULT_MAX_LENGTH,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl Config {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}
