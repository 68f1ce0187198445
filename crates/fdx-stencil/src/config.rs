//! Derivation settings.

/// No formula can be derived from fewer points than this.
pub const MIN_WIDTH: usize = 2;

/// Names and limits shared by every derivation.
///
/// The free functions in this crate use [`Config::default`]; the `*_with`
/// variants take an explicit configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the grid spacing symbol.
    pub spacing: String,
    /// Base name of the sampled function.
    pub function: String,
    /// Smallest accepted stencil width. Values below [`MIN_WIDTH`] are
    /// treated as [`MIN_WIDTH`].
    pub min_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: "h".to_string(),
            function: "f".to_string(),
            min_width: MIN_WIDTH,
        }
    }
}

impl Config {
    /// Uses `spacing` as the spacing symbol.
    #[must_use]
    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Uses `function` as the sampled function name.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    /// Requires at least `min_width` points, and never fewer than
    /// [`MIN_WIDTH`].
    #[must_use]
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width.max(MIN_WIDTH);
        self
    }

    /// The width actually enforced by validation.
    #[must_use]
    pub fn required_width(&self) -> usize {
        self.min_width.max(MIN_WIDTH)
    }
}

/// How a finished equation is assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquationOptions {
    /// Order terms by stencil subscript.
    pub sort: bool,
    /// Keep terms whose coefficient is zero.
    pub keep_zero: bool,
}

impl Default for EquationOptions {
    fn default() -> Self {
        Self {
            sort: true,
            keep_zero: false,
        }
    }
}

impl EquationOptions {
    /// Enables or disables subscript ordering.
    #[must_use]
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Enables or disables zero-coefficient terms.
    #[must_use]
    pub fn keep_zero(mut self, keep_zero: bool) -> Self {
        self.keep_zero = keep_zero;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.spacing, "h");
        assert_eq!(config.function, "f");
        assert_eq!(config.min_width, 2);

        let options = EquationOptions::default();
        assert!(options.sort);
        assert!(!options.keep_zero);
    }

    #[test]
    fn test_builders() {
        let config = Config::default().with_spacing("dx").with_function("u").with_min_width(3);
        assert_eq!(config.spacing, "dx");
        assert_eq!(config.function, "u");
        assert_eq!(config.min_width, 3);
    }

    #[test]
    fn test_min_width_floor() {
        assert_eq!(Config::default().with_min_width(0).min_width, MIN_WIDTH);
        assert_eq!(Config::default().with_min_width(1).required_width(), MIN_WIDTH);

        let config = Config {
            min_width: 0,
            ..Config::default()
        };
        assert_eq!(config.required_width(), MIN_WIDTH);
    }
}
