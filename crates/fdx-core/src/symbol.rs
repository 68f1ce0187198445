//! Named symbols and subscript conventions.
//!
//! Sample values are written `f_{s}` where `s` is either the position of
//! the sample in the sorted stencil or the stencil offset itself. The
//! subscript is the only information the term orderer uses, so
//! [`Symbol::subscript`] must read back exactly what
//! [`Symbol::subscripted`] wrote.

use fdx_integers::Rational;
use std::fmt;

/// An opaque named symbol such as `h`, `f_{-1}` or `f^(3)`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    /// A symbol with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The symbol `base_{subscript}`.
    #[must_use]
    pub fn subscripted(base: &str, subscript: &str) -> Self {
        Self {
            name: format!("{base}_{{{subscript}}}"),
        }
    }

    /// The `order`-th derivative symbol of `function`.
    ///
    /// Order 0 is the function itself, `f`; higher orders are `f^(k)`.
    #[must_use]
    pub fn derivative(function: &str, order: u32) -> Self {
        if order == 0 {
            Self::new(function)
        } else {
            Self {
                name: format!("{function}^({order})"),
            }
        }
    }

    /// The symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text between the first `_{` and the following `}`.
    #[must_use]
    pub fn subscript(&self) -> Option<&str> {
        let start = self.name.find("_{")? + 2;
        let len = self.name[start..].find('}')?;
        Some(&self.name[start..start + len])
    }

    /// The subscript parsed as a real number.
    #[must_use]
    pub fn subscript_value(&self) -> Option<f64> {
        self.subscript()?.parse().ok()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Formats a stencil offset for use as a subscript.
///
/// Integral offsets print as integers (`2`, `-1`); every other offset
/// prints with one decimal place (`-1.5`, `0.5`).
#[must_use]
pub fn offset_subscript(offset: &Rational) -> String {
    match offset.to_integer() {
        Some(n) => n.to_string(),
        None => format!("{:.1}", offset.to_f64()),
    }
}
