//! Monomials `x^i * h^k` in the formal variable and the spacing symbol.
//!
//! The exponent of `x` is a natural number; the exponent of `h` may be
//! negative so that quotients such as `x / h^2` stay monomials.

use std::fmt;

/// A monomial `x^x_exp * h^h_exp`.
///
/// The derived ordering compares the `x` exponent first, then the `h`
/// exponent, which is the ascending order [`crate::SparsePoly`] stores
/// its terms in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Monomial {
    x_exp: u32,
    h_exp: i32,
}

impl Monomial {
    /// The monomial 1.
    #[must_use]
    pub const fn one() -> Self {
        Self { x_exp: 0, h_exp: 0 }
    }

    /// The monomial `x`.
    #[must_use]
    pub const fn x() -> Self {
        Self { x_exp: 1, h_exp: 0 }
    }

    /// The monomial `h`.
    #[must_use]
    pub const fn h() -> Self {
        Self { x_exp: 0, h_exp: 1 }
    }

    /// The monomial `x^x_exp * h^h_exp`.
    #[must_use]
    pub const fn new(x_exp: u32, h_exp: i32) -> Self {
        Self { x_exp, h_exp }
    }

    /// The monomial `h^k`.
    #[must_use]
    pub const fn spacing(h_exp: i32) -> Self {
        Self { x_exp: 0, h_exp }
    }

    /// Exponent of the formal variable.
    #[must_use]
    pub const fn x_degree(&self) -> u32 {
        self.x_exp
    }

    /// Exponent of the spacing symbol.
    #[must_use]
    pub const fn h_degree(&self) -> i32 {
        self.h_exp
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub const fn is_one(&self) -> bool {
        self.x_exp == 0 && self.h_exp == 0
    }

    /// Returns true when `x` does not occur.
    #[must_use]
    pub const fn is_free_of_x(&self) -> bool {
        self.x_exp == 0
    }

    /// Product of two monomials.
    #[must_use]
    pub const fn mul(&self, other: &Self) -> Self {
        Self {
            x_exp: self.x_exp + other.x_exp,
            h_exp: self.h_exp + other.h_exp,
        }
    }

    /// Quotient `self / other`, or `None` when `x` would get a negative power.
    ///
    /// Division in `h` always succeeds.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let x_exp = self.x_exp.checked_sub(other.x_exp)?;
        Some(Self {
            x_exp,
            h_exp: self.h_exp - other.h_exp,
        })
    }

    /// Derivative in `x` as `(multiplicity, monomial)`, or `None` for a
    /// monomial free of `x`.
    #[must_use]
    pub fn derivative(&self) -> Option<(u32, Self)> {
        if self.x_exp == 0 {
            None
        } else {
            Some((
                self.x_exp,
                Self {
                    x_exp: self.x_exp - 1,
                    h_exp: self.h_exp,
                },
            ))
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        match self.x_exp {
            0 => {}
            1 => parts.push("x".to_string()),
            e => parts.push(format!("x**{e}")),
        }
        match self.h_exp {
            0 => {}
            1 => parts.push("h".to_string()),
            e => parts.push(format!("h**{e}")),
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join("*"))
        }
    }
}
