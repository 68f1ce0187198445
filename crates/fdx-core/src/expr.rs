//! Expression node types.
//!
//! [`Expr`] is deliberately small: the only shapes a finished formula
//! needs are numbers, symbols, sums, products and integer powers.
//! Constructors never reorder or combine children.

use fdx_integers::Rational;
use num_traits::{One, Zero};

use crate::symbol::Symbol;

/// An expression tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// An exact rational constant.
    Number(Rational),

    /// A named symbol.
    Symbol(Symbol),

    /// Sum of terms, printed in the stored order.
    Sum(Vec<Expr>),

    /// Product of factors, printed in the stored order.
    Product(Vec<Expr>),

    /// `base ** exponent` for a non-zero integer exponent.
    Pow(Box<Expr>, i32),
}

impl Expr {
    /// A numeric constant.
    #[must_use]
    pub fn number(value: impl Into<Rational>) -> Self {
        Expr::Number(value.into())
    }

    /// A symbol with the given name.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// A sum; a single term is returned unwrapped and no terms give `0`.
    #[must_use]
    pub fn sum(mut terms: Vec<Expr>) -> Self {
        match terms.len() {
            0 => Expr::Number(Rational::zero()),
            1 => terms.remove(0),
            _ => Expr::Sum(terms),
        }
    }

    /// A product; a single factor is returned unwrapped and no factors give `1`.
    #[must_use]
    pub fn product(mut factors: Vec<Expr>) -> Self {
        match factors.len() {
            0 => Expr::Number(Rational::one()),
            1 => factors.remove(0),
            _ => Expr::Product(factors),
        }
    }

    /// `base ** exponent`; exponent 1 returns `base` and exponent 0 returns `1`.
    #[must_use]
    pub fn pow(base: Expr, exponent: i32) -> Self {
        match exponent {
            0 => Expr::Number(Rational::one()),
            1 => base,
            e => Expr::Pow(Box::new(base), e),
        }
    }

    /// `coefficient * term`, kept as a two-factor product.
    #[must_use]
    pub fn scaled(coefficient: Rational, term: Expr) -> Self {
        Expr::Product(vec![Expr::Number(coefficient), term])
    }

    /// Returns true for atoms (numbers and symbols).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Symbol(_))
    }

    /// Returns true for the literal `0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_zero())
    }

    /// Returns true for the literal `1`.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_one())
    }

    /// The direct children of this node.
    #[must_use]
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Number(_) | Expr::Symbol(_) => &[],
            Expr::Sum(args) | Expr::Product(args) => args,
            Expr::Pow(base, _) => std::slice::from_ref(base.as_ref()),
        }
    }

    /// The first symbol met in a depth-first walk.
    #[must_use]
    pub fn first_symbol(&self) -> Option<&Symbol> {
        match self {
            Expr::Symbol(s) => Some(s),
            Expr::Number(_) => None,
            _ => self.children().iter().find_map(Expr::first_symbol),
        }
    }

    /// All terms of nested sums, left to right.
    #[must_use]
    pub fn additive_terms(&self) -> Vec<&Expr> {
        fn walk<'a>(e: &'a Expr, out: &mut Vec<&'a Expr>) {
            match e {
                Expr::Sum(terms) => terms.iter().for_each(|t| walk(t, out)),
                other => out.push(other),
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Splits a term into its rational coefficient and the remaining factors.
    ///
    /// Nested products are flattened; numbers anywhere among the factors
    /// are multiplied into the coefficient.
    #[must_use]
    pub fn as_coeff_factors(&self) -> (Rational, Vec<&Expr>) {
        fn walk<'a>(e: &'a Expr, coeff: &mut Rational, out: &mut Vec<&'a Expr>) {
            match e {
                Expr::Number(n) => *coeff = &*coeff * n,
                Expr::Product(factors) => factors.iter().for_each(|f| walk(f, coeff, out)),
                other => out.push(other),
            }
        }

        let mut coeff = Rational::one();
        let mut factors = Vec::new();
        walk(self, &mut coeff, &mut factors);
        (coeff, factors)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Expr::Symbol(s)
    }
}

impl From<Rational> for Expr {
    fn from(r: Rational) -> Self {
        Expr::Number(r)
    }
}
