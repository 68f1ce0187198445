//! Plain text rendering.
//!
//! The format follows the usual computer algebra conventions:
//! `(f_{-2} - 8*f_{-1} + 8*f_{1} - f_{2})/(12*h)`, `-f^(3)*h**2/6`.
//! A term is split into a sign, a numerator and a denominator; negative
//! powers and the denominator of the rational coefficient go below the
//! line. Terms are printed in stored order.

use fdx_integers::{Integer, Rational};
use num_traits::One;
use std::fmt;

use crate::expr::Expr;

/// A term split into sign, numerator and denominator.
pub(crate) struct Split<'a> {
    pub negative: bool,
    pub numer_coeff: Integer,
    pub denom_coeff: Integer,
    pub numer: Vec<(&'a Expr, i32)>,
    pub denom: Vec<(&'a Expr, i32)>,
}

impl<'a> Split<'a> {
    pub(crate) fn of(term: &'a Expr) -> Self {
        let (coeff, factors): (Rational, Vec<&Expr>) = term.as_coeff_factors();
        let mut numer = Vec::new();
        let mut denom = Vec::new();

        for factor in factors {
            match factor {
                Expr::Pow(base, e) if *e < 0 => denom.push((base.as_ref(), -*e)),
                Expr::Pow(base, e) => numer.push((base.as_ref(), *e)),
                other => numer.push((other, 1)),
            }
        }

        Self {
            negative: coeff.is_negative(),
            numer_coeff: coeff.numerator().abs(),
            denom_coeff: coeff.denominator(),
            numer,
            denom,
        }
    }

    /// Whether the numerator coefficient must be written out.
    pub(crate) fn shows_numer_coeff(&self) -> bool {
        !self.numer_coeff.is_one() || self.numer.is_empty()
    }

    /// Number of items written below the line.
    pub(crate) fn denom_len(&self) -> usize {
        usize::from(!self.denom_coeff.is_one()) + self.denom.len()
    }
}

fn base_text(base: &Expr) -> String {
    match base {
        Expr::Symbol(s) => s.name().to_string(),
        Expr::Number(n) if !n.is_negative() && n.is_integer() => n.to_string(),
        other => format!("({})", text(other)),
    }
}

fn power_text(base: &Expr, e: i32) -> String {
    if e == 1 {
        base_text(base)
    } else {
        format!("{}**{e}", base_text(base))
    }
}

/// Renders a term without its sign.
fn magnitude_text(split: &Split<'_>) -> String {
    let mut numer = Vec::with_capacity(split.numer.len() + 1);
    if split.shows_numer_coeff() {
        numer.push(split.numer_coeff.to_string());
    }
    numer.extend(split.numer.iter().map(|(b, e)| power_text(b, *e)));
    let numer = numer.join("*");

    let mut denom = Vec::with_capacity(split.denom.len() + 1);
    if !split.denom_coeff.is_one() {
        denom.push(split.denom_coeff.to_string());
    }
    denom.extend(split.denom.iter().map(|(b, e)| power_text(b, *e)));

    match split.denom_len() {
        0 => numer,
        1 => format!("{numer}/{}", denom.join("*")),
        _ => format!("{numer}/({})", denom.join("*")),
    }
}

/// Renders an expression as plain text.
#[must_use]
pub fn text(expr: &Expr) -> String {
    match expr {
        Expr::Sum(_) => {
            let mut out = String::new();
            for (i, term) in expr.additive_terms().into_iter().enumerate() {
                let split = Split::of(term);
                match (i, split.negative) {
                    (0, true) => out.push('-'),
                    (0, false) => {}
                    (_, true) => out.push_str(" - "),
                    (_, false) => out.push_str(" + "),
                }
                out.push_str(&magnitude_text(&split));
            }
            out
        }
        Expr::Symbol(s) => s.name().to_string(),
        _ => {
            let split = Split::of(expr);
            let body = magnitude_text(&split);
            if split.negative {
                format!("-{body}")
            } else {
                body
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text(self))
    }
}
