//! LaTeX rendering.

use crate::display::Split;
use crate::expr::Expr;
use crate::symbol::Symbol;

fn symbol_latex(s: &Symbol) -> String {
    // f^(3) -> f^{(3)}
    match s.name().split_once("^(") {
        Some((base, rest)) => format!("{base}^{{({rest}}}"),
        None => s.name().to_string(),
    }
}

fn base_latex(base: &Expr) -> String {
    match base {
        Expr::Symbol(s) => symbol_latex(s),
        Expr::Number(n) if !n.is_negative() && n.is_integer() => n.to_string(),
        other => format!("\\left({}\\right)", latex(other)),
    }
}

fn power_latex(base: &Expr, e: i32) -> String {
    if e == 1 {
        base_latex(base)
    } else {
        format!("{}^{{{e}}}", base_latex(base))
    }
}

fn magnitude_latex(split: &Split<'_>) -> String {
    let lone_sum = split.numer.len() == 1
        && !split.shows_numer_coeff()
        && split.denom_len() > 0
        && matches!(split.numer[0], (Expr::Sum(_), 1));

    let numer = if lone_sum {
        latex(split.numer[0].0)
    } else {
        let mut items = Vec::with_capacity(split.numer.len() + 1);
        if split.shows_numer_coeff() {
            items.push(split.numer_coeff.to_string());
        }
        items.extend(split.numer.iter().map(|(b, e)| power_latex(b, *e)));
        items.join(" ")
    };

    if split.denom_len() == 0 {
        return numer;
    }

    let mut denom = Vec::with_capacity(split.denom.len() + 1);
    if !num_traits::One::is_one(&split.denom_coeff) {
        denom.push(split.denom_coeff.to_string());
    }
    denom.extend(split.denom.iter().map(|(b, e)| power_latex(b, *e)));

    format!("\\frac{{{numer}}}{{{}}}", denom.join(" "))
}

/// Renders an expression as LaTeX, keeping the stored term order.
#[must_use]
pub fn latex(expr: &Expr) -> String {
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
                out.push_str(&magnitude_latex(&split));
            }
            out
        }
        Expr::Symbol(s) => symbol_latex(s),
        _ => {
            let split = Split::of(expr);
            let body = magnitude_latex(&split);
            if split.negative {
                format!("- {body}")
            } else {
                body
            }
        }
    }
}

impl Expr {
    /// LaTeX form of this expression.
    #[must_use]
    pub fn to_latex(&self) -> String {
        latex(self)
    }
}
