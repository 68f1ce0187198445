//! Central formulas of a requested accuracy on standard grids.
//!
//! The narrowest symmetric stencil reaching accuracy order `acc` for the
//! `d`-th derivative is chosen:
//!
//! - regular grid: integer offsets `-k..=k` with `k = (d + acc - 1) / 2`
//! - cell-centered grid: offsets `i + 1/2` for `i in -k..k`, `k = (d + acc) / 2`
//! - staggered grid: regular for even `d`, cell-centered for odd `d`

use fdx_core::Expr;
use fdx_integers::{Integer, Rational};
use std::fmt;
use std::str::FromStr;

use crate::config::{Config, EquationOptions};
use crate::error::{Error, Result};
use crate::finite_difference;
use crate::stencil::Stencil;

/// The kind of grid a formula is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GridType {
    /// Samples at integer offsets.
    #[default]
    Regular,
    /// Samples at half-integer offsets.
    CellCentered,
    /// Regular or cell-centered depending on the derivative order.
    Staggered,
}

impl FromStr for GridType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regular" => Ok(GridType::Regular),
            "cell_centered" | "cell-centered" => Ok(GridType::CellCentered),
            "staggered" => Ok(GridType::Staggered),
            other => Err(Error::InvalidGridType { name: other.to_string() }),
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridType::Regular => "regular",
            GridType::CellCentered => "cell_centered",
            GridType::Staggered => "staggered",
        })
    }
}

/// A generated formula in the requested form.
#[derive(Clone, Debug, PartialEq)]
pub enum Generated {
    /// Exact coefficients, one per stencil point.
    Coefficients(Vec<Rational>),
    /// The finished equation.
    Equation(Expr),
}

pub(crate) fn check_accuracy(acc: u32) -> Result<()> {
    if acc < 2 || acc % 2 != 0 {
        return Err(Error::InvalidAccuracyOrder { acc });
    }
    Ok(())
}

/// The symmetric stencil for the `deriv`-th derivative at accuracy `acc`.
///
/// # Errors
///
/// - [`Error::UnsupportedOrderOfDerivative`] if `deriv` is 0
/// - [`Error::InvalidAccuracyOrder`] if `acc` is odd or below 2
pub fn generate_stencil(deriv: u32, acc: u32, grid: GridType) -> Result<Stencil> {
    if deriv < 1 {
        return Err(Error::UnsupportedOrderOfDerivative { order: deriv });
    }
    check_accuracy(acc)?;

    let grid = match grid {
        GridType::Staggered if deriv % 2 == 0 => GridType::Regular,
        GridType::Staggered => GridType::CellCentered,
        other => other,
    };

    let offsets = match grid {
        GridType::CellCentered => {
            let half = i64::from((deriv + acc) / 2);
            (-half..half)
                .map(|i| Rational::from_i64(2 * i + 1, 2))
                .collect()
        }
        _ => {
            let half = i64::from((deriv + acc - 1) / 2);
            (-half..=half).map(Rational::from).collect()
        }
    };
    Ok(Stencil::new(offsets))
}

/// Exact coefficients of the generated formula.
///
/// # Errors
///
/// See [`generate_stencil`].
pub fn generate_coefficients(deriv: u32, acc: u32, grid: GridType) -> Result<Vec<Rational>> {
    let stencil = generate_stencil(deriv, acc, grid)?;
    finite_difference::coefficients(&stencil, deriv)
}

/// Numerators and denominator of the generated formula.
///
/// # Errors
///
/// See [`generate_stencil`].
pub fn generate_numer_denom(deriv: u32, acc: u32, grid: GridType) -> Result<(Vec<Integer>, Integer)> {
    let stencil = generate_stencil(deriv, acc, grid)?;
    finite_difference::coefficients_numer_denom(&stencil, deriv)
}

/// The generated formula as an equation.
///
/// # Errors
///
/// See [`generate_stencil`].
pub fn generate_equation(deriv: u32, acc: u32, grid: GridType) -> Result<Expr> {
    let stencil = generate_stencil(deriv, acc, grid)?;
    finite_difference::equation_with(&Config::default(), &stencil, deriv, EquationOptions::default())
}

/// The generated formula as coefficients or as an equation.
///
/// # Errors
///
/// See [`generate_stencil`].
pub fn generate(deriv: u32, acc: u32, grid: GridType, as_equation: bool) -> Result<Generated> {
    let _span = tracing::debug_span!("generate", deriv, acc, %grid).entered();
    if as_equation {
        generate_equation(deriv, acc, grid).map(Generated::Equation)
    } else {
        generate_coefficients(deriv, acc, grid).map(Generated::Coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Integer> {
        values.iter().map(|&v| Integer::new(v)).collect()
    }

    #[test]
    fn test_grid_type_names() {
        assert_eq!("regular".parse::<GridType>(), Ok(GridType::Regular));
        assert_eq!("cell_centered".parse::<GridType>(), Ok(GridType::CellCentered));
        assert_eq!("cell-centered".parse::<GridType>(), Ok(GridType::CellCentered));
        assert_eq!("staggered".parse::<GridType>(), Ok(GridType::Staggered));
        assert_eq!(
            "hexagonal".parse::<GridType>(),
            Err(Error::InvalidGridType { name: "hexagonal".to_string() })
        );
        assert_eq!(GridType::CellCentered.to_string(), "cell_centered");
    }

    #[test]
    fn test_regular_stencils() {
        assert_eq!(generate_stencil(1, 2, GridType::Regular).unwrap(), Stencil::from_ints(&[-1, 0, 1]));
        assert_eq!(generate_stencil(2, 2, GridType::Regular).unwrap(), Stencil::from_ints(&[-1, 0, 1]));
        assert_eq!(
            generate_stencil(1, 4, GridType::Regular).unwrap(),
            Stencil::from_ints(&[-2, -1, 0, 1, 2])
        );
        assert_eq!(
            generate_stencil(3, 2, GridType::Regular).unwrap(),
            Stencil::from_ints(&[-2, -1, 0, 1, 2])
        );
    }

    #[test]
    fn test_cell_centered_stencil() {
        let stencil = generate_stencil(1, 2, GridType::CellCentered).unwrap();
        assert_eq!(stencil.to_string(), "[-1/2, 1/2]");
        let stencil = generate_stencil(1, 4, GridType::CellCentered).unwrap();
        assert_eq!(stencil.to_string(), "[-3/2, -1/2, 1/2, 3/2]");
        let stencil = generate_stencil(2, 2, GridType::CellCentered).unwrap();
        assert_eq!(stencil.len(), 4);
        let stencil = generate_stencil(3, 4, GridType::Staggered).unwrap();
        assert_eq!(stencil.len(), 6);
        let stencil = generate_stencil(2, 2, GridType::Staggered).unwrap();
        assert_eq!(stencil, Stencil::from_ints(&[-1, 0, 1]));
    }

    #[test]
    fn test_generated_coefficients() {
        assert_eq!(
            generate_coefficients(1, 2, GridType::Regular).unwrap(),
            vec![Rational::from_i64(-1, 2), Rational::from(0), Rational::from_i64(1, 2)]
        );
        assert_eq!(
            generate_coefficients(1, 2, GridType::CellCentered).unwrap(),
            vec![Rational::from(-1), Rational::from(1)]
        );
    }

    #[test]
    fn test_generated_numer_denom() {
        assert_eq!(
            generate_numer_denom(1, 4, GridType::Regular).unwrap(),
            (ints(&[1, -8, 0, 8, -1]), Integer::new(12))
        );
        assert_eq!(
            generate_numer_denom(2, 2, GridType::Regular).unwrap(),
            (ints(&[1, -2, 1]), Integer::new(1))
        );
        assert_eq!(
            generate_numer_denom(1, 2, GridType::CellCentered).unwrap(),
            (ints(&[-1, 1]), Integer::new(1))
        );
        assert_eq!(
            generate_numer_denom(1, 4, GridType::Staggered).unwrap(),
            (ints(&[1, -27, 27, -1]), Integer::new(24))
        );
    }

    #[test]
    fn test_generate_as_equation() {
        let generated = generate(1, 4, GridType::Regular, true).unwrap();
        let Generated::Equation(eq) = generated else {
            panic!("expected an equation");
        };
        assert_eq!(eq.to_string(), "(f_{-2} - 8*f_{-1} + 8*f_{1} - f_{2})/(12*h)");
        assert_eq!(
            generate(2, 2, GridType::Regular, false),
            Ok(Generated::Coefficients(vec![
                Rational::from(1),
                Rational::from(-2),
                Rational::from(1)
            ]))
        );
    }

    #[test]
    fn test_invalid_requests() {
        assert_eq!(generate_stencil(1, 3, GridType::Regular), Err(Error::InvalidAccuracyOrder { acc: 3 }));
        assert_eq!(generate_stencil(1, 0, GridType::Regular), Err(Error::InvalidAccuracyOrder { acc: 0 }));
        assert_eq!(
            generate_stencil(0, 2, GridType::Regular),
            Err(Error::UnsupportedOrderOfDerivative { order: 0 })
        );
    }
}
