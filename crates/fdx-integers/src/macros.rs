//! Operator forwarding for the `dashu` newtypes.

/// Implements a binary operator for owned, borrowed-rhs and fully borrowed
/// operands by forwarding to the wrapped `dashu` value.
macro_rules! forward_binop {
    ($ty:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty(std::ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$trait<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$trait::$method(self.0, &rhs.0))
            }
        }

        impl std::ops::$trait<&$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

/// Implements `Neg` for owned and borrowed values.
macro_rules! forward_neg {
    ($ty:ident) => {
        impl std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-self.0)
            }
        }

        impl std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-&self.0)
            }
        }
    };
}

pub(crate) use forward_binop;
pub(crate) use forward_neg;
