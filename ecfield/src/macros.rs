//! Operator impls shared by the field element types.

/// Emit a `core::ops` trait wrapper for an inherent binary method, covering
/// every combination of owned and borrowed operands.
macro_rules! field_op {
    ($fe:ty, $op:ident, $func:ident, $op_assign:ident, $func_assign:ident, $inner_func:ident) => {
        impl core::ops::$op<$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: $fe) -> $fe {
                <$fe>::$inner_func(&self, &rhs)
            }
        }

        impl core::ops::$op<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(&self, rhs)
            }
        }

        impl core::ops::$op<$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: $fe) -> $fe {
                <$fe>::$inner_func(self, &rhs)
            }
        }

        impl core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(self, rhs)
            }
        }

        impl core::ops::$op_assign<$fe> for $fe {
            #[inline]
            fn $func_assign(&mut self, rhs: $fe) {
                *self = <$fe>::$inner_func(self, &rhs);
            }
        }

        impl core::ops::$op_assign<&$fe> for $fe {
            #[inline]
            fn $func_assign(&mut self, rhs: &$fe) {
                *self = <$fe>::$inner_func(self, rhs);
            }
        }
    };
}

/// Emit the full set of arithmetic operator impls for a field element type.
///
/// The type must provide inherent `add`, `subtract`, `multiply` and `negate`
/// methods taking operands by reference.
macro_rules! impl_field_ops {
    ($fe:ty) => {
        field_op!($fe, Add, add, AddAssign, add_assign, add);
        field_op!($fe, Sub, sub, SubAssign, sub_assign, subtract);
        field_op!($fe, Mul, mul, MulAssign, mul_assign, multiply);

        impl core::ops::Neg for $fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::negate(&self)
            }
        }

        impl core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::negate(self)
            }
        }
    };
}
