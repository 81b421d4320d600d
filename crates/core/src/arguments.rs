use std::any::Any;

use crate::{CallerError, ParameterInfo, Slot};

/// A tuple of bound arguments.
///
/// `Arguments` is implemented for tuples of [`Slot`]s with up to twenty
/// elements. It fixes the arity of a binding, names the function pointer
/// types that accept those arguments, and forwards the stored arguments
/// positionally when the binding is called.
///
/// Use `()` for a function without parameters and `(x,)` for a single one.
///
/// You should not need to implement this trait yourself.
///
/// # Example
///
/// ```
/// use binder_core::Arguments;
///
/// fn sum(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// let arguments = (3, 4);
///
/// assert_eq!(<(i32, i32) as Arguments>::ARITY, 2);
/// assert_eq!(arguments.call_function(sum), 7);
/// ```
pub trait Arguments: Sized {
    /// The number of bound arguments.
    const ARITY: usize;

    /// A free function taking these arguments.
    type Function<R>: Copy;

    /// A method taking `&mut T` followed by these arguments.
    type Method<T, R>: Copy;

    /// A method taking `&T` followed by these arguments.
    type ConstMethod<T, R>: Copy;

    /// Calls `function` with the stored arguments in slot order.
    fn call_function<R>(&self, function: Self::Function<R>) -> R;

    /// Calls `method` on `object` with the stored arguments in slot order.
    fn call_method<T, R>(&self, object: &mut T, method: Self::Method<T, R>) -> R;

    /// Calls `method` on `object` with the stored arguments in slot order.
    fn call_const_method<T, R>(&self, object: &T, method: Self::ConstMethod<T, R>) -> R;

    /// Returns the address identifying `function`.
    fn function_address<R>(function: Self::Function<R>) -> usize;

    /// Returns the address identifying `method`.
    fn method_address<T, R>(method: Self::Method<T, R>) -> usize;

    /// Returns the address identifying `method`.
    fn const_method_address<T, R>(method: Self::ConstMethod<T, R>) -> usize;

    /// Returns an independent copy of every slot.
    #[must_use]
    fn duplicate(&self) -> Self;

    /// Returns the value stored in slot `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or the slot is bound by reference.
    fn slot(&self, index: usize) -> Result<&dyn Any, CallerError>;

    /// Returns the value stored in slot `index` mutably.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or the slot is bound by reference.
    fn slot_mut(&mut self, index: usize) -> Result<&mut dyn Any, CallerError>;

    /// Describes slot `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range.
    fn info(&self, index: usize) -> Result<ParameterInfo, CallerError>;
}

macro_rules! impl_arguments {
    ($arity:literal; $($idx:tt: $S:ident),*) => {
        impl<$($S: Slot),*> Arguments for ($($S,)*) {
            const ARITY: usize = $arity;

            type Function<R> = fn($(<$S as Slot>::Arg),*) -> R;
            type Method<T, R> = fn(&mut T $(, <$S as Slot>::Arg)*) -> R;
            type ConstMethod<T, R> = fn(&T $(, <$S as Slot>::Arg)*) -> R;

            fn call_function<R>(&self, function: Self::Function<R>) -> R {
                function($(self.$idx.argument()),*)
            }

            fn call_method<T, R>(&self, object: &mut T, method: Self::Method<T, R>) -> R {
                method(object $(, self.$idx.argument())*)
            }

            fn call_const_method<T, R>(&self, object: &T, method: Self::ConstMethod<T, R>) -> R {
                method(object $(, self.$idx.argument())*)
            }

            fn function_address<R>(function: Self::Function<R>) -> usize {
                function as usize
            }

            fn method_address<T, R>(method: Self::Method<T, R>) -> usize {
                method as usize
            }

            fn const_method_address<T, R>(method: Self::ConstMethod<T, R>) -> usize {
                method as usize
            }

            fn duplicate(&self) -> Self {
                ($(self.$idx.duplicate(),)*)
            }

            fn slot(&self, index: usize) -> Result<&dyn Any, CallerError> {
                match index {
                    $($idx => self.$idx.value().ok_or(CallerError::ReferenceParameter { index }),)*
                    _ => Err(CallerError::OutOfRange { index, arity: $arity }),
                }
            }

            fn slot_mut(&mut self, index: usize) -> Result<&mut dyn Any, CallerError> {
                match index {
                    $($idx => self.$idx.value_mut().ok_or(CallerError::ReferenceParameter { index }),)*
                    _ => Err(CallerError::OutOfRange { index, arity: $arity }),
                }
            }

            fn info(&self, index: usize) -> Result<ParameterInfo, CallerError> {
                match index {
                    $($idx => Ok(self.$idx.info()),)*
                    _ => Err(CallerError::OutOfRange { index, arity: $arity }),
                }
            }
        }
    };
}

impl_arguments!(0;);
impl_arguments!(1; 0: S0);
impl_arguments!(2; 0: S0, 1: S1);
impl_arguments!(3; 0: S0, 1: S1, 2: S2);
impl_arguments!(4; 0: S0, 1: S1, 2: S2, 3: S3);
impl_arguments!(5; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4);
impl_arguments!(6; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5);
impl_arguments!(7; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6);
impl_arguments!(8; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7);
impl_arguments!(9; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8);
impl_arguments!(10; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9);
impl_arguments!(11; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10);
impl_arguments!(12; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11);
impl_arguments!(13; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12);
impl_arguments!(14; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13);
impl_arguments!(15; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13, 14: S14);
impl_arguments!(16; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13, 14: S14, 15: S15);
impl_arguments!(17; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13, 14: S14, 15: S15, 16: S16);
impl_arguments!(18; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13, 14: S14, 15: S15, 16: S16, 17: S17);
impl_arguments!(19; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13, 14: S14, 15: S15, 16: S16, 17: S17, 18: S18);
impl_arguments!(20; 0: S0, 1: S1, 2: S2, 3: S3, 4: S4, 5: S5, 6: S6, 7: S7, 8: S8, 9: S9, 10: S10, 11: S11, 12: S12, 13: S13, 14: S14, 15: S15, 16: S16, 17: S17, 18: S18, 19: S19);
