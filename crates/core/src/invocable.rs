mod const_method;
mod function;
mod method;

use std::any::Any;

use crate::{CallerError, ParameterInfo};

pub use const_method::ConstMethod;
pub use function::Function;
pub use method::Method;

/// A function together with its bound arguments, ready to be called.
///
/// `Invocable` is the type-erased boundary behind a [`Caller`]: once a
/// binding is boxed as `dyn Invocable<'a, R>`, the bound object's type and
/// the argument types are no longer visible, only the return type `R`.
///
/// Three implementations are provided:
///
/// - [`Function`] for free functions and associated functions without `self`.
/// - [`Method`] for methods taking `&mut self`, bound through a `RefCell`.
/// - [`ConstMethod`] for methods taking `&self`.
///
/// Slot access goes through `dyn Any` and is checked at runtime. Slots bound
/// with [`ByRef`](crate::ByRef) are never reachable this way.
///
/// [`Caller`]: crate::Caller
pub trait Invocable<'a, R> {
    /// Calls the wrapped function with the bound arguments.
    fn call(&self) -> R;

    /// Returns a boxed, independent copy of this invocable.
    ///
    /// The copy shares the bound object, if any, but owns its own argument
    /// slots.
    fn clone_box(&self) -> Box<dyn Invocable<'a, R> + 'a>;

    /// Returns the number of bound arguments.
    fn parameters(&self) -> usize;

    /// Returns the value stored in slot `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or the slot is bound by reference.
    fn parameter(&self, index: usize) -> Result<&dyn Any, CallerError>;

    /// Returns the value stored in slot `index` mutably.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or the slot is bound by reference.
    fn parameter_mut(&mut self, index: usize) -> Result<&mut dyn Any, CallerError>;

    /// Describes slot `index`.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range.
    fn parameter_info(&self, index: usize) -> Result<ParameterInfo, CallerError>;

    /// Returns the identity of the bound target.
    fn binding(&self) -> Binding;
}

/// Identifies what an invocable calls, independent of its argument values.
///
/// Two bindings are equal when they call the same function on the same
/// object (or on no object at all). Function identity is the function
/// pointer's address, so distinct functions the optimizer merges into one
/// body compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    object: Option<usize>,
    function: usize,
}

impl Binding {
    /// A binding to a free function.
    #[must_use]
    pub const fn function(function: usize) -> Self {
        Self {
            object: None,
            function,
        }
    }

    /// A binding to a method of the object at `object`.
    #[must_use]
    pub const fn method(object: usize, function: usize) -> Self {
        Self {
            object: Some(object),
            function,
        }
    }

    /// Returns the bound object's address, if any.
    #[must_use]
    pub const fn object(&self) -> Option<usize> {
        self.object
    }

    /// Returns the function's address.
    #[must_use]
    pub const fn function_address(&self) -> usize {
        self.function
    }
}
