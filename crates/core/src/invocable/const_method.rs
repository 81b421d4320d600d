use std::{any::Any, marker::PhantomData, ptr};

use crate::{Arguments, CallerError, ParameterInfo};

use super::{Binding, Invocable};

/// An invocable that calls a `&self` method on a borrowed object.
pub struct ConstMethod<'a, T, R, A: Arguments> {
    object: &'a T,
    method: A::ConstMethod<T, R>,
    arguments: A,
    _marker: PhantomData<fn() -> R>,
}

impl<'a, T, R, A: Arguments> ConstMethod<'a, T, R, A> {
    /// Binds `method` on `object` to `arguments`.
    pub fn new(object: &'a T, arguments: A, method: A::ConstMethod<T, R>) -> Self {
        Self {
            object,
            method,
            arguments,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, R, A> Invocable<'a, R> for ConstMethod<'a, T, R, A>
where
    T: 'a,
    R: 'a,
    A: Arguments + 'a,
{
    fn call(&self) -> R {
        self.arguments.call_const_method(self.object, self.method)
    }

    fn clone_box(&self) -> Box<dyn Invocable<'a, R> + 'a> {
        Box::new(Self::new(
            self.object,
            self.arguments.duplicate(),
            self.method,
        ))
    }

    fn parameters(&self) -> usize {
        A::ARITY
    }

    fn parameter(&self, index: usize) -> Result<&dyn Any, CallerError> {
        self.arguments.slot(index)
    }

    fn parameter_mut(&mut self, index: usize) -> Result<&mut dyn Any, CallerError> {
        self.arguments.slot_mut(index)
    }

    fn parameter_info(&self, index: usize) -> Result<ParameterInfo, CallerError> {
        self.arguments.info(index)
    }

    fn binding(&self) -> Binding {
        Binding::method(
            ptr::from_ref(self.object).addr(),
            A::const_method_address(self.method),
        )
    }
}
