use std::{any::Any, marker::PhantomData};

use crate::{Arguments, CallerError, ParameterInfo};

use super::{Binding, Invocable};

/// An invocable that calls a free function with its bound arguments.
pub struct Function<R, A: Arguments> {
    function: A::Function<R>,
    arguments: A,
    _marker: PhantomData<fn() -> R>,
}

impl<R, A: Arguments> Function<R, A> {
    /// Binds `function` to `arguments`.
    pub fn new(arguments: A, function: A::Function<R>) -> Self {
        Self {
            function,
            arguments,
            _marker: PhantomData,
        }
    }
}

impl<'a, R, A> Invocable<'a, R> for Function<R, A>
where
    R: 'a,
    A: Arguments + 'a,
{
    fn call(&self) -> R {
        self.arguments.call_function(self.function)
    }

    fn clone_box(&self) -> Box<dyn Invocable<'a, R> + 'a> {
        Box::new(Self::new(self.arguments.duplicate(), self.function))
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
        Binding::function(A::function_address(self.function))
    }
}
