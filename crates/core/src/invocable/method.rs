use std::{any::Any, cell::RefCell, marker::PhantomData, ptr};

use crate::{Arguments, CallerError, ParameterInfo};

use super::{Binding, Invocable};

/// An invocable that calls a `&mut self` method on a borrowed object.
///
/// The object lives in a `RefCell` so that copies of the same binding can
/// share it. Each call holds the mutable borrow until the method returns,
/// so a method that calls back into a binding on the same object panics.
pub struct Method<'a, T, R, A: Arguments> {
    object: &'a RefCell<T>,
    method: A::Method<T, R>,
    arguments: A,
    _marker: PhantomData<fn() -> R>,
}

impl<'a, T, R, A: Arguments> Method<'a, T, R, A> {
    /// Binds `method` on `object` to `arguments`.
    pub fn new(object: &'a RefCell<T>, arguments: A, method: A::Method<T, R>) -> Self {
        Self {
            object,
            method,
            arguments,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, R, A> Invocable<'a, R> for Method<'a, T, R, A>
where
    T: 'a,
    R: 'a,
    A: Arguments + 'a,
{
    fn call(&self) -> R {
        self.arguments
            .call_method(&mut *self.object.borrow_mut(), self.method)
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
            A::method_address(self.method),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Tally {
        entries: Vec<String>,
    }

    impl Tally {
        fn record(&mut self, label: &'static str, count: usize) -> usize {
            self.entries.push(format!("{label} x{count}"));
            self.entries.len()
        }
    }

    #[test]
    fn mutates_the_shared_object() {
        let tally = RefCell::new(Tally::default());
        let method = Method::new(&tally, ("apples", 3_usize), Tally::record);

        assert_eq!(method.call(), 1);
        assert_eq!(method.clone_box().call(), 2);
        assert_eq!(tally.borrow().entries, ["apples x3", "apples x3"]);
    }

    #[test]
    fn binding_tracks_the_object() {
        let first = RefCell::new(Tally::default());
        let second = RefCell::new(Tally::default());

        let a = Method::new(&first, ("a", 1_usize), Tally::record);
        let b = Method::new(&first, ("b", 2_usize), Tally::record);
        let c = Method::new(&second, ("a", 1_usize), Tally::record);

        assert_eq!(a.binding(), b.binding());
        assert_ne!(a.binding(), c.binding());
    }
}
