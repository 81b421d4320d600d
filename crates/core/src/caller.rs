use std::{
    any::{Any, type_name},
    cell::RefCell,
    fmt,
};

use crate::{
    Arguments, Binding, CallerError, ConstMethod, Function, Invocable, Method, ParameterInfo,
};

/// A copyable, type-erased call with its arguments already bound.
///
/// A `Caller<'a, R>` is either empty or holds exactly one [`Invocable`]. It
/// hides the bound object's type and the argument types behind the return
/// type `R`, so callers for unrelated functions can be stored side by side.
///
/// Cloning a caller copies every bound argument, so writing a parameter on
/// the clone never affects the original. Callers compare equal when they
/// bind the same function to the same object; the current argument values do
/// not take part in the comparison.
///
/// # Example
///
/// ```
/// use binder_core::Caller;
///
/// fn sum(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// let mut caller = Caller::create_static((3, 4), sum);
/// let snapshot = caller.clone();
///
/// caller.set_parameter(1, 10);
///
/// assert_eq!(caller.call(), 13);
/// assert_eq!(snapshot.call(), 7);
/// assert_eq!(caller, snapshot);
/// ```
pub struct Caller<'a, R> {
    invocable: Option<Box<dyn Invocable<'a, R> + 'a>>,
}

impl<'a, R: 'a> Caller<'a, R> {
    /// Wraps an existing invocable.
    pub fn new(invocable: impl Invocable<'a, R> + 'a) -> Self {
        Self {
            invocable: Some(Box::new(invocable)),
        }
    }

    /// Binds a free function, or an associated function without `self`.
    ///
    /// `arguments` is a tuple of [`Slot`](crate::Slot)s matching the
    /// function's parameters in order.
    pub fn create_static<A>(arguments: A, function: A::Function<R>) -> Self
    where
        A: Arguments + 'a,
    {
        Self::new(Function::<R, A>::new(arguments, function))
    }

    /// Binds a `&mut self` method on `object`.
    ///
    /// The object is borrowed mutably for the duration of each call.
    pub fn create<T, A>(object: &'a RefCell<T>, arguments: A, method: A::Method<T, R>) -> Self
    where
        T: 'a,
        A: Arguments + 'a,
    {
        Self::new(Method::<T, R, A>::new(object, arguments, method))
    }

    /// Binds a `&self` method on `object`.
    pub fn create_const<T, A>(object: &'a T, arguments: A, method: A::ConstMethod<T, R>) -> Self
    where
        T: 'a,
        A: Arguments + 'a,
    {
        Self::new(ConstMethod::<T, R, A>::new(object, arguments, method))
    }
}

impl<'a, R> Caller<'a, R> {
    /// Returns an empty caller.
    #[must_use]
    pub const fn null() -> Self {
        Self { invocable: None }
    }

    /// Returns `true` if no invocable is held.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.invocable.is_none()
    }

    /// Returns `true` if an invocable is held.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.invocable.is_some()
    }

    /// Moves the held invocable out, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            invocable: self.invocable.take(),
        }
    }

    /// Returns the identity of the bound target, or `None` if empty.
    #[must_use]
    pub fn binding(&self) -> Option<Binding> {
        self.invocable.as_ref().map(|invocable| invocable.binding())
    }

    /// Calls the bound function.
    ///
    /// # Panics
    ///
    /// Panics if the caller is empty.
    #[track_caller]
    pub fn call(&self) -> R {
        match self.try_call() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Calls the bound function.
    ///
    /// # Errors
    ///
    /// Returns [`CallerError::Empty`] if the caller is empty.
    pub fn try_call(&self) -> Result<R, CallerError> {
        Ok(self.invocable()?.call())
    }

    /// Returns the number of bound arguments, or 0 if empty.
    #[must_use]
    pub fn parameters(&self) -> usize {
        self.invocable
            .as_ref()
            .map_or(0, |invocable| invocable.parameters())
    }

    /// Describes the argument bound in slot `index`.
    ///
    /// # Errors
    ///
    /// Fails if the caller is empty or `index` is out of range.
    pub fn parameter_info(&self, index: usize) -> Result<ParameterInfo, CallerError> {
        self.invocable()?.parameter_info(index)
    }

    /// Returns a copy of the argument bound in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if [`try_parameter`](Self::try_parameter) would fail.
    #[track_caller]
    #[must_use]
    pub fn parameter<T: Clone + Any>(&self, index: usize) -> T {
        match self.try_parameter::<T>(index) {
            Ok(value) => value.clone(),
            Err(error) => panic!("{error}"),
        }
    }

    /// Borrows the argument bound in slot `index`.
    ///
    /// # Errors
    ///
    /// Fails if the caller is empty, `index` is out of range, the slot is
    /// bound by reference, or the slot does not hold a `T`.
    pub fn try_parameter<T: Any>(&self, index: usize) -> Result<&T, CallerError> {
        let invocable = self.invocable()?;
        let info = invocable.parameter_info(index)?;

        invocable
            .parameter(index)?
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(index, info))
    }

    /// Replaces the argument bound in slot `index`.
    ///
    /// The new value is seen by every later call on this caller, and by
    /// nothing else.
    ///
    /// # Panics
    ///
    /// Panics if [`try_set_parameter`](Self::try_set_parameter) would fail.
    #[track_caller]
    pub fn set_parameter<T: Any>(&mut self, index: usize, value: T) {
        if let Err(error) = self.try_set_parameter(index, value) {
            panic!("{error}");
        }
    }

    /// Replaces the argument bound in slot `index`.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`try_parameter`](Self::try_parameter).
    /// The slot is left unchanged on failure.
    pub fn try_set_parameter<T: Any>(&mut self, index: usize, value: T) -> Result<(), CallerError> {
        let invocable = self
            .invocable
            .as_deref_mut()
            .ok_or(CallerError::Empty)?;
        let info = invocable.parameter_info(index)?;

        let slot = invocable
            .parameter_mut(index)?
            .downcast_mut::<T>()
            .ok_or_else(|| mismatch::<T>(index, info))?;
        *slot = value;

        Ok(())
    }

    /// Checks that slot `index` would accept a `T` without writing anything.
    ///
    /// # Errors
    ///
    /// Returns the error [`try_set_parameter`](Self::try_set_parameter) would
    /// return for a `T`.
    pub fn check_parameter<T: Any>(&self, index: usize) -> Result<(), CallerError> {
        self.try_parameter::<T>(index).map(|_| ())
    }

    fn invocable(&self) -> Result<&(dyn Invocable<'a, R> + 'a), CallerError> {
        self.invocable.as_deref().ok_or(CallerError::Empty)
    }
}

fn mismatch<T>(index: usize, info: ParameterInfo) -> CallerError {
    CallerError::TypeMismatch {
        index,
        stored: info.type_name,
        requested: type_name::<T>(),
    }
}

impl<R> Default for Caller<'_, R> {
    fn default() -> Self {
        Self::null()
    }
}

impl<R> Clone for Caller<'_, R> {
    fn clone(&self) -> Self {
        Self {
            invocable: self.invocable.as_ref().map(|invocable| invocable.clone_box()),
        }
    }
}

impl<R> PartialEq for Caller<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.binding() == other.binding()
    }
}

impl<R> Eq for Caller<'_, R> {}

impl<R> fmt::Debug for Caller<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caller")
            .field("binding", &self.binding())
            .field("parameters", &self.parameters())
            .finish()
    }
}
