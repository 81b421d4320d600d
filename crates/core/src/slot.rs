use std::any::{Any, type_name};

/// How a bound argument may be reached after capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SlotKind {
    /// The slot owns its value, which can be read and overwritten through a
    /// [`Caller`](crate::Caller) until the next call.
    Value,

    /// The slot holds a borrow that is fixed for the caller's lifetime.
    Reference,
}

/// Runtime description of a single bound argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterInfo {
    pub kind: SlotKind,
    pub type_name: &'static str,
}

impl ParameterInfo {
    /// Creates a descriptor from a slot kind and the stored type's name.
    #[must_use]
    pub const fn new(kind: SlotKind, type_name: &'static str) -> Self {
        Self { kind, type_name }
    }

    /// Returns `true` if the slot can be written through the erased interface.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        matches!(self.kind, SlotKind::Value)
    }
}

/// Storage for one bound argument.
///
/// A `Slot` knows which argument it hands to the wrapped function on each
/// call and whether its storage can be reached through `dyn Any`.
///
/// Two kinds of slots exist:
///
/// - Any `T: Clone + 'static` is a value slot. Every call receives a fresh
///   clone of the stored value, and the stored value can be read and
///   replaced through [`Caller::parameter`] and [`Caller::set_parameter`].
/// - [`ByRef`] is a reference slot. Every call receives the same borrow, and
///   the erased interface has no way to reach it.
///
/// Shared handles such as `Rc<Cell<T>>` are value slots: the handle itself
/// can be swapped, while the callee mutates whatever it points to.
///
/// [`Caller::parameter`]: crate::Caller::parameter
/// [`Caller::set_parameter`]: crate::Caller::set_parameter
pub trait Slot: Sized {
    /// The argument type the wrapped function receives for this slot.
    type Arg;

    /// Produces the argument for one call.
    fn argument(&self) -> Self::Arg;

    /// Returns an independent copy of this slot.
    #[must_use]
    fn duplicate(&self) -> Self;

    /// Returns the stored value, or `None` for reference slots.
    fn value(&self) -> Option<&dyn Any>;

    /// Returns the stored value mutably, or `None` for reference slots.
    fn value_mut(&mut self) -> Option<&mut dyn Any>;

    /// Describes this slot.
    fn info(&self) -> ParameterInfo;
}

impl<T: Clone + 'static> Slot for T {
    type Arg = T;

    fn argument(&self) -> T {
        self.clone()
    }

    fn duplicate(&self) -> Self {
        self.clone()
    }

    fn value(&self) -> Option<&dyn Any> {
        Some(self)
    }

    fn value_mut(&mut self) -> Option<&mut dyn Any> {
        Some(self)
    }

    fn info(&self) -> ParameterInfo {
        ParameterInfo::new(SlotKind::Value, type_name::<T>())
    }
}

/// Binds an argument by reference.
///
/// The borrow is captured once and passed unchanged to every call. It cannot
/// be read or rebound through the erased interface afterwards.
///
/// `ByRef` intentionally does not implement `Clone`, which keeps it out of
/// the value-slot implementation.
///
/// # Example
///
/// ```
/// use binder_core::{ByRef, Caller};
///
/// fn describe(label: &str, count: usize) -> String {
///     format!("{label}: {count}")
/// }
///
/// let label = String::from("apples");
/// let caller = Caller::create_static((ByRef(label.as_str()), 3_usize), describe);
///
/// assert_eq!(caller.call(), "apples: 3");
/// assert!(caller.try_parameter::<&str>(0).is_err());
/// ```
#[derive(Debug)]
pub struct ByRef<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized> Slot for ByRef<'a, T> {
    type Arg = &'a T;

    fn argument(&self) -> &'a T {
        self.0
    }

    fn duplicate(&self) -> Self {
        ByRef(self.0)
    }

    fn value(&self) -> Option<&dyn Any> {
        None
    }

    fn value_mut(&mut self) -> Option<&mut dyn Any> {
        None
    }

    fn info(&self) -> ParameterInfo {
        ParameterInfo::new(SlotKind::Reference, type_name::<&T>())
    }
}
