//! Type-erased, copyable callers with bound arguments.
//!
//! A [`Caller`] binds a function to its arguments now and calls it later,
//! without the holder knowing the function's parameter types or the type of
//! the object a method is bound to:
//!
//! - [`Caller::create_static`] binds a free function.
//! - [`Caller::create`] binds a `&mut self` method on an object in a `RefCell`.
//! - [`Caller::create_const`] binds a `&self` method.
//!
//! Arguments are given as a tuple of up to twenty [`Slot`]s. Value slots can
//! be read and replaced after binding; slots wrapped in [`ByRef`] are fixed.

mod arguments;
mod caller;
mod error;
mod invocable;
mod slot;

pub use arguments::Arguments;
pub use caller::Caller;
pub use error::CallerError;
pub use invocable::{Binding, ConstMethod, Function, Invocable, Method};
pub use slot::{ByRef, ParameterInfo, Slot, SlotKind};
