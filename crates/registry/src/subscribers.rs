use std::any::Any;

use binder_core::Caller;

use crate::RegistryError;

/// An ordered list of callers notified together.
///
/// Subscribers are identified by their [`Binding`](binder_core::Binding):
/// the object and function they call. The values currently bound to their
/// arguments play no part, so a subscriber can be removed with any caller
/// bound to the same method on the same object.
///
/// [`notify_with`](Self::notify_with) writes a per-event value into one slot
/// of every subscriber before calling them, which lets each subscriber keep
/// its own fixed leading arguments.
#[derive(Debug)]
pub struct Subscribers<'a, R> {
    callers: Vec<Caller<'a, R>>,
}

impl<R> Default for Subscribers<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> Subscribers<'a, R> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            callers: Vec::new(),
        }
    }

    /// Appends `caller` to the list.
    ///
    /// # Errors
    ///
    /// Returns an error if `caller` is empty or an equal caller is already
    /// subscribed.
    pub fn subscribe(&mut self, caller: Caller<'a, R>) -> Result<(), RegistryError> {
        if caller.is_null() {
            tracing::warn!("Rejected empty subscriber");
            return Err(RegistryError::NullCaller);
        }
        if self.callers.contains(&caller) {
            tracing::warn!(binding = ?caller.binding(), "Rejected duplicate subscriber");
            return Err(RegistryError::AlreadySubscribed);
        }

        tracing::debug!(binding = ?caller.binding(), "Added subscriber");
        self.callers.push(caller);
        Ok(())
    }

    /// Removes the subscriber equal to `caller`.
    ///
    /// Returns `true` if a subscriber was removed.
    pub fn unsubscribe(&mut self, caller: &Caller<'a, R>) -> bool {
        let Some(position) = self.callers.iter().position(|c| c == caller) else {
            return false;
        };

        self.callers.remove(position);
        tracing::debug!(binding = ?caller.binding(), "Removed subscriber");
        true
    }

    /// Calls every subscriber in subscription order.
    pub fn notify(&self) -> Vec<R> {
        self.callers.iter().map(Caller::call).collect()
    }

    /// Writes `value` into slot `index` of every subscriber, then calls them.
    ///
    /// Every subscriber is checked before anything is written, so a
    /// rejected notification leaves all subscribers untouched and calls
    /// none of them.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Rejected`] naming the first subscriber whose
    /// slot `index` cannot hold a `T`.
    pub fn notify_with<T>(&mut self, index: usize, value: T) -> Result<Vec<R>, RegistryError>
    where
        T: Any + Clone,
    {
        for (subscriber, caller) in self.callers.iter().enumerate() {
            if let Err(source) = caller.check_parameter::<T>(index) {
                tracing::warn!(subscriber, index, error = %source, "Notification rejected");
                return Err(RegistryError::Rejected { subscriber, source });
            }
        }

        for caller in &mut self.callers {
            caller.try_set_parameter(index, value.clone())?;
        }

        Ok(self.notify())
    }

    /// Returns the subscribers in subscription order.
    pub fn iter(&self) -> impl Iterator<Item = &Caller<'a, R>> {
        self.callers.iter()
    }

    /// Returns the number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callers.len()
    }

    /// Returns `true` if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callers.is_empty()
    }
}
