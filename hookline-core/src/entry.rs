//! # Entries
//!
//! An [`Entry`] is one callback registered against a hook. Entries for
//! different hooks carry different data types, so the callback is stored
//! type-erased and recovered with a downcast when the hook is resolved with
//! a concrete type.
//!
//! A [`Controller`] has the same identity (hook + key) but transforms the
//! set of entries a hook resolves to instead of the data.

use crate::{
    context::Context,
    error::{BoxError, HookError},
    id::{EntryKey, HookId},
    outcome::IntoOutcome,
    payload::Payload,
    priority::{Priority, weight},
};
use indexmap::IndexMap;
use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

/// Entries registered on one hook, in insertion order.
pub type EntryMap = IndexMap<EntryKey, Entry>;

/// Hook → key → item tables held by the registry.
pub type HookTable<V = Entry> = IndexMap<HookId, IndexMap<EntryKey, V>>;

type ChainFn<T> = dyn Fn(T, &Context) -> Result<T, BoxError> + Send + Sync;

/// A typed filter function.
///
/// Internally a filter always hands the data back, so a callback that only
/// observes the value does not need to clone it.
pub struct FilterFn<T>(Box<ChainFn<T>>);

impl<T: Payload> FilterFn<T> {
    /// Filter that inspects the data and optionally replaces it.
    ///
    /// See [`IntoOutcome`] for what the closure may return.
    pub fn transform<F, R>(f: F) -> Self
    where
        F: Fn(&T, &Context) -> R + Send + Sync + 'static,
        R: IntoOutcome<T>,
    {
        Self(Box::new(move |data, ctx| {
            Ok(f(&data, ctx).into_outcome()?.unwrap_or(data))
        }))
    }

    /// Filter that takes ownership of the data and returns the next value.
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(T, &Context) -> T + Send + Sync + 'static,
    {
        Self(Box::new(move |data, ctx| Ok(f(data, ctx))))
    }

    /// Fallible variant of [`FilterFn::map`].
    pub fn try_map<F, E>(f: F) -> Self
    where
        F: Fn(T, &Context) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self(Box::new(move |data, ctx| f(data, ctx).map_err(Into::into)))
    }

    /// Filter that ignores its input and yields a clone of `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self(Box::new(move |_, _| Ok(value.clone())))
    }

    /// Run the filter.
    pub fn call(&self, data: T, ctx: &Context) -> Result<T, BoxError> {
        (self.0)(data, ctx)
    }
}

/// What a caller registers with `add_filter`.
///
/// Static values do not need a closure: a [`Filter::Constant`] is turned into
/// a filter that returns the value whatever it receives.
pub enum Filter<T> {
    /// Resolve the hook to this value.
    Constant(T),
    /// Run this function over the data.
    Transform(FilterFn<T>),
}

impl<T: Payload> Filter<T> {
    /// Shorthand for [`Filter::Constant`].
    pub fn constant(value: T) -> Self {
        Filter::Constant(value)
    }

    /// Shorthand for a [`FilterFn::transform`] filter.
    pub fn transform<F, R>(f: F) -> Self
    where
        F: Fn(&T, &Context) -> R + Send + Sync + 'static,
        R: IntoOutcome<T>,
    {
        Filter::Transform(FilterFn::transform(f))
    }

    /// Shorthand for a [`FilterFn::map`] filter.
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(T, &Context) -> T + Send + Sync + 'static,
    {
        Filter::Transform(FilterFn::map(f))
    }

    /// Normalize into a callable filter.
    pub fn into_fn(self) -> FilterFn<T>
    where
        T: Clone + Sync,
    {
        match self {
            Filter::Constant(value) => FilterFn::constant(value),
            Filter::Transform(f) => f,
        }
    }
}

impl<T: Payload> From<FilterFn<T>> for Filter<T> {
    fn from(f: FilterFn<T>) -> Self {
        Filter::Transform(f)
    }
}

/// What a caller appends with `push_to_filter`.
pub enum Item<T> {
    /// Append a clone of this value.
    Value(T),
    /// Append whatever this function produces from the resolution context.
    Produce(Box<dyn Fn(&Context) -> T + Send + Sync>),
}

impl<T> Item<T> {
    /// Shorthand for [`Item::Value`].
    pub fn value(value: T) -> Self {
        Item::Value(value)
    }

    /// Shorthand for [`Item::Produce`].
    pub fn produce<F>(f: F) -> Self
    where
        F: Fn(&Context) -> T + Send + Sync + 'static,
    {
        Item::Produce(Box::new(f))
    }

    /// Resolve the item against a resolution context.
    pub fn resolve(&self, ctx: &Context) -> T
    where
        T: Clone,
    {
        match self {
            Item::Value(value) => value.clone(),
            Item::Produce(f) => f(ctx),
        }
    }
}

/// One registration on a hook.
#[derive(Clone)]
pub struct Entry {
    hook: HookId,
    key: EntryKey,
    callback: Arc<dyn Any + Send + Sync>,
    data_type: &'static str,
    priority: Option<Priority>,
}

impl Entry {
    /// Create an entry for a filter over `T`.
    pub fn new<T: Payload>(
        hook: impl Into<HookId>,
        key: impl Into<EntryKey>,
        filter: FilterFn<T>,
        priority: Option<Priority>,
    ) -> Self {
        Self {
            hook: hook.into(),
            key: key.into(),
            callback: Arc::new(filter),
            data_type: type_name::<T>(),
            priority,
        }
    }

    /// Hook this entry is registered on.
    pub fn hook(&self) -> &HookId {
        &self.hook
    }

    /// Key of this entry within its hook.
    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    /// Explicit priority, if one was given.
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Priority used for ordering.
    pub fn weight(&self) -> Priority {
        weight(self.priority)
    }

    /// Name of the data type the callback was registered for.
    pub fn data_type(&self) -> &'static str {
        self.data_type
    }

    /// Check if the callback accepts data of type `T`.
    pub fn accepts<T: Payload>(&self) -> bool {
        self.callback.is::<FilterFn<T>>()
    }

    /// Run the callback over `data`.
    pub fn apply<T: Payload>(&self, data: T, ctx: &Context) -> Result<T, HookError> {
        let filter = self.callback.downcast_ref::<FilterFn<T>>().ok_or_else(|| {
            HookError::TypeMismatch {
                hook: self.hook.clone(),
                key: self.key.clone(),
                expected: type_name::<T>(),
                found: self.data_type,
            }
        })?;
        filter
            .call(data, ctx)
            .map_err(|source| HookError::Callback {
                hook: self.hook.clone(),
                key: self.key.clone(),
                source,
            })
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("hook", &self.hook)
            .field("key", &self.key)
            .field("data_type", &self.data_type)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

type ControllerFn = dyn Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync;

/// An override over the entry set of a hook.
///
/// Returning `Some(map)` replaces the entries the hook resolves to;
/// `None` leaves them unchanged.
#[derive(Clone)]
pub struct Controller {
    hook: HookId,
    key: EntryKey,
    callback: Arc<ControllerFn>,
}

impl Controller {
    /// Create a controller.
    pub fn new<F>(hook: impl Into<HookId>, key: impl Into<EntryKey>, f: F) -> Self
    where
        F: Fn(&EntryMap, &Context) -> Option<EntryMap> + Send + Sync + 'static,
    {
        Self {
            hook: hook.into(),
            key: key.into(),
            callback: Arc::new(f),
        }
    }

    /// Hook this controller overrides.
    pub fn hook(&self) -> &HookId {
        &self.hook
    }

    /// Key of this controller within its hook.
    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    /// Run the controller.
    pub fn apply(&self, entries: &EntryMap, ctx: &Context) -> Option<EntryMap> {
        (self.callback)(entries, ctx)
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("hook", &self.hook)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
