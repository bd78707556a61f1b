//! Link-time collection of registrations via `inventory`.
//!
//! Modules can declare what they register next to the code itself, without
//! the host importing them one by one:
//!
//! ```rust,ignore
//! fn install(registry: &Registry) {
//!     registry.push_to_filter(Registration::new("nav.items", "blog"), Item::value(nav("Blog")));
//! }
//!
//! inventory::submit! { CollectedRegistration::new("blog", install) }
//!
//! // At startup:
//! registry.install_collected();
//! ```

use crate::registry::Registry;

/// A registration function submitted to the distributed collection.
pub struct CollectedRegistration {
    /// Name for debugging; installers run sorted by name.
    pub name: &'static str,
    /// Function registering entries on the registry.
    pub install: fn(&Registry),
}

impl CollectedRegistration {
    /// Create a new collected registration.
    pub const fn new(name: &'static str, install: fn(&Registry)) -> Self {
        Self { name, install }
    }
}

inventory::collect!(CollectedRegistration);

impl Registry {
    /// Run every submitted [`CollectedRegistration`] against this registry.
    ///
    /// Link order is unspecified, so installers run sorted by name to keep
    /// tie-breaking between equal priorities deterministic. Returns the
    /// number of installers run.
    pub fn install_collected(&self) -> usize {
        let mut collected: Vec<&CollectedRegistration> =
            inventory::iter::<CollectedRegistration>.into_iter().collect();
        collected.sort_by_key(|c| c.name);

        for registration in &collected {
            #[cfg(feature = "tracing")]
            tracing::debug!(name = registration.name, "installing collected registration");
            (registration.install)(self);
        }

        collected.len()
    }
}
