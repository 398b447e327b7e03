use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type CallbackMap<T> = HashMap<T, ObserverCallback>;
#[cfg(not(feature = "std"))]
type CallbackMap<T> = BTreeMap<T, ObserverCallback>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait TargetKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> TargetKey for T {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait TargetKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> TargetKey for T {}

/// A callback fired when the platform reports an event for an observed target.
pub type ObserverCallback = Arc<dyn Fn() + Send + Sync>;

/// Constructs the underlying platform observer on first registration.
pub type ObserverFactory<O> = Arc<dyn Fn() -> O + Send + Sync>;

/// The contract of a platform observer (`ResizeObserver`,
/// `IntersectionObserver`, or any analogue).
///
/// `T` identifies an observed target — a DOM node handle, an element id,
/// whatever identity the host has.
pub trait PlatformObserver<T> {
    fn observe(&mut self, target: &T);
    fn unobserve(&mut self, target: &T);
    fn disconnect(&mut self);
}

/// Multiplexes many observed targets onto at most one platform observer.
///
/// Platform observers are comparatively expensive, so hosts share a single
/// instance across every registration of a given kind. The pool constructs it
/// lazily on the first [`Self::observe`] and tears it down (`disconnect` +
/// drop) when the last target is unregistered; a later registration
/// constructs a fresh instance.
///
/// Event dispatch stays with the host: its platform glue receives entries
/// from the real observer and forwards each relevant target to
/// [`Self::deliver`]. (For intersection observers, "relevant" means
/// intersecting — that filter belongs in the glue, not here.)
///
/// This is an explicit object rather than process-global state so tests and
/// multi-root hosts can hold independent pools.
pub struct ObserverPool<T, O> {
    factory: ObserverFactory<O>,
    observer: Option<O>,
    callbacks: CallbackMap<T>,
}

impl<T: TargetKey + Clone, O: PlatformObserver<T>> ObserverPool<T, O> {
    pub fn new(factory: impl Fn() -> O + Send + Sync + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
            observer: None,
            callbacks: CallbackMap::new(),
        }
    }

    /// Registers `target`, creating the platform observer if this is the
    /// first registration. Re-observing an already-registered target
    /// replaces its callback.
    pub fn observe(&mut self, target: T, callback: impl Fn() + Send + Sync + 'static) {
        if self.observer.is_none() {
            odebug!("ObserverPool: creating platform observer");
            self.observer = Some((self.factory)());
        }

        if self
            .callbacks
            .insert(target.clone(), Arc::new(callback))
            .is_some()
        {
            owarn!("ObserverPool: target re-observed, callback replaced");
        }
        if let Some(observer) = &mut self.observer {
            observer.observe(&target);
        }
    }

    /// Unregisters `target`. Returns `false` if it was not observed.
    ///
    /// When the last target is removed, the platform observer is
    /// disconnected and dropped.
    pub fn unobserve(&mut self, target: &T) -> bool {
        if self.callbacks.remove(target).is_none() {
            return false;
        }
        if let Some(observer) = &mut self.observer {
            observer.unobserve(target);
        }
        if self.callbacks.is_empty() {
            odebug!("ObserverPool: tearing down platform observer");
            if let Some(mut observer) = self.observer.take() {
                observer.disconnect();
            }
        }
        true
    }

    /// Invokes the callback registered for `target`, if any.
    ///
    /// Returns whether a callback ran. Unknown targets are benign: the
    /// platform may still flush entries for a just-unregistered target.
    pub fn deliver(&self, target: &T) -> bool {
        match self.callbacks.get(target) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Number of currently observed targets.
    pub fn observed_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether a platform observer instance is currently alive.
    pub fn is_active(&self) -> bool {
        self.observer.is_some()
    }
}

impl<T, O> core::fmt::Debug for ObserverPool<T, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverPool")
            .field("observed_count", &self.callbacks.len())
            .field("active", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
