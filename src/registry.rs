//! Implementation-identifier resolution and instantiation.
//!
//! The registry is the in-process equivalent of a classloader: it maps opaque
//! implementation identifiers to zero-argument constructors. An identifier is
//! resolvable iff something was registered under it. Non-function types can
//! be registered too, so "resolvable, but not a user-defined function" is a
//! reachable state, exactly as it is with dynamic class loading.
//!
//! The registry is read-only after construction and can be shared across
//! concurrent resolutions via [`Arc`](std::sync::Arc) without locking.

use std::{any::Any, collections::BTreeMap, sync::Arc};

use crate::udf::UserDefinedFunction;

type FunctionConstructor = fn() -> Box<dyn UserDefinedFunction>;
type OpaqueConstructor = fn() -> Box<dyn Any + Send + Sync>;

#[derive(Clone, Copy, Debug)]
enum Constructor {
    Function(FunctionConstructor),
    Opaque(OpaqueConstructor),
}

/// A freshly constructed instance of a registered type.
pub enum InstantiatedType {
    /// The identifier named a user-defined function implementation.
    Function(Box<dyn UserDefinedFunction>),
    /// The identifier named a registered type that is not a function.
    Opaque(Box<dyn Any + Send + Sync>),
}

/// Trait seam over implementation-identifier resolution.
///
/// [`FunctionResolver`](crate::resolver::FunctionResolver) depends on this
/// trait rather than on [`FunctionRegistry`] directly, so tests and embedders
/// can substitute their own resolution mechanism.
///
/// Implementations must be safe for concurrent lookups; each call constructs
/// a fresh instance owned by the caller.
pub trait FunctionInstantiator: Send + Sync {
    /// Resolves `implementation_id` and constructs a fresh instance of the
    /// type it names, or returns `None` if the identifier is unknown.
    fn instantiate(&self, implementation_id: &str) -> Option<InstantiatedType>;
}

/// Default [`FunctionInstantiator`] backed by an in-process constructor map.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    constructors: BTreeMap<String, Constructor>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user-defined function type under `implementation_id`.
    ///
    /// Replaces any previous registration under the same identifier.
    pub fn register<F>(&mut self, implementation_id: impl Into<String>)
    where
        F: UserDefinedFunction + Default + 'static,
    {
        self.constructors.insert(
            implementation_id.into(),
            Constructor::Function(|| Box::new(F::default())),
        );
    }

    /// Registers a type that is not a user-defined function.
    ///
    /// Loading such an identifier fails with
    /// [`NotUserDefined`](crate::errors::LoadFunctionError::NotUserDefined).
    pub fn register_opaque<T>(&mut self, implementation_id: impl Into<String>)
    where
        T: Any + Send + Sync + Default,
    {
        self.constructors.insert(
            implementation_id.into(),
            Constructor::Opaque(|| Box::new(T::default())),
        );
    }
}

impl FunctionInstantiator for FunctionRegistry {
    fn instantiate(&self, implementation_id: &str) -> Option<InstantiatedType> {
        self.constructors
            .get(implementation_id)
            .map(|constructor| match constructor {
                Constructor::Function(new) => InstantiatedType::Function(new()),
                Constructor::Opaque(new) => InstantiatedType::Opaque(new()),
            })
    }
}

impl<I: FunctionInstantiator + ?Sized> FunctionInstantiator for Arc<I> {
    fn instantiate(&self, implementation_id: &str) -> Option<InstantiatedType> {
        (**self).instantiate(implementation_id)
    }
}

impl<I: FunctionInstantiator + ?Sized> FunctionInstantiator for &I {
    fn instantiate(&self, implementation_id: &str) -> Option<InstantiatedType> {
        (**self).instantiate(implementation_id)
    }
}
