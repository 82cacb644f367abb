//! The resolution service: descriptor in, typed definition out.

use crate::{
    classify::classify, definition::FunctionDefinition, descriptor::CatalogFunctionDescriptor,
    errors::ResolveFunctionError, func_name::FuncName, loader::FunctionLoader,
    registry::FunctionInstantiator,
};

/// Resolves catalog function descriptors into typed
/// [`FunctionDefinition`]s.
///
/// This is the sole entry point of the subsystem: load the implementation,
/// classify its capability, build the matching definition variant,
/// short-circuiting on the first failure.
///
/// The resolver is stateless across calls. It caches nothing and shares no
/// mutable state, so one value can serve concurrent query compilations; each
/// call produces a fresh instance and a fresh definition.
#[derive(Clone, Debug)]
pub struct FunctionResolver<I> {
    loader: FunctionLoader<I>,
}

impl<I: FunctionInstantiator> FunctionResolver<I> {
    pub fn new(instantiator: I) -> Self {
        Self {
            loader: FunctionLoader::new(instantiator),
        }
    }

    /// Resolves `descriptor` into a function definition bound under `name`.
    ///
    /// `name` is the name the caller referenced the function by, which may
    /// differ from the descriptor's catalog registration name (e.g. an
    /// alias); it is the name bound into the returned definition.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveFunctionError`] if the implementation cannot be
    /// loaded or satisfies none of the recognized function capabilities.
    /// Errors are terminal: no retry can succeed without a registry change.
    pub fn resolve(
        &self,
        name: FuncName,
        descriptor: &CatalogFunctionDescriptor,
    ) -> Result<FunctionDefinition, ResolveFunctionError> {
        let function = self
            .loader
            .load(descriptor.implementation_id())
            .map_err(|source| ResolveFunctionError::Load {
                name: name.clone(),
                source,
            })?;

        let classified = classify(function.as_ref()).ok_or_else(|| {
            ResolveFunctionError::UnsupportedFunctionKind {
                name: name.clone(),
                implementation_id: descriptor.implementation_id().to_string(),
            }
        })?;

        let definition = FunctionDefinition::build(name, function, classified);
        tracing::debug!(
            name = %definition.name(),
            implementation_id = descriptor.implementation_id(),
            kind = ?definition.kind(),
            "resolved function definition"
        );
        Ok(definition)
    }
}
