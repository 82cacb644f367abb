//! Loading of function implementations from implementation identifiers.

use crate::{
    errors::LoadFunctionError,
    registry::{FunctionInstantiator, InstantiatedType},
    udf::UserDefinedFunction,
};

/// Resolves implementation identifiers to function instances through a
/// [`FunctionInstantiator`].
#[derive(Clone, Debug)]
pub struct FunctionLoader<I> {
    instantiator: I,
}

impl<I: FunctionInstantiator> FunctionLoader<I> {
    pub fn new(instantiator: I) -> Self {
        Self { instantiator }
    }

    /// Resolves `implementation_id` and constructs a fresh instance.
    ///
    /// Fails if the identifier names no registered type, or names a type
    /// that is not a user-defined function implementation.
    pub fn load(
        &self,
        implementation_id: &str,
    ) -> Result<Box<dyn UserDefinedFunction>, LoadFunctionError> {
        match self.instantiator.instantiate(implementation_id) {
            Some(InstantiatedType::Function(function)) => {
                tracing::trace!(implementation_id, "instantiated function implementation");
                Ok(function)
            }
            Some(InstantiatedType::Opaque(_)) => Err(LoadFunctionError::NotUserDefined {
                implementation_id: implementation_id.to_string(),
            }),
            None => Err(LoadFunctionError::NotResolvable {
                implementation_id: implementation_id.to_string(),
            }),
        }
    }
}
