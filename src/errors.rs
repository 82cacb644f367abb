//! Errors from function-definition resolution.
//!
//! All variants are terminal for the resolution call that produced them:
//! implementation resolution is deterministic given a fixed registry, so
//! retrying without changing the environment cannot succeed. Every error
//! names the offending function and implementation identifier.

use crate::func_name::FuncName;

/// Errors from loading a function implementation.
#[derive(Debug, thiserror::Error)]
pub enum LoadFunctionError {
    /// No type is registered under the implementation identifier, so it can
    /// be neither resolved nor instantiated.
    #[error("implementation '{implementation_id}' could not be resolved")]
    NotResolvable { implementation_id: String },

    /// The identifier resolved to a registered type, but that type is not a
    /// user-defined function implementation at all.
    #[error("implementation '{implementation_id}' is not a user-defined function")]
    NotUserDefined { implementation_id: String },
}

impl LoadFunctionError {
    /// The implementation identifier that failed to load.
    pub fn implementation_id(&self) -> &str {
        match self {
            Self::NotResolvable { implementation_id }
            | Self::NotUserDefined { implementation_id } => implementation_id,
        }
    }
}

/// Errors from resolving a catalog function descriptor into a definition.
#[derive(Debug, thiserror::Error)]
pub enum ResolveFunctionError {
    /// The implementation named by the descriptor could not be loaded.
    #[error("failed to load implementation of function '{name}'")]
    Load {
        name: FuncName,
        #[source]
        source: LoadFunctionError,
    },

    /// The implementation loaded, but satisfies none of the recognized
    /// capabilities.
    #[error(
        "implementation '{implementation_id}' of function '{name}' must be a scalar, table, \
         aggregate, or table aggregate function"
    )]
    UnsupportedFunctionKind {
        name: FuncName,
        implementation_id: String,
    },
}
