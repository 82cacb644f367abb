//! Catalog-persisted function metadata.

use serde::{Deserialize, Serialize};

use crate::func_name::FuncName;

/// Persisted catalog metadata naming a function's implementation.
///
/// A descriptor is independent of any particular query: it records the name a
/// function was registered under and the opaque identifier of its
/// implementation type. The catalog owns these values; resolution takes them
/// by reference and never mutates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFunctionDescriptor {
    name: FuncName,
    implementation_id: String,
}

impl CatalogFunctionDescriptor {
    pub fn new(name: FuncName, implementation_id: impl Into<String>) -> Self {
        Self {
            name,
            implementation_id: implementation_id.into(),
        }
    }

    /// The name the function was registered under in the catalog.
    pub fn name(&self) -> &FuncName {
        &self.name
    }

    /// Opaque identifier of the implementation type, resolvable through a
    /// [`FunctionInstantiator`](crate::registry::FunctionInstantiator).
    pub fn implementation_id(&self) -> &str {
        &self.implementation_id
    }
}
