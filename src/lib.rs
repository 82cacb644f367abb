//! Resolution of catalog-persisted function descriptors into typed,
//! planner-ready function definitions.
//!
//! A catalog stores, per user-defined function, a
//! [`CatalogFunctionDescriptor`] naming the function and its implementation
//! type. [`FunctionResolver::resolve`] turns that descriptor into a
//! [`FunctionDefinition`]: it instantiates the implementation through a
//! [`FunctionInstantiator`], classifies it as one of the four recognized
//! capabilities (scalar, table, aggregate, table aggregate), and extracts
//! the accumulator/result type metadata a query planner needs.
//!
//! Out of scope: catalog persistence, sandboxing of implementations, and
//! executing the resolved functions. The produced definition is consumed by
//! a planner, never invoked here.

pub mod definition;
pub mod descriptor;
pub mod errors;
pub mod func_name;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod udf;

mod classify;

pub use datafusion::arrow;

pub use crate::{
    definition::{
        AggregateFunctionDefinition, FunctionDefinition, ScalarFunctionDefinition,
        TableAggregateFunctionDefinition, TableFunctionDefinition,
    },
    descriptor::CatalogFunctionDescriptor,
    errors::{LoadFunctionError, ResolveFunctionError},
    func_name::{FuncName, FuncNameError},
    loader::FunctionLoader,
    registry::{FunctionInstantiator, FunctionRegistry, InstantiatedType},
    resolver::FunctionResolver,
    udf::{
        AggregateFunction, FunctionKind, ScalarFunction, TableAggregateFunction, TableFunction,
        UserDefinedFunction,
    },
};
