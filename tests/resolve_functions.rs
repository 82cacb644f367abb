//! End-to-end resolution tests over an in-memory function registry.
//!
//! The registry fixture plays the role the catalog environment plays in
//! production: it holds the implementation types that descriptors refer to.

use std::sync::Arc;

use func_resolver::{
    CatalogFunctionDescriptor, FuncName, FunctionDefinition, FunctionKind, FunctionRegistry,
    FunctionResolver, LoadFunctionError, ResolveFunctionError,
    arrow::datatypes::DataType,
    udf::{
        AggregateFunction, ScalarFunction, TableAggregateFunction, TableFunction,
        UserDefinedFunction,
    },
};

// ============================================================================
// Stub implementations
// ============================================================================

#[derive(Debug, Default)]
struct StubScalarPlusOne;

impl UserDefinedFunction for StubScalarPlusOne {
    fn as_scalar(&self) -> Option<&dyn ScalarFunction> {
        Some(self)
    }
}

impl ScalarFunction for StubScalarPlusOne {}

#[derive(Debug, Default)]
struct StubTableSplit;

impl UserDefinedFunction for StubTableSplit {
    fn as_table(&self) -> Option<&dyn TableFunction> {
        Some(self)
    }
}

impl TableFunction for StubTableSplit {
    fn result_type(&self) -> DataType {
        DataType::Utf8
    }
}

#[derive(Debug, Default)]
struct StubAggregateSum;

impl UserDefinedFunction for StubAggregateSum {
    fn as_aggregate(&self) -> Option<&dyn AggregateFunction> {
        Some(self)
    }
}

impl AggregateFunction for StubAggregateSum {
    fn accumulator_type(&self) -> DataType {
        DataType::Int64
    }

    fn result_type(&self) -> DataType {
        DataType::Int64
    }
}

#[derive(Debug, Default)]
struct StubTableAggregateTopN;

impl UserDefinedFunction for StubTableAggregateTopN {
    fn as_table_aggregate(&self) -> Option<&dyn TableAggregateFunction> {
        Some(self)
    }
}

impl TableAggregateFunction for StubTableAggregateTopN {
    fn accumulator_type(&self) -> DataType {
        DataType::Binary
    }

    fn result_type(&self) -> DataType {
        DataType::Float64
    }
}

/// Registered under an implementation id, but not a function implementation.
#[derive(Debug, Default)]
struct NotAFunction;

/// A function implementation that declares none of the four capabilities.
#[derive(Debug, Default)]
struct NoCapabilityFunction;

impl UserDefinedFunction for NoCapabilityFunction {}

// ============================================================================
// Fixture
// ============================================================================

fn registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.register::<StubScalarPlusOne>("StubScalarPlusOne");
    registry.register::<StubTableSplit>("StubTableSplit");
    registry.register::<StubAggregateSum>("StubAggregateSum");
    registry.register::<StubTableAggregateTopN>("StubTableAggregateTopN");
    registry.register::<NoCapabilityFunction>("NoCapabilityFunction");
    registry.register_opaque::<NotAFunction>("NotAFunction");
    registry
}

fn resolver() -> FunctionResolver<FunctionRegistry> {
    FunctionResolver::new(registry())
}

fn name(s: &str) -> FuncName {
    s.parse().unwrap()
}

fn descriptor(name_str: &str, implementation_id: &str) -> CatalogFunctionDescriptor {
    CatalogFunctionDescriptor::new(name(name_str), implementation_id)
}

// ============================================================================
// One definition variant per capability
// ============================================================================

#[test]
fn resolve_scalar_function() {
    let definition = resolver()
        .resolve(name("plusOne"), &descriptor("plusOne", "StubScalarPlusOne"))
        .unwrap();

    assert_eq!(definition.kind(), FunctionKind::Scalar);
    assert_eq!(definition.name(), &"plusOne");
    let FunctionDefinition::Scalar(scalar) = definition else {
        panic!("expected scalar definition");
    };
    assert!(scalar.function().as_scalar().is_some());
}

#[test]
fn resolve_table_function_with_declared_result_type() {
    let definition = resolver()
        .resolve(name("split"), &descriptor("split", "StubTableSplit"))
        .unwrap();

    assert_eq!(definition.kind(), FunctionKind::Table);
    let FunctionDefinition::Table(table) = definition else {
        panic!("expected table definition");
    };
    assert_eq!(table.name(), &"split");
    assert_eq!(table.result_type(), &DataType::Utf8);
}

#[test]
fn resolve_aggregate_function_with_declared_types() {
    let definition = resolver()
        .resolve(name("sum64"), &descriptor("sum64", "StubAggregateSum"))
        .unwrap();

    assert_eq!(definition.kind(), FunctionKind::Aggregate);
    let FunctionDefinition::Aggregate(aggregate) = definition else {
        panic!("expected aggregate definition");
    };
    // Declared type in, same type out, no coercion.
    assert_eq!(aggregate.accumulator_type(), &DataType::Int64);
    assert_eq!(aggregate.result_type(), &DataType::Int64);
}

#[test]
fn resolve_table_aggregate_function_with_declared_types() {
    let definition = resolver()
        .resolve(name("topN"), &descriptor("topN", "StubTableAggregateTopN"))
        .unwrap();

    assert_eq!(definition.kind(), FunctionKind::TableAggregate);
    let FunctionDefinition::TableAggregate(table_aggregate) = definition else {
        panic!("expected table aggregate definition");
    };
    assert_eq!(table_aggregate.accumulator_type(), &DataType::Binary);
    assert_eq!(table_aggregate.result_type(), &DataType::Float64);
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn unresolvable_implementation_fails() {
    let error = resolver()
        .resolve(name("ghost"), &descriptor("ghost", "does::not::Exist"))
        .unwrap_err();

    match error {
        ResolveFunctionError::Load {
            name,
            source: LoadFunctionError::NotResolvable { implementation_id },
        } => {
            assert_eq!(name, "ghost");
            assert_eq!(implementation_id, "does::not::Exist");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_function_type_fails() {
    let error = resolver()
        .resolve(name("topN"), &descriptor("topN", "NotAFunction"))
        .unwrap_err();

    match error {
        ResolveFunctionError::Load {
            name,
            source: LoadFunctionError::NotUserDefined { implementation_id },
        } => {
            assert_eq!(name, "topN");
            assert_eq!(implementation_id, "NotAFunction");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn function_without_recognized_capability_fails() {
    let error = resolver()
        .resolve(name("mystery"), &descriptor("mystery", "NoCapabilityFunction"))
        .unwrap_err();

    match error {
        ResolveFunctionError::UnsupportedFunctionKind {
            name,
            implementation_id,
        } => {
            assert_eq!(name, "mystery");
            assert_eq!(implementation_id, "NoCapabilityFunction");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolution_name_wins_over_descriptor_name() {
    // The caller may reference a catalog function under an alias; the name
    // passed to resolve is the one bound into the definition.
    let definition = resolver()
        .resolve(name("inc"), &descriptor("plusOne", "StubScalarPlusOne"))
        .unwrap();
    assert_eq!(definition.name(), &"inc");
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn concurrent_resolutions_are_independent() {
    let resolver = FunctionResolver::new(Arc::new(registry()));

    let scalar_handle = {
        let resolver = resolver.clone();
        std::thread::spawn(move || {
            resolver.resolve(name("plusOne"), &descriptor("plusOne", "StubScalarPlusOne"))
        })
    };
    let aggregate_handle = {
        let resolver = resolver.clone();
        std::thread::spawn(move || {
            resolver.resolve(name("sum64"), &descriptor("sum64", "StubAggregateSum"))
        })
    };

    let scalar = scalar_handle.join().unwrap().unwrap();
    let aggregate = aggregate_handle.join().unwrap().unwrap();

    assert_eq!(scalar.kind(), FunctionKind::Scalar);
    assert_eq!(scalar.name(), &"plusOne");

    assert_eq!(aggregate.kind(), FunctionKind::Aggregate);
    let FunctionDefinition::Aggregate(aggregate) = aggregate else {
        panic!("expected aggregate definition");
    };
    assert_eq!(aggregate.name(), &"sum64");
    assert_eq!(aggregate.accumulator_type(), &DataType::Int64);
    assert_eq!(aggregate.result_type(), &DataType::Int64);
}
