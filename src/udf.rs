//! The capability surface user-defined function implementations expose.
//!
//! A function implementation registers as a [`UserDefinedFunction`] and
//! declares exactly which of the four recognized capabilities it supports by
//! overriding the matching accessor. Classification checks the accessors once
//! (see [`crate::resolver::FunctionResolver`]); nothing downstream re-derives
//! a capability from the instance.

use std::fmt::Debug;

use datafusion::arrow::datatypes::DataType;

/// The four recognized shapes a user-defined function can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// One output value per input row.
    Scalar,
    /// Zero or more output rows per input row.
    Table,
    /// One output value per group of input rows.
    Aggregate,
    /// Zero or more output rows per group of input rows.
    TableAggregate,
}

/// Base trait for user-defined function implementations.
///
/// Each capability accessor defaults to `None`. An implementation opts into a
/// capability by overriding the accessor to return `Some(self)`:
///
/// ```
/// use func_resolver::udf::{ScalarFunction, UserDefinedFunction};
///
/// #[derive(Debug, Default)]
/// struct PlusOne;
///
/// impl UserDefinedFunction for PlusOne {
///     fn as_scalar(&self) -> Option<&dyn ScalarFunction> {
///         Some(self)
///     }
/// }
///
/// impl ScalarFunction for PlusOne {}
/// ```
///
/// The capabilities are intended to be mutually exclusive. If an
/// implementation declares more than one, classification picks the first in
/// the order scalar, table, aggregate, table aggregate.
pub trait UserDefinedFunction: Debug + Send + Sync {
    /// Returns the scalar capability of this function, if it has one.
    fn as_scalar(&self) -> Option<&dyn ScalarFunction> {
        None
    }

    /// Returns the table capability of this function, if it has one.
    fn as_table(&self) -> Option<&dyn TableFunction> {
        None
    }

    /// Returns the aggregate capability of this function, if it has one.
    fn as_aggregate(&self) -> Option<&dyn AggregateFunction> {
        None
    }

    /// Returns the table-aggregate capability of this function, if it has one.
    fn as_table_aggregate(&self) -> Option<&dyn TableAggregateFunction> {
        None
    }
}

/// A function producing one output value per input row.
///
/// Carries no type metadata of its own; the planner derives everything it
/// needs from the call site.
pub trait ScalarFunction: UserDefinedFunction {}

/// A function producing a set of rows per input row.
pub trait TableFunction: UserDefinedFunction {
    /// The element type of the produced rows, as declared by the
    /// implementation.
    fn result_type(&self) -> DataType;
}

/// A function folding a group of input rows into a single output value
/// through an intermediate accumulator.
pub trait AggregateFunction: UserDefinedFunction {
    /// The intermediate state type maintained between input rows.
    fn accumulator_type(&self) -> DataType;

    /// The final output type, as declared by the implementation.
    fn result_type(&self) -> DataType;
}

/// An aggregate emitting multiple output rows per group instead of a single
/// value. Same metadata shape as [`AggregateFunction`], distinct capability.
pub trait TableAggregateFunction: UserDefinedFunction {
    /// The intermediate state type maintained between input rows.
    fn accumulator_type(&self) -> DataType;

    /// The final output type, as declared by the implementation.
    fn result_type(&self) -> DataType;
}
