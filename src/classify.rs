//! Capability classification of loaded function instances.

use datafusion::arrow::datatypes::DataType;

use crate::udf::{FunctionKind, UserDefinedFunction};

/// A classified function instance with its kind-specific type metadata
/// already extracted from the instance.
///
/// Producing this in a single step means no later stage has to re-check a
/// capability or perform a fallible cast: definition construction is an
/// exhaustive match over this enum.
#[derive(Clone, Debug)]
pub(crate) enum ClassifiedFunction {
    Scalar,
    Table {
        result_type: DataType,
    },
    Aggregate {
        accumulator_type: DataType,
        result_type: DataType,
    },
    TableAggregate {
        accumulator_type: DataType,
        result_type: DataType,
    },
}

impl ClassifiedFunction {
    pub(crate) fn kind(&self) -> FunctionKind {
        match self {
            Self::Scalar => FunctionKind::Scalar,
            Self::Table { .. } => FunctionKind::Table,
            Self::Aggregate { .. } => FunctionKind::Aggregate,
            Self::TableAggregate { .. } => FunctionKind::TableAggregate,
        }
    }
}

/// Classifies an instance by checking its capability accessors in a fixed
/// priority order: scalar, table, aggregate, table aggregate. The first
/// capability the instance exposes wins.
///
/// The capabilities are intended to be mutually exclusive; the order is a
/// deterministic tie-break for implementations that declare more than one,
/// not a preference hierarchy.
///
/// Returns `None` if the instance exposes none of the four capabilities.
pub(crate) fn classify(function: &dyn UserDefinedFunction) -> Option<ClassifiedFunction> {
    if function.as_scalar().is_some() {
        Some(ClassifiedFunction::Scalar)
    } else if let Some(table) = function.as_table() {
        Some(ClassifiedFunction::Table {
            result_type: table.result_type(),
        })
    } else if let Some(aggregate) = function.as_aggregate() {
        Some(ClassifiedFunction::Aggregate {
            accumulator_type: aggregate.accumulator_type(),
            result_type: aggregate.result_type(),
        })
    } else if let Some(table_aggregate) = function.as_table_aggregate() {
        Some(ClassifiedFunction::TableAggregate {
            accumulator_type: table_aggregate.accumulator_type(),
            result_type: table_aggregate.result_type(),
        })
    } else {
        None
    }
}
