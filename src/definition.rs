//! Typed, planner-ready function definitions.

use datafusion::arrow::datatypes::DataType;

use crate::{
    classify::ClassifiedFunction,
    func_name::FuncName,
    udf::{FunctionKind, UserDefinedFunction},
};

/// A resolved function definition, binding a name to an implementation
/// instance and its declared type metadata.
///
/// Exactly one variant is produced per successful resolution. The definition
/// owns the instance; ownership passes entirely to the caller (typically a
/// query planner) and the definition is never mutated afterwards.
#[derive(Debug)]
pub enum FunctionDefinition {
    Scalar(ScalarFunctionDefinition),
    Table(TableFunctionDefinition),
    Aggregate(AggregateFunctionDefinition),
    TableAggregate(TableAggregateFunctionDefinition),
}

impl FunctionDefinition {
    /// Constructs the definition variant matching a classified instance.
    ///
    /// Pure: classification already proved the capability and extracted the
    /// type metadata, so there is no failure path here.
    pub(crate) fn build(
        name: FuncName,
        function: Box<dyn UserDefinedFunction>,
        classified: ClassifiedFunction,
    ) -> Self {
        match classified {
            ClassifiedFunction::Scalar => {
                Self::Scalar(ScalarFunctionDefinition { name, function })
            }
            ClassifiedFunction::Table { result_type } => Self::Table(TableFunctionDefinition {
                name,
                function,
                result_type,
            }),
            ClassifiedFunction::Aggregate {
                accumulator_type,
                result_type,
            } => Self::Aggregate(AggregateFunctionDefinition {
                name,
                function,
                accumulator_type,
                result_type,
            }),
            ClassifiedFunction::TableAggregate {
                accumulator_type,
                result_type,
            } => Self::TableAggregate(TableAggregateFunctionDefinition {
                name,
                function,
                accumulator_type,
                result_type,
            }),
        }
    }

    /// The name this definition is bound under.
    pub fn name(&self) -> &FuncName {
        match self {
            Self::Scalar(d) => &d.name,
            Self::Table(d) => &d.name,
            Self::Aggregate(d) => &d.name,
            Self::TableAggregate(d) => &d.name,
        }
    }

    /// The kind tag of this definition.
    pub fn kind(&self) -> FunctionKind {
        match self {
            Self::Scalar(_) => FunctionKind::Scalar,
            Self::Table(_) => FunctionKind::Table,
            Self::Aggregate(_) => FunctionKind::Aggregate,
            Self::TableAggregate(_) => FunctionKind::TableAggregate,
        }
    }

    /// The underlying implementation instance.
    pub fn function(&self) -> &dyn UserDefinedFunction {
        match self {
            Self::Scalar(d) => d.function.as_ref(),
            Self::Table(d) => d.function.as_ref(),
            Self::Aggregate(d) => d.function.as_ref(),
            Self::TableAggregate(d) => d.function.as_ref(),
        }
    }
}

/// Definition of a scalar function: a name bound to an instance, with no
/// further metadata.
#[derive(Debug)]
pub struct ScalarFunctionDefinition {
    name: FuncName,
    function: Box<dyn UserDefinedFunction>,
}

impl ScalarFunctionDefinition {
    pub fn name(&self) -> &FuncName {
        &self.name
    }

    pub fn function(&self) -> &dyn UserDefinedFunction {
        &*self.function
    }
}

/// Definition of a table function with its declared result element type.
#[derive(Debug)]
pub struct TableFunctionDefinition {
    name: FuncName,
    function: Box<dyn UserDefinedFunction>,
    result_type: DataType,
}

impl TableFunctionDefinition {
    pub fn name(&self) -> &FuncName {
        &self.name
    }

    pub fn function(&self) -> &dyn UserDefinedFunction {
        &*self.function
    }

    pub fn result_type(&self) -> &DataType {
        &self.result_type
    }
}

/// Definition of an aggregate function with its declared accumulator and
/// result types.
#[derive(Debug)]
pub struct AggregateFunctionDefinition {
    name: FuncName,
    function: Box<dyn UserDefinedFunction>,
    accumulator_type: DataType,
    result_type: DataType,
}

impl AggregateFunctionDefinition {
    pub fn name(&self) -> &FuncName {
        &self.name
    }

    pub fn function(&self) -> &dyn UserDefinedFunction {
        &*self.function
    }

    pub fn accumulator_type(&self) -> &DataType {
        &self.accumulator_type
    }

    pub fn result_type(&self) -> &DataType {
        &self.result_type
    }
}

/// Definition of a table aggregate function. Same metadata shape as
/// [`AggregateFunctionDefinition`]; the distinct variant records that the
/// function emits multiple rows per group.
#[derive(Debug)]
pub struct TableAggregateFunctionDefinition {
    name: FuncName,
    function: Box<dyn UserDefinedFunction>,
    accumulator_type: DataType,
    result_type: DataType,
}

impl TableAggregateFunctionDefinition {
    pub fn name(&self) -> &FuncName {
        &self.name
    }

    pub fn function(&self) -> &dyn UserDefinedFunction {
        &*self.function
    }

    pub fn accumulator_type(&self) -> &DataType {
        &self.accumulator_type
    }

    pub fn result_type(&self) -> &DataType {
        &self.result_type
    }
}
