//! Column dictionary describing how persisted condition operands are to
//! be interpreted. The converter threads a [`Schema`] through every call
//! without looking inside it; only condition codecs consume it.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub enum ColumnType {
    Numerical,
    Categorical,
    Boolean,
}

/// Metadata of a single input column.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
    /// Value domain for categorical columns, indexed by the persisted
    /// category id.
    pub categories: Option<Vec<String>>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        ColumnSpec {
            name: name.into(),
            column_type,
            categories: None,
        }
    }
}

/// Read-only lookup from column index to column metadata. Immutable
/// after construction, so it can be shared across any number of
/// concurrent decode/encode calls.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Schema { columns }
    }

    pub fn column(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
