// Modules
pub mod convert;
pub mod errors;
pub mod node;
pub mod record;
pub mod schema;

// Individual classes, and functions
pub use convert::{ConditionCodec, Converter, ValueCodec};
pub use errors::ConvertError;
pub use node::{Leaf, Node, Split};
pub use record::NodeRecord;
pub use schema::{ColumnSpec, ColumnType, Schema};
