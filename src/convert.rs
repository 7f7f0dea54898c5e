//! Conversion between one node and its persisted record.
//!
//! Both directions are strictly single level: `decode` never fills in
//! children and `encode` never reads them. Whole-tree conversion is the
//! caller's walk over the records, which is where parent/child linkage
//! lives in the storage format.
use crate::errors::ConvertError;
use crate::node::{Leaf, Node, Split};
use crate::record::NodeRecord;
use crate::schema::Schema;
use log::warn;

/// Decodes and encodes the persisted condition fields of a split.
pub trait ConditionCodec {
    type Condition;
    type Fields;
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, fields: &Self::Fields, schema: &Schema) -> Result<Self::Condition, Self::Error>;
    fn encode(&self, condition: &Self::Condition, schema: &Schema) -> Result<Self::Fields, Self::Error>;
}

/// Decodes and encodes the persisted value fields of a node.
///
/// `decode` may return `Ok(None)`: a split record carries value fields
/// only when a cached output was stored for it.
pub trait ValueCodec {
    type Value;
    type Fields;
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, fields: Option<&Self::Fields>) -> Result<Option<Self::Value>, Self::Error>;
    fn encode(&self, value: &Self::Value) -> Result<Self::Fields, Self::Error>;
}

/// Stateless per-node converter, parameterized by the two codecs that
/// own the layout of the condition and value field regions.
pub struct Converter<C, V> {
    pub conditions: C,
    pub values: V,
}

impl<C, V> Converter<C, V>
where
    C: ConditionCodec,
    V: ValueCodec,
{
    pub fn new(conditions: C, values: V) -> Self {
        Converter { conditions, values }
    }

    /// Turn one persisted record into one node.
    ///
    /// A record with condition fields becomes a [`Split`] with both
    /// children absent; the caller attaches them after decoding the
    /// child records. A record without condition fields becomes a
    /// [`Leaf`], and must carry a value.
    pub fn decode(
        &self,
        record: &NodeRecord<C::Fields, V::Fields>,
        schema: &Schema,
    ) -> Result<Node<C::Condition, V::Value>, ConvertError> {
        let value = self
            .values
            .decode(record.value.as_ref())
            .map_err(|e| ConvertError::malformed_by("unreadable value fields", Box::new(e)))?;

        if let Some(fields) = &record.condition {
            let condition = self
                .conditions
                .decode(fields, schema)
                .map_err(|e| ConvertError::malformed_by("unreadable condition fields", Box::new(e)))?;
            let mut split = Split::new(condition);
            split.value = value;
            return Ok(Node::Split(split));
        }

        match value {
            Some(value) => Ok(Node::Leaf(Leaf::new(value))),
            None => {
                warn!("record has neither condition fields nor value fields");
                Err(ConvertError::malformed("leaf without value"))
            }
        }
    }

    /// Turn one node into a fresh persisted record.
    ///
    /// Children are never written; a split's cached value is written
    /// only when present.
    pub fn encode(
        &self,
        node: &Node<C::Condition, V::Value>,
        schema: &Schema,
    ) -> Result<NodeRecord<C::Fields, V::Fields>, ConvertError> {
        let mut record = NodeRecord::new();
        match node {
            Node::Split(split) => {
                record.condition = Some(self.conditions.encode(&split.condition, schema).map_err(|e| {
                    ConvertError::EncodeFailed {
                        field: "condition",
                        source: Box::new(e),
                    }
                })?);
                if let Some(value) = &split.value {
                    record.value = Some(self.values.encode(value).map_err(|e| ConvertError::EncodeFailed {
                        field: "value",
                        source: Box::new(e),
                    })?);
                }
            }
            Node::Leaf(leaf) => {
                record.value = Some(self.values.encode(&leaf.value).map_err(|e| ConvertError::EncodeFailed {
                    field: "value",
                    source: Box::new(e),
                })?);
            }
            #[allow(unreachable_patterns)]
            _ => return Err(ConvertError::UnsupportedNodeKind),
        }
        Ok(record)
    }
}
