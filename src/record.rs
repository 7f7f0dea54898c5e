use serde::{Deserialize, Serialize};

/// Persisted form of a single node: a flat bag of two optional field
/// regions, generic over their concrete layouts (`CF` for condition
/// fields, `VF` for value fields).
///
/// Which regions are present determines the node kind: a record with
/// condition fields describes a split, one without describes a leaf.
/// Records carry no linkage; which record is whose child is tracked by
/// the surrounding storage format, not here.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NodeRecord<CF, VF> {
    pub condition: Option<CF>,
    pub value: Option<VF>,
}

impl<CF, VF> NodeRecord<CF, VF> {
    pub fn new() -> Self {
        NodeRecord {
            condition: None,
            value: None,
        }
    }

    pub fn has_condition(&self) -> bool {
        self.condition.is_some()
    }
}

impl<CF, VF> Default for NodeRecord<CF, VF> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record: NodeRecord<u32, f64> = NodeRecord::new();
        assert!(!record.has_condition());
        assert!(record.value.is_none());
        assert_eq!(record, NodeRecord::default());
    }

    #[test]
    fn test_has_condition() {
        let mut record: NodeRecord<u32, f64> = NodeRecord::new();
        record.condition = Some(3);
        assert!(record.has_condition());
    }
}
