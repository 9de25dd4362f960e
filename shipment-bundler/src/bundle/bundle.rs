use std::fmt::Display;

use itertools::Itertools;

/// an ordered maximal chain of shipments, recorded by id. a bundle is a
/// derived output artifact; the shipment records themselves stay in the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    ids: Vec<String>,
}

impl Bundle {
    pub fn new(ids: Vec<String>) -> Bundle {
        Bundle { ids }
    }

    /// shipment ids in chain order, each parent before its child.
    pub fn shipment_ids(&self) -> &[String] {
        &self.ids
    }

    /// number of shipments in the chain.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Display for Bundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ids.iter().join(" "))
    }
}
