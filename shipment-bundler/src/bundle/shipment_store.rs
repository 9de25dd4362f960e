use std::collections::HashMap;

use crate::bundle::bundler_error::BundlerError;
use crate::bundle::day_of_week::DayOfWeek;
use crate::bundle::shipment::Shipment;

/// owns every shipment record for a run. records live in one arena vector;
/// the by-id and by-day indexes hold arena positions rather than copies, so a
/// consumed flag flipped through one view is observed through every other.
#[derive(Debug, Default)]
pub struct ShipmentStore {
    /// arena of shipment records in file order
    shipments: Vec<Shipment>,
    /// arena position of each shipment id
    by_id: HashMap<String, usize>,
    /// arena positions grouped by day, preserving insertion order. this
    /// ordering drives bundle discovery and is part of the output contract.
    by_day: [Vec<usize>; 5],
}

impl ShipmentStore {
    pub fn new() -> ShipmentStore {
        ShipmentStore::default()
    }

    /// appends a shipment to the arena and to both indexes. a duplicate id is
    /// rejected: the id index would otherwise overwrite silently and break
    /// the one-bundle-per-shipment invariant.
    pub fn add(&mut self, shipment: Shipment) -> Result<(), BundlerError> {
        if self.by_id.contains_key(&shipment.id) {
            return Err(BundlerError::DuplicateShipmentIdError(shipment.id));
        }
        let index = self.shipments.len();
        self.by_id.insert(shipment.id.clone(), index);
        self.by_day[shipment.day as usize].push(index);
        self.shipments.push(shipment);
        Ok(())
    }

    /// resolves a shipment from its textual id.
    pub fn by_id(&self, id: &str) -> Option<&Shipment> {
        self.by_id.get(id).map(|index| &self.shipments[*index])
    }

    /// arena positions of the shipments recorded for `day`, in original
    /// insertion order.
    pub fn by_day(&self, day: DayOfWeek) -> &[usize] {
        &self.by_day[day as usize]
    }

    /// the record at an arena position. positions come from [`Self::by_day`]
    /// and are always in bounds.
    pub fn shipment(&self, index: usize) -> &Shipment {
        &self.shipments[index]
    }

    pub fn mark_consumed(&mut self, index: usize) {
        self.shipments[index].consumed = true;
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}
