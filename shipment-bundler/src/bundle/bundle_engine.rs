use crate::bundle::bundle::Bundle;
use crate::bundle::day_of_week::DayOfWeek;
use crate::bundle::shipment_store::ShipmentStore;

/// partitions the shipments of a store into maximal chronological chains.
///
/// discovery is greedy and deterministic: days are visited Monday through
/// Friday, shipments within a day in file order, and each not-yet-consumed
/// shipment roots one depth-first search for the longest chain reachable from
/// it. the winning chain is emitted as a [`Bundle`] and its shipments are
/// marked consumed, so every shipment lands in exactly one bundle. no attempt
/// is made to maximize total coverage across starting points.
pub struct BundleEngine {
    store: ShipmentStore,
}

impl BundleEngine {
    pub fn new(store: ShipmentStore) -> BundleEngine {
        BundleEngine { store }
    }

    /// the store backing this engine, exposed so callers can resolve bundle
    /// ids back to records after bundling.
    pub fn store(&self) -> &ShipmentStore {
        &self.store
    }

    pub fn find_all_bundles(&mut self) -> Vec<Bundle> {
        let mut bundles: Vec<Bundle> = vec![];
        for day in DayOfWeek::ALL {
            // indices are copied out so the store can be mutated while the
            // day bucket is walked
            let day_roots = self.store.by_day(day).to_vec();
            for root in day_roots {
                if self.store.shipment(root).consumed {
                    continue;
                }
                let chain = self.find_longest_bundle(root, vec![], vec![]);
                for index in chain.iter() {
                    self.store.mark_consumed(*index);
                }
                let bundle = Bundle::new(
                    chain
                        .iter()
                        .map(|index| self.store.shipment(*index).id.clone())
                        .collect(),
                );
                log::debug!("found bundle of {} shipments: {}", bundle.len(), bundle);
                bundles.push(bundle);
            }
        }
        bundles
    }

    /// depth-first search for the longest chain running through `index`.
    /// `path` is the chain walked so far on this branch; `best` is the
    /// longest chain seen anywhere in this search tree. chains are compared
    /// by shipment count, and only a strictly longer chain replaces `best`,
    /// so the first chain discovered at a given length wins ties.
    fn find_longest_bundle(&self, index: usize, path: Vec<usize>, best: Vec<usize>) -> Vec<usize> {
        let shipment = self.store.shipment(index);
        if shipment.consumed {
            return best;
        }

        // each branch owns its path; sibling branches must not alias
        let mut path = path;
        path.push(index);

        let mut best = best;
        if path.len() > best.len() {
            best = path.clone();
        }

        let next_day = match shipment.day.next() {
            Some(day) => day,
            None => return best,
        };
        for child_index in self.store.by_day(next_day) {
            let child = self.store.shipment(*child_index);
            if !child.consumed && shipment.is_valid_child(child) {
                best = self.find_longest_bundle(*child_index, path.clone(), best);
            }
        }
        best
    }
}
