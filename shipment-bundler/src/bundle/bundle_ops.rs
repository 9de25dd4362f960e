use std::fs;
use std::io::Write;

use crate::bundle::bundle::Bundle;
use crate::bundle::bundle_engine::BundleEngine;
use crate::bundle::bundler_error::BundlerError;
use crate::bundle::parse_ops;
use crate::bundle::shipment_store::ShipmentStore;

/// reads a shipment file, partitions the records into bundles, and writes one
/// bundle per line to `out` in discovery order. the whole input is read and
/// validated before any output is produced, so a failed run emits nothing.
pub fn process_shipment_file<W: Write>(
    input_file: &str,
    out: &mut W,
) -> Result<Vec<Bundle>, BundlerError> {
    let contents = fs::read_to_string(input_file).map_err(|e| BundlerError::InputReadError {
        filename: String::from(input_file),
        message: format!("{e}"),
    })?;
    let shipments = parse_ops::parse_shipments(&contents)?;
    log::info!("parsed {} shipments from '{input_file}'", shipments.len());

    let mut store = ShipmentStore::new();
    for shipment in shipments {
        store.add(shipment)?;
    }

    let mut engine = BundleEngine::new(store);
    let bundles = engine.find_all_bundles();
    for bundle in bundles.iter() {
        writeln!(out, "{bundle}").map_err(|e| BundlerError::OutputWriteError(format!("{e}")))?;
    }
    Ok(bundles)
}
