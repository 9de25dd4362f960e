use clap::Parser;

use crate::bundle::bundle_ops;
use crate::bundle::bundler_error::BundlerError;

/// command line tool for grouping daily shipment legs into chronological
/// bundles
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct BundlerApp {
    /// file containing one `<id> <origin> <destination> <day>` record per line
    pub input_file: String,
}

impl BundlerApp {
    /// runs the bundling pipeline against locked stdout.
    pub fn run(&self) -> Result<(), BundlerError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let bundles = bundle_ops::process_shipment_file(&self.input_file, &mut out)?;
        log::info!("wrote {} bundles", bundles.len());
        Ok(())
    }
}
