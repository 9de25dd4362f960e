//! reads a file of daily shipment legs and prints maximal chronological
//! bundles, one space-separated sequence of shipment ids per line.
use clap::Parser;
use shipment_bundler::bundle::app::BundlerApp;

fn main() {
    env_logger::init();
    let app = BundlerApp::parse();
    if let Err(e) = app.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
