mod bundler_app;

pub use bundler_app::BundlerApp;
