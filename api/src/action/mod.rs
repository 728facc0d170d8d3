mod handlers;
mod registry;

pub use registry::register_live_namespace;
