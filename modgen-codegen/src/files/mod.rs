//! Files produced by generation.

mod module_ts;

pub use module_ts::ModuleTs;
