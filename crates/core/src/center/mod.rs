//! Registration-center selection cascade

mod ports;
mod selector;

pub use ports::CenterDirectory;
pub use selector::CenterSelector;
