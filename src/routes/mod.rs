pub(crate) mod astronomical;
pub(crate) mod demotable;
pub(crate) mod galaxy;
pub mod health_checks;
pub(crate) mod star;
pub(crate) mod universe;

pub use health_checks::*;
