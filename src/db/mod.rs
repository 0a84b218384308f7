pub mod astronomical;
pub mod demotable;
mod error;
pub mod galaxy;
mod pool;
pub mod schema;
mod scoped;
pub mod star;
pub mod universe;

pub use error::DbError;
pub use pool::Database;
pub use scoped::{with_lease, Lease};
