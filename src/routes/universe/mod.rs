mod add;
mod count;
mod delete;
mod get;
mod initiate;

pub use add::*;
pub use count::*;
pub use delete::*;
pub use get::*;
pub use initiate::*;
