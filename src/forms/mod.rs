pub mod astronomical;
pub mod demotable;
pub mod galaxy;
mod lenient;
pub mod star;
pub mod universe;
