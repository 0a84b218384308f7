mod astronomical;
mod galaxy;
mod star;
mod universe;

pub use astronomical::*;
pub use galaxy::*;
pub use star::*;
pub use universe::*;
