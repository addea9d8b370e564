pub mod cell;
pub mod fare;
pub mod selection;
pub mod series;

pub use cell::*;
pub use fare::*;
pub use selection::*;
pub use series::*;
