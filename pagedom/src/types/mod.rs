mod enums;

pub use enums::{Direction, Display, TextStyle};
