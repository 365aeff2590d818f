pub mod duel;
pub use duel::*;

pub mod play;
pub use play::*;

pub mod side;
pub use side::*;
