pub mod catalogue;
pub use catalogue::*;

pub mod category;
pub use category::*;

pub mod combo;
pub use combo::*;

pub mod mode;
pub use mode::*;
