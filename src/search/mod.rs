pub mod frontier;
pub use frontier::*;

pub mod rollout;
pub use rollout::*;

pub mod score;
pub use score::*;

pub mod solution;
pub use solution::*;

pub mod state;
pub use state::*;

pub mod steps;
pub use steps::*;

pub mod tree;
pub use tree::*;
