pub mod hand;
pub mod moves;
pub mod snapshot;
