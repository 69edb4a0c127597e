pub mod capacity;
pub mod membership;
pub mod revenue;
