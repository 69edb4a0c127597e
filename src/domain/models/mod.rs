pub mod class;
pub mod client;
pub mod gym;
pub mod payment;
pub mod plan;
pub mod schedule;
