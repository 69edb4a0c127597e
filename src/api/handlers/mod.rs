pub mod class;
pub mod client;
pub mod gym;
pub mod health;
pub mod payment;
pub mod plan;
pub mod report;
pub mod schedule;
