pub mod distribution;
pub mod domain;
pub mod filter;
pub mod report;
pub mod time_slot;
pub mod user;
