pub mod chart;
pub mod labels;
pub mod messages;
