pub mod ages;
pub mod categories;
