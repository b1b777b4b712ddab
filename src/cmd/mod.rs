pub mod analyze;
pub mod categories;
pub mod lookup;
pub mod serve;
