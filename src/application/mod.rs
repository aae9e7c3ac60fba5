pub mod query;
pub mod save;
pub mod translate;
