pub mod query;
pub use query::query;
