pub mod query;
pub use query::query;

pub mod get;
pub use get::get;

pub mod create;
pub use create::create;

pub mod update;
pub use update::update;
