pub mod query;
pub use query::query;

pub mod update_roles;
pub use update_roles::update_roles;
