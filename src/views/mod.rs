mod security_table;
pub use security_table::*;
