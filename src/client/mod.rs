//! Client side of the directory: HTTP services for the backend, a geolocation seam,
//! and [`StakeholderSearch`], the state container a search screen is built on.

mod api;
pub use api::*;

mod error;
pub use error::*;

mod geolocation;
pub use geolocation::*;

mod state;
pub use state::*;

mod search;
pub use search::*;
