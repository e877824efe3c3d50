pub mod api;
pub mod search;
pub mod section;

pub use api::*;
pub use search::*;
pub use section::*;
