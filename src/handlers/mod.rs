pub mod health;
pub mod page;
pub mod search;

pub use health::*;
pub use page::*;
pub use search::*;
