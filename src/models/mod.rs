pub mod card;
pub mod metric;
pub mod page;

pub use card::*;
pub use metric::*;
pub use page::*;
