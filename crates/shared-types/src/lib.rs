pub mod case;
pub mod cause_list;
pub mod court;
pub mod error;

pub use case::*;
pub use cause_list::*;
pub use court::*;
pub use error::*;
