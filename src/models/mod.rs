pub mod entry;
pub mod frequency;
pub mod history;
pub mod record;

pub use entry::*;
pub use frequency::*;
pub use history::*;
pub use record::*;
