pub mod noise;
pub mod plurals;
pub mod stopwords;

pub use noise::*;
pub use plurals::*;
pub use stopwords::*;
