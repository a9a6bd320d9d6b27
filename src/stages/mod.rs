pub mod stage0_normalize;
pub mod stage1_tokenize;
pub mod stage2_aggregate;
pub mod stage3_canonicalize;
pub mod stage4_prune;
pub mod stage5_summarize;
pub mod stage6_filter;

pub use stage0_normalize::*;
pub use stage1_tokenize::*;
pub use stage2_aggregate::*;
pub use stage3_canonicalize::*;
pub use stage4_prune::*;
pub use stage5_summarize::*;
pub use stage6_filter::*;
