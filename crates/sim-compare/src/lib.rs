pub mod normalize;
pub mod align;
pub mod score;
pub mod fragment;
pub mod worker;
pub mod result;

pub use align::{align, align_with, MatchBlock, Matcher};
pub use fragment::{extract_fragments, MAX_FRAGMENTS};
pub use normalize::{normalize, NormalizedText};
pub use result::*;
pub use score::score;
pub use worker::{compare_all, CompareConfig, CompareEngine};
