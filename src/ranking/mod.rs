pub mod engagement;
pub mod pipeline;

pub use engagement::EngagementScorer;
pub use pipeline::{collect_pool, top_content, RankedList, RankedPost, TopContentRanker, TOP_CONTENT_LIMIT};
