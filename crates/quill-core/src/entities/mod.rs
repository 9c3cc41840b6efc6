//! Generated payloads returned by the three editorial operations.

mod analysis;
mod angle;
mod claim;
mod draft;
mod rewrite;

pub use analysis::AnalysisResult;
pub use angle::Angle;
pub use claim::Claim;
pub use draft::{DraftResult, ResearchItem, SeoMetadata};
pub use rewrite::RewriteResult;
