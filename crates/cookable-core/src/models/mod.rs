pub mod cluster_summary;
pub mod match_result;

pub use cluster_summary::ClusterSummary;
pub use match_result::MatchResult;
