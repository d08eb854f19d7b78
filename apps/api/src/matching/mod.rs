// University matching: keyword expansion, scoring, and the filter pipeline.

pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod score;

pub use matcher::{find_matches, MatchOutcome, ScoredMatch};
