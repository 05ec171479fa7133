// Pipeline processing: field normalization, classification, filtering and deduplication

pub mod classify;
pub mod dates;
pub mod dedup;
pub mod filters;
pub mod normalize;
