// src/scrape/mod.rs
mod collect;

pub use collect::collect_study_sheet;
pub use collect::RunSummary;
