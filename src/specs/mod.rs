//! # Reading XNAT responses
//!
//! Each spec here knows the shape of one server response and turns it into
//! something the rest of the crate can use:
//!
//! - `experiments` – `/data/projects/{id}/experiments` → ordered experiment ids.
//! - `experiment`  – `/data/experiments/{id}` → the experiment document (`items[0]`).
//! - `pet_ct`      – experiment document → study-sheet rows for PET/CT scans.
//!
//! Networking goes through `core::net::JsonSource`, so everything here can be
//! tested offline with canned JSON. Specs never write files or touch GUI state;
//! the driver in `scrape` decides what to do with failures.
//!
//! ```text
//! GUI / CLI → scrape::collect_study_sheet → specs::experiments::try_list
//!                                        → specs::experiment::fetch
//!                                        → specs::pet_ct::extract_with
//! ```
pub mod experiments;
pub mod experiment;
pub mod pet_ct;
