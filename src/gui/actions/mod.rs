// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,create_sheet,export}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod sheet;   // src/gui/actions/sheet.rs

pub use copy::copy;
pub use export::export;
pub use sheet::create_sheet;
