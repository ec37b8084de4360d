// src/config/consts.rs

// Net config
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("study_sheet/", env!("CARGO_PKG_VERSION"));

// Environment (dashboard launched from an XNAT project)
pub const ENV_HOST: &str = "XNAT_HOST";
pub const ENV_USER: &str = "XNAT_USER";
pub const ENV_PASS: &str = "XNAT_PASS";
pub const ENV_ITEM_ID: &str = "XNAT_ITEM_ID";
pub const ENV_XSI_TYPE: &str = "XNAT_XSI_TYPE";
pub const PROJECT_XSI_TYPE: &str = "xnat:projectData";

// Extraction
pub const PET_CT_MODALITIES: [&str; 3] = ["pt", "pet", "ct"];
pub const SPLIT_MARKER: &str = "split";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_FILE: &str = "study_sheet.csv";

// Archive validator
pub const SOURCE_STATS_FILE: &str = "source_stats.json";
pub const ARCHIVE_SUBDIR: &str = "arc001";
pub const SCANS_SUBDIR: &str = "SCANS";
pub const CATALOG_MARKER: &str = "catalog";
