// src/log.rs
//
// env_logger setup shared by the binaries. Lines look like
//   [00:00:01.250][INFO] Fetched experiment XNAT_E00012
// where the stamp is time elapsed since the logger was installed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn builder() -> Builder {
    start();
    let mut b = Builder::from_env(Env::default().default_filter_or("info"));
    b.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });
    b
}

/// Log to stderr. Safe to call more than once.
pub fn init_cli() {
    let _ = builder().target(Target::Stderr).try_init();
}

/// Log to `.store/debug.log`; falls back to stderr if the file can't be opened.
pub fn init_gui() {
    let _ = fs::create_dir_all(STORE_DIR);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(LOG_FILE));

    let mut b = builder();
    match file {
        Ok(f) => { b.target(Target::Pipe(Box::new(f))); }
        Err(_) => { b.target(Target::Stderr); }
    }
    let _ = b.try_init();
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
