use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Start appending log lines to `path`. Failures leave logging disabled.
pub fn init_log(path: &Path) {
    let file = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
    if let Ok(file) = file
        && let Ok(mut guard) = LOGGER.lock()
    {
        *guard = Some(file);
    }
}

pub fn logln(msg: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = writeln!(file, "{msg}");
        }
    }
}
