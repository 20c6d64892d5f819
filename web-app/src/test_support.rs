//! Helpers shared by tests that touch the process environment or the site files.

use std::{
    env,
    ffi::{OsStr, OsString},
    fs, io,
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};

static TEMPLATE_DIR_LOCK: Mutex<()> = Mutex::new(());

const TEMPLATE_DIR: &str = "TEMPLATE_DIR";

/// Exclusive hold on `TEMPLATE_DIR`. The previous value comes back on drop.
pub struct TemplateDir {
    previous: Option<OsString>,
    _guard: MutexGuard<'static, ()>,
}

impl TemplateDir {
    pub fn set(value: impl AsRef<OsStr>) -> Self {
        let dir = Self::lock();
        env::set_var(TEMPLATE_DIR, value);
        dir
    }

    pub fn unset() -> Self {
        let dir = Self::lock();
        env::remove_var(TEMPLATE_DIR);
        dir
    }

    fn lock() -> Self {
        let guard = TEMPLATE_DIR_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Self {
            previous: env::var_os(TEMPLATE_DIR),
            _guard: guard,
        }
    }
}

impl Drop for TemplateDir {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => env::set_var(TEMPLATE_DIR, value),
            None => env::remove_var(TEMPLATE_DIR),
        }
    }
}

/// Copies `templates/` and `webroot/style.css` below `root`, laid out the way
/// `TEMPLATE_DIR` expects.
pub fn copy_site(root: &Path) -> io::Result<()> {
    let source = Path::new(env!("CARGO_MANIFEST_DIR"));

    let templates = root.join("templates");
    fs::create_dir_all(&templates)?;
    for entry in fs::read_dir(source.join("templates"))? {
        let entry = entry?;
        if entry.path().is_file() {
            fs::copy(entry.path(), templates.join(entry.file_name()))?;
        }
    }

    let webroot = root.join("webroot");
    fs::create_dir_all(&webroot)?;
    fs::copy(
        source.join("webroot/style.css"),
        webroot.join("style.css"),
    )?;
    Ok(())
}
