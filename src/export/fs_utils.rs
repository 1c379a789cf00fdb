use std::io::{self, Write};
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

/// Check whether a file may be created or overwritten.
///
/// Missing file or `force` passes straight through; otherwise the user
/// is asked before an existing file gets clobbered.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        )),
    }
}
