use camino::Utf8Path;
use miette::miette;
use miette::IntoDiagnostic;
use tracing::instrument;
use walkdir::WalkDir;

use crate::fs;
use crate::staging::STAGING_DIR_NAME;

/// Copy the contents of `src` into `dst`, preserving permission bits.
///
/// Destination directories are created as needed, with `mkdir -p` semantics. Any source path
/// containing [`STAGING_DIR_NAME`] is skipped, along with everything under it.
///
/// The first error encountered is returned; already-copied files are not rolled back.
#[instrument(level = "trace")]
pub fn copy_dir(src: &Utf8Path, dst: &Utf8Path) -> miette::Result<()> {
    let entries = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !entry.path().to_string_lossy().contains(STAGING_DIR_NAME));

    for entry in entries {
        let entry = entry.into_diagnostic()?;
        let path = Utf8Path::from_path(entry.path())
            .ok_or_else(|| miette!("Path isn't UTF-8: {}", entry.path().display()))?;
        let relative = path.strip_prefix(src).into_diagnostic()?;
        let to = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&to)?;
        } else {
            // `fs::copy` preserves permission bits.
            fs::copy(path, &to)?;
        }
    }

    Ok(())
}
