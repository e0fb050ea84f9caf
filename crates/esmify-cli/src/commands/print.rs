//! Print command implementation.

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use tracing::debug;

/// Convert one file and write the result to stdout.
///
/// Selection globs do not apply: the named file is converted whatever its
/// path. Its language is still chosen by extension.
pub fn execute(args: PrintArgs) -> Result<()> {
    let path = utils::resolve_path(&args.file, &utils::get_cwd()?);
    let source = std::fs::read_to_string(&path).with_path(&path)?;

    let conversion = esmify::convert_source(&path, &source)?;
    debug!(
        file = %path.display(),
        changed = conversion.changed,
        rewrites = conversion.stats.total(),
        "converted"
    );

    print!("{}", conversion.code);
    Ok(())
}
