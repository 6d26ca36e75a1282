//! Make-style dependency rules for `-M`.
//!
//! For `out.css` built from `style.scss`, which imports `_colors.scss`:
//!
//! ```text
//! out.css : style.scss _colors.scss
//! style.scss :
//! _colors.scss :
//! ```
//!
//! The empty-recipe rules keep make from failing when a prerequisite is later
//! deleted or renamed. See <http://make.paulandlesley.org/autodep.html#norule>.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use sass_engine::DependencyList;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum MakeRuleError {
    #[error("Error opening dependency file: {0}")]
    Open(#[source] io::Error),
    #[error("Error writing to dependency file: {0}")]
    Write(#[source] io::Error),
}

/// Render the rules for `target` depending on `dependencies`.
///
/// Path-list separators become single spaces; every space-separated token then
/// gets its own empty-recipe rule, in order and without deduplication.
pub fn render(dependencies: &DependencyList, target: &str) -> String {
    format!("{target}{}", rules_after_target(dependencies))
}

/// Everything in the rules file that follows the target name.
fn rules_after_target(dependencies: &DependencyList) -> String {
    let prerequisites = dependencies.entries().collect::<Vec<_>>().join(" ");

    let mut rules = format!(" : {prerequisites}\n");
    for token in prerequisites.split(' ') {
        rules.push_str(token);
        rules.push_str(" :\n");
    }
    rules
}

/// The target exactly as named on disk.
#[cfg(unix)]
fn target_bytes(target: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(target.as_os_str().as_bytes())
}

/// The target exactly as named on disk.
#[cfg(not(unix))]
fn target_bytes(target: &Path) -> Cow<'_, [u8]> {
    match target.to_string_lossy() {
        Cow::Borrowed(name) => Cow::Borrowed(name.as_bytes()),
        Cow::Owned(name) => Cow::Owned(name.into_bytes()),
    }
}

/// Write the rules for `target` into `rules_file`, truncating it.
///
/// An empty dependency list leaves the filesystem untouched. A write failure
/// part way through leaves the partial file in place.
pub fn emit(
    dependencies: &DependencyList,
    target: &Path,
    rules_file: &Path,
) -> Result<(), MakeRuleError> {
    if dependencies.is_empty() {
        debug!("no dependencies; make rule not written");
        return Ok(());
    }

    let mut file = File::create(rules_file).map_err(MakeRuleError::Open)?;
    file.write_all(&target_bytes(target))
        .map_err(MakeRuleError::Write)?;
    file.write_all(rules_after_target(dependencies).as_bytes())
        .map_err(MakeRuleError::Write)?;

    debug!(path = %rules_file.display(), "make rule written");
    Ok(())
}
