//! Selection of the extracted program directory.

use std::ffi::OsString;

/// Outcome of choosing the program root among top-level directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRootChoice {
    /// Directory name that will be launched.
    pub selected: OsString,
    /// Other top-level directories that were passed over.
    pub ignored: Vec<OsString>,
}

/// Pick the program root from the extraction target's directory names.
///
/// Filesystem enumeration order is platform-dependent, so the names are sorted
/// and the smallest one wins. Returns `None` when there are no directories.
pub fn select_program_root<I, S>(directory_names: I) -> Option<ProgramRootChoice>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut names: Vec<OsString> = directory_names.into_iter().map(Into::into).collect();
    if names.is_empty() {
        return None;
    }
    names.sort();
    names.dedup();
    let selected = names.remove(0);
    Some(ProgramRootChoice { selected, ignored: names })
}
