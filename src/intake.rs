use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::PullError;
use crate::pull_date::PullDate;
use crate::utils;

const MONTHS: [(&str, &str, &str); 12] = [
    ("01", "JA", "JAN"),
    ("02", "FE", "FEB"),
    ("03", "MR", "MAR"),
    ("04", "AP", "APR"),
    ("05", "MY", "MAY"),
    ("06", "JN", "JUN"),
    ("07", "JY", "JUL"),
    ("08", "AU", "AUG"),
    ("09", "SE", "SEP"),
    ("10", "OC", "OCT"),
    ("11", "NO", "NOV"),
    ("12", "DE", "DEC"),
];

/// Two-letter feed code and three-letter abbreviation for `01`..`12`.
pub fn month_codes(mm: &str) -> Result<(&'static str, &'static str), PullError> {
    MONTHS
        .iter()
        .find(|(num, _, _)| *num == mm)
        .map(|&(_, short, abbrev)| (short, abbrev))
        .ok_or_else(|| PullError::InvalidMonth(mm.to_string()))
}

/// Fragments are `<DD><MM>R<n>.SGM` with the two-letter month code.
pub fn source_pattern(from: &Path, pull: PullDate) -> Result<String, PullError> {
    let mmddyy = pull.mmddyy();
    let (short, _) = month_codes(&mmddyy[0..2])?;
    let dir = PathBuf::from(Pattern::escape(&from.to_string_lossy()));
    let pattern = dir.join(format!("{}{short}R*.SGM", &mmddyy[2..4]));
    Ok(pattern.to_string_lossy().into_owned())
}

/// `<YY><MMM><DD>`, e.g. `24JAN05`.
pub fn combined_name(pull: PullDate) -> Result<String, PullError> {
    let mmddyy = pull.mmddyy();
    let (_, abbrev) = month_codes(&mmddyy[0..2])?;
    Ok(format!("{}{abbrev}{}", &mmddyy[4..6], &mmddyy[2..4]))
}

/// Concatenate every fragment for `pull` (sorted by path) into the combined
/// file in `to`. Nothing is written unless all fragments are readable.
pub fn move_files(from: &Path, to: &Path, pull: PullDate) -> Result<PathBuf, PullError> {
    let pattern = source_pattern(from, pull)?;
    let mut sources = Vec::new();
    for entry in glob::glob(&pattern)? {
        sources.push(entry.map_err(io::Error::from)?);
    }
    sources.sort();

    if sources.is_empty() {
        return Err(PullError::NoSourceFiles {
            date: pull.to_string(),
            pattern,
        });
    }
    if let Some(bad) = sources.iter().find(|p| !p.is_file()) {
        return Err(PullError::NotAFile(bad.clone()));
    }

    fs::create_dir_all(to)?;
    let dest = to.join(combined_name(pull)?);
    let mut tmp = NamedTempFile::new_in(to)?;
    for path in &sources {
        let mut file = File::open(path)?;
        let copied = io::copy(&mut file, &mut tmp)?;
        debug!(path = %path.display(), bytes = copied, "fragment appended");
    }
    let dest = utils::commit(tmp, dest)?;
    info!(fragments = sources.len(), dest = %dest.display(), "fragments combined");
    Ok(dest)
}
