use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a pull run.
///
/// Rule and marker problems abort the run before any file is committed; a
/// date marker that does not parse is *not* an error (see `partext::markers`).
#[derive(Debug, Error)]
pub enum PullError {
    #[error("bad rewrite rule #{index} in {set} set ({pattern:?}): {source}")]
    BadRule {
        set: &'static str,
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("missing <VOL> marker; page references cannot be built")]
    MissingVolume,

    #[error("invalid month code {0:?}")]
    InvalidMonth(String),

    #[error("date {0:?} must be in a <MMDDYY> format")]
    InvalidDate(String),

    #[error("directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("no input files located for {date} (looked for {pattern})")]
    NoSourceFiles { date: String, pattern: String },

    #[error("input is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("bad source file pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_volume_display() {
        assert_eq!(
            PullError::MissingVolume.to_string(),
            "missing <VOL> marker; page references cannot be built"
        );
    }

    #[test]
    fn bad_rule_names_set_and_index() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = PullError::BadRule {
            set: "alpha",
            index: 7,
            pattern: "(unclosed".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("bad rewrite rule #7 in alpha set"), "{msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn no_source_files_display() {
        let err = PullError::NoSourceFiles {
            date: "010524".to_string(),
            pattern: "05JAR*.SGM".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no input files located for 010524 (looked for 05JAR*.SGM)"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PullError = io.into();
        assert!(matches!(err, PullError::Io(_)));
        assert_eq!(err.to_string(), "gone");
    }
}
