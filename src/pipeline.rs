use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::intake;
use crate::partext;
use crate::pull_date::PullDate;
use crate::rewrite;
use crate::rules::RuleSets;
use crate::utils;

#[derive(Debug, Clone)]
pub struct Job {
    pub from_dir: PathBuf,
    pub to_dir: PathBuf,
    pub pull: PullDate,
    pub keep_intermediate: bool,
}

#[derive(Debug)]
pub struct Outcome {
    pub combined: PathBuf,
    pub intermediate: Option<PathBuf>,
    pub output: PathBuf,
}

/// Combine the day's fragments, then turn them into `<YYYYMMDD>.AMD`.
pub fn run(job: &Job) -> Result<Outcome> {
    let rules = RuleSets::compile()?;
    let combined = intake::move_files(&job.from_dir, &job.to_dir, job.pull)
        .with_context(|| format!("collecting fragments from {}", job.from_dir.display()))?;
    let (intermediate, output) = process(&combined, &job.to_dir, job.pull, &rules, job.keep_intermediate)?;
    Ok(Outcome {
        combined,
        intermediate,
        output,
    })
}

/// Alpha, annotation and omega over one combined file. Nothing is written
/// until every stage has succeeded; a kept intermediate lands before the
/// output.
pub fn process(
    source: &Path,
    to_dir: &Path,
    pull: PullDate,
    rules: &RuleSets,
    keep_intermediate: bool,
) -> Result<(Option<PathBuf>, PathBuf)> {
    let raw = fs::read_to_string(source)
        .with_context(|| format!("reading {}", source.display()))?;
    info!(source = %source.display(), bytes = raw.len(), "normalizing");
    let normalized = rewrite::apply(raw, &rules.alpha);

    let annotated = partext::run(&normalized, pull)
        .with_context(|| format!("annotating {}", source.display()))?;

    info!("finishing");
    let finished = rewrite::apply(annotated.clone(), &rules.omega);

    let intermediate = if keep_intermediate {
        let name = format!("{}.partext", pull.yyyymmdd());
        let path = utils::write_atomic(to_dir, &name, &annotated)
            .with_context(|| format!("writing intermediate to {}", to_dir.display()))?;
        Some(path)
    } else {
        None
    };
    let output = utils::write_atomic(to_dir, &format!("{}.AMD", pull.yyyymmdd()), &finished)
        .with_context(|| format!("writing output to {}", to_dir.display()))?;
    info!(output = %output.display(), "pull complete");
    Ok((intermediate, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "tests/fixtures/05JAR1.SGM";

    fn pull() -> PullDate {
        PullDate::parse("010524").unwrap()
    }

    fn job(from: &Path, to: &Path, keep: bool) -> Job {
        Job {
            from_dir: from.to_path_buf(),
            to_dir: to.to_path_buf(),
            pull: pull(),
            keep_intermediate: keep,
        }
    }

    #[test]
    fn end_to_end() {
        let from = tempfile::tempdir().unwrap();
        let to = tempfile::tempdir().unwrap();
        fs::copy(FIXTURE, from.path().join("05JAR1.SGM")).unwrap();

        let outcome = run(&job(from.path(), to.path(), false)).unwrap();
        assert_eq!(outcome.combined, to.path().join("24JAN05"));
        assert_eq!(outcome.output, to.path().join("20240105.AMD"));
        assert!(outcome.intermediate.is_none());

        let out = fs::read_to_string(&outcome.output).unwrap();
        assert!(out.starts_with("<CFRDOC ED='XX' REV='XX'>"));
        assert!(out.contains("EFFDATE='20240105' ID='20240105-1' FRPAGE='88FR12345'"));
        assert!(out.contains("<EFFDATES>January 5, 2024"));
        assert!(out.contains("Authority:<P>42 U.S.C. 7401"));
        assert!(out.ends_with("</REGTEXT>\n\n</CFRDOC>"));

        let names: Vec<_> = fs::read_dir(to.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names.len(), 2, "{names:?}");
    }

    #[test]
    fn keeps_intermediate_when_asked() {
        let from = tempfile::tempdir().unwrap();
        let to = tempfile::tempdir().unwrap();
        fs::copy(FIXTURE, from.path().join("05JAR1.SGM")).unwrap();

        let outcome = run(&job(from.path(), to.path(), true)).unwrap();
        let partext = outcome.intermediate.unwrap();
        assert_eq!(partext, to.path().join("20240105.partext"));
        let text = fs::read_to_string(partext).unwrap();
        assert!(text.contains("<EFFDATES>January 5, 2024\n<P>1. The authority citation"));
    }

    #[test]
    fn omega_output_is_stable() {
        let rules = RuleSets::compile().unwrap();
        let to = tempfile::tempdir().unwrap();
        let (_, output) = process(Path::new(FIXTURE), to.path(), pull(), &rules, false).unwrap();
        let once = fs::read_to_string(output).unwrap();
        let twice = rewrite::apply(once.clone(), &rules.omega);
        assert_eq!(twice, once);
    }

    #[test]
    fn structural_fixture_reaches_canonical_form() {
        let rules = RuleSets::compile().unwrap();
        let to = tempfile::tempdir().unwrap();
        let source = Path::new("tests/fixtures/structural.SGM");
        let (_, output) = process(source, to.path(), pull(), &rules, false).unwrap();
        let out = fs::read_to_string(output).unwrap();
        let expected = fs::read_to_string("tests/fixtures/structural.AMD").unwrap();
        assert_eq!(out, expected);
        assert_eq!(rewrite::apply(out.clone(), &rules.omega), out);
    }

    #[test]
    fn only_output_without_intermediate() {
        let rules = RuleSets::compile().unwrap();
        let to = tempfile::tempdir().unwrap();
        process(Path::new(FIXTURE), to.path(), pull(), &rules, false).unwrap();
        let names: Vec<_> = fs::read_dir(to.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["20240105.AMD".to_string()]);
    }

    #[test]
    fn failed_intermediate_blocks_output() {
        let rules = RuleSets::compile().unwrap();
        let to = tempfile::tempdir().unwrap();
        fs::create_dir(to.path().join("20240105.partext")).unwrap();
        let err = process(Path::new(FIXTURE), to.path(), pull(), &rules, true).unwrap_err();
        assert!(format!("{err:#}").contains("writing intermediate"));
        assert!(!to.path().join("20240105.AMD").exists());
    }

    #[test]
    fn missing_volume_writes_nothing() {
        let from = tempfile::tempdir().unwrap();
        let to = tempfile::tempdir().unwrap();
        fs::write(
            from.path().join("05JAR1.SGM"),
            "<REGTEXT TITLE=\"40\" PART=\"52\">\n<P>Text.</P>\n</REGTEXT>\n",
        )
        .unwrap();

        let err = run(&job(from.path(), to.path(), true)).unwrap_err();
        assert!(format!("{err:#}").contains("missing <VOL> marker"));
        assert!(!to.path().join("20240105.AMD").exists());
        assert!(!to.path().join("20240105.partext").exists());
    }
}
