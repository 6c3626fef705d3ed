pub mod annotate;
pub mod blocks;
pub mod index;
pub mod markers;

use tracing::{info, warn};

use crate::assemble;
use crate::error::PullError;
use crate::pull_date::PullDate;
use annotate::Annotation;

pub fn run(text: &str, pull: PullDate) -> Result<String, PullError> {
    let volume = markers::volume_number(text)?;
    let dates = markers::date_index(text, pull);
    let pages = markers::page_index(text);
    let blocks = blocks::extract_blocks(text);
    if blocks.is_empty() {
        warn!("no REGTEXT blocks found; output will be empty");
    }

    let annotated: Vec<String> = blocks
        .iter()
        .map(|b| Annotation::for_block(b, &dates, &pages, &volume, pull).inject(&b.text))
        .collect();
    info!(blocks = annotated.len(), volume = %volume, "blocks annotated");
    Ok(assemble::wrap(annotated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull() -> PullDate {
        PullDate::parse("010524").unwrap()
    }

    #[test]
    fn annotates_from_preceding_markers() {
        let text = "<FEDREG><VOL>88<NO>4\n\
                    <DATES><HED>DATES:\n<P>Effective January 5, 2024.</DATES>\n\
                    <PRTPAGE P='12345'>\n\
                    <REGTEXT TITLE='40' PART='52'>\n<P>Body.</REGTEXT>";
        let out = run(text, pull()).unwrap();
        assert!(out.starts_with("<CFRDOC ED='XX' REV='XX'>\n\n<REGTEXT TITLE='40' PART='52' "));
        assert!(out.contains(
            "EFFDATE='20240105' ID='20240105-1' FRPAGE='88FR12345'><EFFDATES>January 5, 2024\n<P>Body."
        ));
        assert!(out.ends_with("</REGTEXT>\n</CFRDOC>"));
    }

    #[test]
    fn blocks_without_dates_use_pull_year() {
        let text = "<VOL>89\n<REGTEXT TITLE='1'>a</REGTEXT>\n\
                    <PRTPAGE P='77'>\n<REGTEXT TITLE='2'>b</REGTEXT>";
        let out = run(text, pull()).unwrap();
        assert_eq!(out.matches("EFFDATE='20240000'").count(), 2);
        assert!(out.contains("ID='20240105-1' FRPAGE='89FR00000'><EFFDATES>Pull date: January 5, 2024a"));
        assert!(out.contains("ID='20240105-2' FRPAGE='89FR77'"));
    }

    #[test]
    fn later_dates_section_applies_to_later_blocks() {
        let text = "<VOL>89\n\
                    <DATES><HED>DATES:\n<P>Effective March 1, 2024.</DATES>\n\
                    <REGTEXT TITLE='1'>a</REGTEXT>\n\
                    <DATES><HED>DATES:\n<P>Effective on publication.</DATES>\n\
                    <REGTEXT TITLE='2'>b</REGTEXT>";
        let out = run(text, pull()).unwrap();
        assert!(out.contains("EFFDATE='20240301' ID='20240105-1'"));
        assert!(out.contains(
            "EFFDATE='20240000' ID='20240105-2' FRPAGE='89FR00000'><EFFDATES>Effective on publication.</DATES>b"
        ));
    }

    #[test]
    fn missing_volume_is_fatal() {
        let text = "<REGTEXT TITLE='1'>a</REGTEXT>";
        assert!(matches!(run(text, pull()), Err(PullError::MissingVolume)));
    }

    #[test]
    fn no_blocks_still_wraps() {
        let out = run("<VOL>88\n<P>nothing here", pull()).unwrap();
        assert_eq!(out, "<CFRDOC ED='XX' REV='XX'>\n\n\n</CFRDOC>");
    }

    #[test]
    fn fixture_feed() {
        let text = std::fs::read_to_string("tests/fixtures/normalized.sgm").unwrap();
        let out = run(&text, pull()).unwrap();
        assert_eq!(out.matches("<REGTEXT TITLE").count(), 3);
        assert!(out.contains("ID='20240105-3'"));
        assert!(out.contains("EFFDATE='20240105' ID='20240105-1' FRPAGE='89FR1001'"));
        assert!(out.contains("EFFDATE='20240105' ID='20240105-2' FRPAGE='89FR1002'"));
        assert!(out.contains("EFFDATE='20240201' ID='20240105-3' FRPAGE='89FR1003'"));
    }
}
