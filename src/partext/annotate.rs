use super::blocks::Block;
use super::index::PositionIndex;
use super::markers::DateEntry;
use crate::pull_date::PullDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub effdate: String,
    pub id: String,
    pub frpage: String,
    pub label: String,
}

impl Annotation {
    /// Metadata for `block` from the nearest date and page markers before it.
    pub fn for_block(
        block: &Block,
        dates: &PositionIndex<DateEntry>,
        pages: &PositionIndex<String>,
        volume: &str,
        pull: PullDate,
    ) -> Self {
        let entry = dates.resolve(block.offset);
        let effdate = match entry.date {
            Some(d) => d.format("%Y%m%d").to_string(),
            None => pull.year_fallback(),
        };
        let page = pages.resolve(block.offset);
        Annotation {
            effdate,
            id: format!("{}-{}", pull.yyyymmdd(), block.seq),
            frpage: format!("{volume}FR{page}"),
            label: entry.label.clone(),
        }
    }

    /// Splice the attributes into the block's opening tag. Only the first
    /// `>` is touched. `EFFDATES` is left open; downstream closes it.
    pub fn inject(&self, block: &str) -> String {
        let attrs = format!(
            " EFFDATE='{}' ID='{}' FRPAGE='{}'><EFFDATES>{}",
            self.effdate, self.id, self.frpage, self.label
        );
        block.replacen('>', &attrs, 1)
    }
}
