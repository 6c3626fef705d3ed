use std::sync::LazyLock;

use regex::Regex;

static REGTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<REGTEXT TITLE.*?</REGTEXT>").unwrap());

/// One `<REGTEXT TITLE…>…</REGTEXT>` span, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub seq: usize,
    pub offset: usize,
    pub text: String,
}

/// Non-overlapping blocks in document order. A block ends at the first
/// closing tag, so nested REGTEXT is not supported.
pub fn extract_blocks(text: &str) -> Vec<Block> {
    REGTEXT_RE
        .find_iter(text)
        .enumerate()
        .map(|(i, m)| Block {
            seq: i + 1,
            offset: m.start(),
            text: m.as_str().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_in_order() {
        let text = "head\n<REGTEXT TITLE='7' PART='1'>\none\n</REGTEXT>\nmid\n\
                    <REGTEXT TITLE='7' PART='2'>two</REGTEXT>\
                    <REGTEXT TITLE='7' PART='3'>three</REGTEXT>tail";
        let blocks = extract_blocks(text);
        let seqs: Vec<_> = blocks.iter().map(|b| b.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(blocks[0].offset, 5);
        assert_eq!(blocks[0].text, "<REGTEXT TITLE='7' PART='1'>\none\n</REGTEXT>");
        assert!(blocks[2].text.contains("three"));
        assert!(blocks.windows(2).all(|w| w[0].offset < w[1].offset));
    }

    #[test]
    fn untitled_regtext_is_ignored() {
        let text = "<REGTEXT PART='1'>x</REGTEXT>";
        assert!(extract_blocks(text).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(extract_blocks("").is_empty());
    }
}
