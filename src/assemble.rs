pub const ROOT_OPEN: &str = "<CFRDOC ED='XX' REV='XX'>\n\n";
pub const ROOT_CLOSE: &str = "\n</CFRDOC>";

/// Annotated blocks, in order, inside the document root.
pub fn wrap<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut doc = String::from(ROOT_OPEN);
    for block in blocks {
        doc.push_str(block.as_ref());
    }
    doc.push_str(ROOT_CLOSE);
    doc
}
