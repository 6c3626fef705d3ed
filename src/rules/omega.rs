use regex::Captures;

use super::Rule;

pub const RULES: &[Rule] = &[
    Rule::lit("  ", " "),
    Rule::lit("\n \n", "\n"),
    Rule::lit(". \n</", ".</"),
    Rule::lit(" \n</", "</"),
    Rule::lit("\n</", "</"),
    // pull the first paragraph up onto its label line
    Rule::expand(r"(Authority:|Note:|Source:|Example:)\n<P>", "${1}<P>"),
    Rule::lit("\n\n", "\n"),
    Rule::computed(r"(<STARS>|\S)</REGTEXT>", close_regtext),
    Rule::re(r"</REGTEXT>\s+<REGTEXT", "</REGTEXT>\n\n<REGTEXT"),
    Rule::lit("<REGTEXT", "\n<REGTEXT"),
    // superscript footnote numbers 1..=17
    Rule::expand(r"<E T='51'>(1[0-7]|[1-9])</E>", "<SU>${1}</SU>"),
    Rule::lit("<SUBJECT>", "\n<SUBJECT>"),
    Rule::lit("</CFRDOC>", "\n\n</CFRDOC>"),
    // page markers have served their purpose once blocks carry FRPAGE
    Rule::re(r"<PRTPAG.*?>\n?", ""),
    // amendment-instruction sections carry no regulatory text
    Rule::re(
        r"(?m)\n{0,2}^(<SUBPART>.*\n|<PART>.*\n|<HD1>.*\n)?(<SECTION>.*\n)?.*\n.*?<SUBJECT>\[?Removed.*\]?\.?",
        "",
    ),
    Rule::re(
        r"(?m)\n{0,2}^(<SUBPART>.*\n|<PART>.*\n|<HD1>.*\n)?(<SECTION>.*\n)?.*\n.*?<SUBJECT>\[?Amended.*\]?\.?",
        "",
    ),
    Rule::re(
        r"(?m)\n{0,2}^(<SUBPART>.*\n|<PART>.*\n|<HD1>.*\n)?(<SECTION>.*\n)?.*\n.*?<SUBJECT>\[?Corrected.*\]?\.?",
        "",
    ),
    Rule::re(
        r"(?m)\n{0,2}^(<SUBPART>.*\n|<PART>.*\n|<HD1>.*\n)?(<SECTION>.*\n)?.*\n.*?<SUBJECT>\[?Redesignated.*\]?\.?",
        "",
    ),
    Rule::re(
        r"<HD1>.*?\[Removed.*\]\n|<HD1>.*?\[?Amended.*\]?\n|<HD1>.*?\[?Corrected.*\]?\n",
        "",
    ),
    // graphics and math: the trailing comment names the e-CFR element
    Rule::expand(
        r"<(GPH.*?)>\s*?(<GID>.*?</GPH>)\s*?<!--(GPH.*?)-->",
        "<${3}>\n${2}\n",
    ),
    Rule::expand(
        r"<(MATH.*?)>\s*?(<MID>.*?</MATH>)\s*?<!--(MATH.*?)-->",
        "<${3}>\n${2}\n",
    ),
    Rule::re(r"<BILCOD>.*\n", ""),
];

/// `</REGTEXT>` goes on its own line unless it directly follows `<STARS>`.
fn close_regtext(caps: &Captures<'_>) -> String {
    let lead = &caps[1];
    if lead == "<STARS>" {
        caps[0].to_string()
    } else {
        format!("{lead}\n</REGTEXT>")
    }
}
