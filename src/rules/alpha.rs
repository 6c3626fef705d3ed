use super::Rule;

/// Runs top to bottom; later entries rely on the spacing earlier ones leave.
pub const RULES: &[Rule] = &[
    Rule::lit("\"", "'"),
    Rule::lit("  ", " "),
    Rule::lit("  ", " "),
    // ── closing tags the e-CFR side never uses ──
    Rule::lit("</ACT>", ""),
    Rule::lit("</AGENCY>", ""),
    Rule::lit("</AGY>", ""),
    Rule::lit("</AMDPAR>", ""),
    Rule::lit("</APPENDIX>", ""),
    Rule::lit("</AUTH>", ""),
    Rule::lit("</BILCOD>", ""),
    Rule::lit("</BOXHD>", ""),
    Rule::lit("</CFR>", ""),
    Rule::lit("</CHED>", ""),
    Rule::lit("</DATE>", ""),
    Rule::lit("</DEPDOC>", ""),
    Rule::lit("</ENT>", ""),
    Rule::lit("</FEDREG>", ""),
    Rule::lit("</FP>", ""),
    Rule::lit("</FP-1>", ""),
    Rule::lit("</FP-2>", ""),
    Rule::lit("</GID>", ""),
    Rule::lit("</HD1>", ""),
    Rule::lit("</HD2>", ""),
    Rule::lit("</HD3>", ""),
    Rule::lit("</HED>", ""),
    Rule::lit("</LI>", ""),
    Rule::lit("</MID>", ""),
    Rule::lit("</NAME>", ""),
    Rule::lit("</NEWPART>", ""),
    Rule::lit("</NO>", ""),
    Rule::lit("</P>", ""),
    Rule::lit("</PART>", ""),
    Rule::lit("</PARTNO>", ""),
    Rule::lit("</RIN>", ""),
    Rule::lit("</ROW>", ""),
    Rule::lit("</RULE>", ""),
    Rule::lit("</RULES>", ""),
    Rule::lit("</SECAUTH>", ""),
    Rule::lit("</SECHD>", ""),
    Rule::lit("</SECTION>", ""),
    Rule::lit("</SECTNO>", ""),
    Rule::lit("</SIG>", ""),
    Rule::lit("<STARS/ >", "<STARS>"),
    Rule::lit("<STARS />", "<STARS>"),
    Rule::lit("<STARS/>", "<STARS>"),
    Rule::lit("</STARS>", ""),
    Rule::lit("</SUBAGY>", ""),
    Rule::lit("</SUBJECT>", ""),
    Rule::lit("</SUBPART>", ""),
    Rule::lit("</TDESC>", ""),
    Rule::lit("</TITLE>", ""),
    Rule::lit("</TTITLE>", ""),
    Rule::lit("</UNITNAME>", ""),
    Rule::lit("</VOL>", ""),
    Rule::lit("\"", "'"),
    // ── line structure ──
    Rule::lit("\n\n", "\n"),
    Rule::re(r"\s*\n\s*", "\n"),
    Rule::re(r"\n\s\n", "\n"),
    Rule::lit("\n?>", "?>"),
    Rule::re(r":\s\n<", ":\n<"),
    Rule::lit("<RULE>", "\n\n<RULE>"),
    Rule::re(r"<\?USGPO Galley End:\s*\?>", ""),
    Rule::lit("<PART>", "\n<PART>"),
    Rule::lit("\n\n<PART>", "\n<PART>"),
    Rule::lit("<SECTION>", "\n<SECTION>"),
    Rule::lit("\n\n<SECTION>", "\n<SECTION>"),
    Rule::lit(" <SUBJECT>", "<SUBJECT>"),
    Rule::lit("<SUBJECT> ", "<SUBJECT>"),
    Rule::lit("\n<SUBJECT>", "<SUBJECT>"),
    Rule::lit("\n</", "</"),
    Rule::re(r"\.\s\n<", ".\n<"),
    Rule::lit(" &thnsp;", "&thnsp;"),
    Rule::lit("&thnsp; ", "&thnsp;"),
    Rule::lit(". \n\n", ".\n"),
    Rule::lit(". </EXTRACT>", ".</EXTRACT>"),
    Rule::lit(". </NOTE>", ".</NOTE>"),
    // ── REGTEXT boundaries and stars ──
    Rule::lit(" </REGTEXT>", "</REGTEXT>"),
    Rule::lit("\n</REGTEXT>", "</REGTEXT>"),
    Rule::lit("<Q P='04'></REGTEXT>", "</REGTEXT>"),
    Rule::lit("<Q P='03'></REGTEXT>", "</REGTEXT>"),
    Rule::lit("<Q P='02'></REGTEXT>", "</REGTEXT>"),
    Rule::lit("<STARS> ", "<STARS>"),
    Rule::lit("\n<STARS>", "<STARS>"),
    Rule::lit("</REGTEXT><STARS>", "<STARS></REGTEXT>"),
    Rule::lit("</GPOTABLE></REGTEXT>", "</GPOTABLE>\n</REGTEXT>"),
    Rule::lit("\n</CONTENTS>", "</CONTENTS>"),
    Rule::lit(". </CONTENTS>", ".</CONTENTS>"),
    Rule::lit("<STARS>", "\n<STARS>"),
    Rule::lit("\n\n<STARS>", "\n<STARS>"),
    Rule::lit("<STARS>\n</REGTEXT>", "<STARS></REGTEXT>"),
    Rule::lit("<REGTEXT", "\n<REGTEXT"),
    Rule::lit("<LSTSUB>", "<LSTSUB>"),
    Rule::lit("<EFFDATE>", "<EFFDATE>"),
    Rule::lit(":\n<P>", ":<P>"),
    // ── amendment headings: drop the heading line, keep the <AMDPAR> ──
    Rule::expand(r"(?m)^<PART><HED>.*\n\n{0,2}(<AMDPAR>)", "${1}"),
    Rule::expand(r"(?m)^<SUBPART><HED>.*\n\n{0,2}(<AMDPAR>)", "${1}"),
    Rule::expand(r"(?m)^<Q P=.*\n\n{0,2}(<AMDPAR>)", "${1}"),
    Rule::expand(r"<SUBCHAP><HED>.*\n\n{0,2}(<AMDPAR>)", "${1}"),
    Rule::re(r"\s*<AMDPAR>", "\n<P>"),
    Rule::lit("<EXTRACT>\n", "<EXTRACT>"),
    Rule::lit("<SECTNO>&", "\n<SECTNO>&"),
    Rule::lit("\n\n<SECTNO>&", "\n<SECTNO>&"),
    Rule::lit(" \n<HED>", "\n<HED>"),
    Rule::lit("\n<HED>", "<HED>"),
    Rule::lit(" <P>", "<P>"),
    Rule::lit("<P>", "\n<P>"),
    Rule::lit("\n\n<P>", "\n<P>"),
    Rule::lit("><E T='04'>Authority:</E>", ">Authority:"),
    // ── entities, first round ──
    Rule::lit("&Prime;", "&sec;"),
    Rule::lit("&prime;", "&min;"),
    Rule::lit("&fnl;", ""),
    Rule::lit("<ROW", "\n<ROW"),
    Rule::lit("\n\n<ROW", "\n<ROW"),
    Rule::lit("<LI>", "\n<LI>"),
    Rule::lit("\n\n<LI>", "\n<LI>"),
    Rule::lit("\"", "'"),
    Rule::lit(",tp0,i1", ""),
    Rule::lit(",i1'", "'"),
    Rule::lit("L1,i1", "L1"),
    Rule::lit("L2,i1", "L2"),
    Rule::lit("``", "&ldquo;"),
    Rule::lit("''", "&rdquo"),
    Rule::lit("<E T='7462'>", "<E T='03'>"),
    // parked so the `&` rules below leave it alone; restored near the end
    Rule::lit("&euro;", "!l*f"),
    Rule::lit("##", "\n\n"),
    Rule::lit("<E T='22'>", "<E T='52'>"),
    Rule::lit(", </E>", ",</E> "),
    Rule::lit(" </E> ", "</E> "),
    Rule::lit(". </E>", ".</E> "),
    Rule::lit(" </E>", "</E> "),
    Rule::lit(" &emsp;", "&emsp;"),
    Rule::lit("&emsp; ", "&emsp;"),
    Rule::lit(" &ensp;", "&ensp;"),
    Rule::lit("&ensp; ", "&ensp;"),
    Rule::lit("\n<HED", "<HED"),
    Rule::lit(" \n<P>", "\n<P>"),
    Rule::lit(" <P>", "<P>"),
    Rule::lit("<P> ", "<P>"),
    Rule::lit("\n<P>\n", "\n<P>"),
    Rule::lit(":<P>(", ":\n<P>("),
    Rule::lit("&plus;", "+"),
    Rule::lit("&equal;", "="),
    Rule::lit("&equals;", "="),
    Rule::lit("&sol;", "/"),
    Rule::lit("+/&minus;", "&plusmn;"),
    Rule::lit("+/-", "&plusmn;"),
    Rule::lit("&commat;", "@"),
    Rule::lit("&apos;", "'"),
    Rule::lit("&ast;", "*"),
    Rule::lit("&percnt;", "%"),
    Rule::lit("&prime;", "&min;"),
    Rule::lit("&agr;", "&alpha;"),
    Rule::lit("&hairsp;&hairsp;", "&thnsp;"),
    Rule::lit("&hairsp;", ""),
    Rule::lit("&dollar;", "$"),
    Rule::lit("&hyphen;", "-"),
    Rule::lit("&mu;", "&micro;"),
    // ── footnotes ──
    Rule::lit("&fnl;\n<FNP>", " "),
    Rule::lit("&fnl;\n<FP>", " "),
    Rule::lit("<FNP>", ""),
    Rule::lit("'L2,tp0,i1'", "'L2'"),
    Rule::lit(",i1'", "'"),
    Rule::lit("\n<ENT", "<ENT"),
    Rule::re(r"<ENT>\s\n", "<ENT>\n"),
    Rule::lit("<ENT>\n", ""),
    Rule::lit("<FNC>", ""),
    Rule::lit("&fnl;", ""),
    Rule::lit("&rsquo;", "'"),
    Rule::lit("&lsquo;", "`"),
    Rule::lit("<Q", "\n<Q"),
    Rule::lit("\n\n<Q", "\n<Q"),
    Rule::lit("&lowbar;", "&lowbarm;"),
    Rule::lit("<E T='72'>&lowbarm;", "&lowbarm;"),
    Rule::lit("&lowbarm;</E>", "&lowbarm;"),
    Rule::lit("&lowbarm;", "_"),
    Rule::lit("&llddash;", "_"),
    // ── [Reserved] entries ──
    Rule::lit("[Reserved.],", "[Reserved],"),
    Rule::lit("[Reserved],.", "[Reserved],"),
    Rule::lit("&mdash;[Reserved],", " [Reserved],"),
    Rule::lit("&mdash;[RESERVED],", " [RESERVED],"),
    Rule::lit("&emsp;[Reserved],", " [Reserved],"),
    Rule::lit("&emsp;[RESERVED],", " [RESERVED],"),
    Rule::lit("&dash;", "-"),
    Rule::lit("<HD4>", "<HD1>"),
    Rule::lit("<HD6>", "<HD2>"),
    Rule::lit("&mdash;</E>", "</E>&mdash;"),
    Rule::lit("\n<FTREF>", "<FTREF>"),
    Rule::lit("<FTNT>\n", "<FTNT>"),
    Rule::lit("\n</FTNT>", "</FTNT>"),
    Rule::lit("\n<SU>", "<SU>"),
    Rule::lit("\n<FR>", "<FR>"),
    Rule::lit("<E T='52'>x</E>", "<E T='52'>X</E>"),
    Rule::lit("<AMDPAR>", "<P>"),
    // ── tables ──
    Rule::lit("<TTITLE>", "\n<TTITLE>"),
    Rule::lit("\n\n<TTITLE>", "\n<TTITLE>"),
    Rule::lit("<TDESC>", "\n<TDESC>"),
    Rule::lit("\n\n<TDESC>", "\n<TDESC>"),
    Rule::lit("<TTITLE>&emsp;\n", ""),
    Rule::lit("<TTITLE>&emsp; \n", ""),
    Rule::lit("<TTITLE>&ensp;\n", ""),
    Rule::lit("<TTITLE>&ensp; \n", ""),
    Rule::lit("<BOXHD> ", "<BOXHD>"),
    Rule::lit("<BOXHD>\n", "<BOXHD>"),
    Rule::lit(".\n\n<BOXHD>", "\n<BOXHD>"),
    Rule::lit("<ENT> ", "<ENT>"),
    Rule::lit("\n<ENT", "<ENT"),
    Rule::lit("\n<ENT", "<ENT"),
    Rule::lit(" <ENT", "<ENT"),
    Rule::lit("<ROW", "\n<ROW"),
    Rule::lit("\n\n<ROW", "\n<ROW"),
    Rule::lit("\n</GPO", "</GPO"),
    Rule::lit(" </GPO", "</GPO"),
    // ── entities, second round ──
    Rule::lit("&amp;qdrt;", "&qdrt;"),
    Rule::lit(" & ", " &amp; "),
    Rule::lit(" < ", " &lt; "),
    Rule::lit("<EXTRACT>\n", "<EXTRACT>"),
    Rule::lit(" &thnsp;", "&thnsp;"),
    Rule::lit("&thnsp; ", "&thnsp;"),
    Rule::lit("&hairsp;&hairsp;", "&thnsp;"),
    Rule::lit("<E T='61'>&plusmn;</E>", "&plusmn;"),
    Rule::lit("<E T='61'>&times;</E>", "&times;"),
    Rule::lit("<E T='61'>#</E>", "&num;"),
    Rule::lit("<E T='61'>&sec;</E>", "&sec;"),
    Rule::lit("<E T='61'>&middot;</E>", "&middot;"),
    Rule::lit("<E T='61'>&omega;</E>", "&omega;"),
    Rule::lit("<E T='61'>&num;</E>", "&num;"),
    Rule::lit("<E T='61'>&mu;</E>", "&mu;"),
    Rule::lit("<E T='61'>&deg;</E>", "&deg;"),
    Rule::lit("&deg; F", "&deg;F"),
    Rule::lit(" &deg;F", "&deg;F"),
    Rule::lit("&deg;F", " &deg;F"),
    Rule::lit("&deg; C", "&deg;C"),
    Rule::lit(" &deg;C", "&deg;C"),
    Rule::lit("&deg;C", " &deg;C"),
    Rule::lit("^", "&minus;"),
    // ── "Federal Register" emphasis ──
    Rule::lit("Register</E>. ", "Register.</E> "),
    Rule::lit("Register</E>. \n", "Register.</E>\n"),
    Rule::lit("Register</E>, ", "Register,</E> "),
    Rule::lit("r of the <E T='04'>Federal Register.</E>", "r of the Federal Register."),
    Rule::lit("r of the <E T='04'>Federal Register,</E>", "r of the Federal Register,"),
    Rule::lit("ce of the <E T='04'>Federal Register.</E>", "ce of the Federal Register."),
    Rule::lit("ce of the <E T='04'>Federal Register,</E>", "ce of the Federal Register,"),
    Rule::lit("<FP1-2>", "<P-2>"),
    Rule::lit("<FP2-2>", "<FP2>"),
    Rule::lit("<CITA TYPE='N'>", "<CITA>"),
    Rule::lit(" </E> ", "</E> "),
    Rule::lit("!l*f", "&euro"),
    Rule::lit("<Q P='02'/>", ""),
    Rule::lit("<Q P='04'/>", ""),
    Rule::lit("<Q", "\n<Q"),
    Rule::lit("\n\n<Q", "\n<Q"),
    Rule::lit(". </EXAMPLE>", ".</EXAMPLE>"),
    // ── table attributes with no e-CFR meaning ──
    Rule::lit(" POSITION='NOFLOAT'", ""),
    Rule::lit(" BORDER='NODRAW'", ""),
    Rule::lit(" STRIP='YES'", ""),
    Rule::lit(" HTYPE='CENTER'", ""),
    Rule::lit(" ROTATION='P'", ""),
    Rule::re(r"(?s)<\?USGPO Galley Info Start:.*?Galley Info End\?>", ""),
    Rule::lit("\r", "\n"),
];
