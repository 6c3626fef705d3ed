//! Rewrite rules as data: ordered `const` tables, compiled by [`RuleSetBuilder`].

pub mod alpha;
pub mod omega;

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, NoExpand, Regex};

use crate::error::PullError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Matched verbatim; escaped before compilation.
    Literal(&'static str),
    /// A regular expression. Flags (`(?m)`, `(?s)`) are written inline.
    Pattern(&'static str),
}

#[derive(Clone, Copy)]
pub enum Replacement {
    /// Inserted verbatim, `$` included.
    Literal(&'static str),
    /// `$1` / `${name}` are expanded from the match.
    Template(&'static str),
    /// Built from the match. Stands in for look-around, which `regex` lacks.
    Computed(fn(&Captures<'_>) -> String),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Replacement::Template(s) => f.debug_tuple("Template").field(s).finish(),
            Replacement::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub matcher: Matcher,
    pub replacement: Replacement,
}

impl Rule {
    pub const fn lit(from: &'static str, to: &'static str) -> Self {
        Rule {
            matcher: Matcher::Literal(from),
            replacement: Replacement::Literal(to),
        }
    }

    pub const fn re(pattern: &'static str, to: &'static str) -> Self {
        Rule {
            matcher: Matcher::Pattern(pattern),
            replacement: Replacement::Literal(to),
        }
    }

    pub const fn expand(pattern: &'static str, template: &'static str) -> Self {
        Rule {
            matcher: Matcher::Pattern(pattern),
            replacement: Replacement::Template(template),
        }
    }

    pub const fn computed(pattern: &'static str, f: fn(&Captures<'_>) -> String) -> Self {
        Rule {
            matcher: Matcher::Pattern(pattern),
            replacement: Replacement::Computed(f),
        }
    }

    pub fn source(&self) -> &'static str {
        match self.matcher {
            Matcher::Literal(s) | Matcher::Pattern(s) => s,
        }
    }

    fn compile(&self) -> Result<Regex, regex::Error> {
        match self.matcher {
            Matcher::Literal(s) => Regex::new(&regex::escape(s)),
            Matcher::Pattern(p) => Regex::new(p),
        }
    }
}

#[derive(Debug)]
pub struct CompiledRule {
    regex: Regex,
    rule: Rule,
}

impl CompiledRule {
    pub fn source(&self) -> &'static str {
        self.rule.source()
    }

    /// Replace every non-overlapping match. Borrowed means nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.rule.replacement {
            Replacement::Literal(s) => self.regex.replace_all(text, NoExpand(s)),
            Replacement::Template(t) => self.regex.replace_all(text, t),
            Replacement::Computed(f) => self.regex.replace_all(text, f),
        }
    }
}

/// An ordered, compiled rule list. Never reordered or deduplicated.
#[derive(Debug)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn alpha() -> Result<Self, PullError> {
        RuleSetBuilder::new("alpha").rules(alpha::RULES).build()
    }

    /// All of alpha again, then the structural omega rules.
    pub fn omega() -> Result<Self, PullError> {
        RuleSetBuilder::new("omega")
            .rules(alpha::RULES)
            .rules(omega::RULES)
            .build()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }
}

pub struct RuleSetBuilder {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn new(name: &'static str) -> Self {
        RuleSetBuilder {
            name,
            rules: Vec::new(),
        }
    }

    pub fn rules(mut self, rules: &[Rule]) -> Self {
        self.rules.extend_from_slice(rules);
        self
    }

    #[cfg(test)]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Compile every rule; the first bad pattern fails the whole set.
    pub fn build(self) -> Result<RuleSet, PullError> {
        let name = self.name;
        let rules = self
            .rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.compile()
                    .map(|regex| CompiledRule { regex, rule })
                    .map_err(|source| PullError::BadRule {
                        set: name,
                        index,
                        pattern: rule.source().to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet { name, rules })
    }
}

/// Both passes, compiled once at startup.
#[derive(Debug)]
pub struct RuleSets {
    pub alpha: RuleSet,
    pub omega: RuleSet,
}

impl RuleSets {
    pub fn compile() -> Result<Self, PullError> {
        Ok(RuleSets {
            alpha: RuleSet::alpha()?,
            omega: RuleSet::omega()?,
        })
    }
}
