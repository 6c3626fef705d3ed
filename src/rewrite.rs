use std::borrow::Cow;

use tracing::{debug, trace};

use crate::rules::RuleSet;

struct PassStats {
    fired: usize,
    before: usize,
    after: usize,
}

impl PassStats {
    fn record(&self, set: &RuleSet) {
        debug!(
            set = set.name(),
            rules = set.len(),
            fired = self.fired,
            before = self.before,
            after = self.after,
            "rewrite pass done"
        );
    }
}

/// Run every rule in order over the whole text. Rule *i+1* sees the output
/// of rule *i*; each rule replaces all non-overlapping matches.
pub fn apply(text: String, rules: &RuleSet) -> String {
    let mut stats = PassStats {
        fired: 0,
        before: text.len(),
        after: 0,
    };
    let mut text = text;
    for (index, rule) in rules.iter().enumerate() {
        if let Cow::Owned(next) = rule.apply(&text) {
            trace!(set = rules.name(), index, pattern = rule.source(), "rule fired");
            stats.fired += 1;
            text = next;
        }
    }
    stats.after = text.len();
    stats.record(rules);
    text
}
