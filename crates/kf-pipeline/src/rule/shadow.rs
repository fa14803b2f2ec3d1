//! Static detection of rules that can never be reached.
//!
//! Rule `B` is shadowed when an earlier rule `A` provably claims every path
//! `B` could match: `B.test ⊆ A.test` and `B.test` cannot overlap `A.exclude`.
//! Only pattern pairs with decidable containment are reported (suffix,
//! substring and identical regex sources), so a report is never a false
//! positive.

use super::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowing {
    /// The unreachable rule
    pub rule: String,
    /// The earlier rule that claims all of its paths
    pub shadowed_by: String,
}

pub fn find_shadowed(rules: &[Rule]) -> Vec<Shadowing> {
    let mut found = Vec::new();

    for (index, later) in rules.iter().enumerate() {
        let shadower = rules[..index].iter().find(|earlier| {
            later.test.is_subset_of(&earlier.test)
                && earlier
                    .exclude
                    .as_ref()
                    .is_none_or(|excluded| !later.test.may_overlap(excluded))
        });

        if let Some(earlier) = shadower {
            found.push(Shadowing {
                rule: later.id.clone(),
                shadowed_by: earlier.id.clone(),
            });
        }
    }

    found
}
