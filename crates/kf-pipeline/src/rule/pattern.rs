//! Path predicates and the set reasoning the shadow analysis relies on.

use regex::Regex;

use kf_config::PatternConfig;

/// A pure predicate over a path string.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Path ends with one of `suffixes`
    Suffix {
        suffixes: Vec<String>,
        ignore_case: bool,
    },
    /// Path contains `needle` anywhere
    Contains { needle: String, ignore_case: bool },
    /// Regular expression searched anywhere in the path
    Regex(Regex),
}

impl Pattern {
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Pattern::Suffix {
            suffixes: vec![suffix.into()],
            ignore_case: false,
        }
    }

    pub fn suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pattern::Suffix {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    pub fn contains(needle: impl Into<String>) -> Self {
        Pattern::Contains {
            needle: needle.into(),
            ignore_case: false,
        }
    }

    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern::Regex)
    }

    /// Match ASCII case-insensitively.
    pub fn ignore_case(self) -> Result<Self, regex::Error> {
        Ok(match self {
            Pattern::Suffix { suffixes, .. } => Pattern::Suffix {
                suffixes,
                ignore_case: true,
            },
            Pattern::Contains { needle, .. } => Pattern::Contains {
                needle,
                ignore_case: true,
            },
            // Inline flag: the folded source must differ from the unfolded one.
            Pattern::Regex(re) => Pattern::Regex(Regex::new(&format!("(?i){}", re.as_str()))?),
        })
    }

    pub fn from_config(config: &PatternConfig, ignore_case: bool) -> Result<Self, regex::Error> {
        let pattern = match config {
            PatternConfig::Suffix(suffixes) => Pattern::suffixes(suffixes.iter().cloned()),
            PatternConfig::Contains(needle) => Pattern::contains(needle.clone()),
            PatternConfig::Regex(source) => Pattern::regex(source)?,
        };
        if ignore_case {
            pattern.ignore_case()
        } else {
            Ok(pattern)
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Suffix {
                suffixes,
                ignore_case,
            } => suffixes.iter().any(|s| ends_with(path, s, *ignore_case)),
            Pattern::Contains {
                needle,
                ignore_case,
            } => {
                if *ignore_case {
                    path.to_ascii_lowercase()
                        .contains(&needle.to_ascii_lowercase())
                } else {
                    path.contains(needle.as_str())
                }
            }
            Pattern::Regex(re) => re.is_match(path),
        }
    }

    /// `true` only when every path matched by `self` is provably matched by
    /// `outer`. Undecidable combinations answer `false`.
    pub(crate) fn is_subset_of(&self, outer: &Pattern) -> bool {
        match (self, outer) {
            (
                Pattern::Suffix {
                    suffixes: inner,
                    ignore_case: inner_ci,
                },
                Pattern::Suffix {
                    suffixes: outer_sfx,
                    ignore_case: outer_ci,
                },
            ) => {
                // A case-insensitive inner set is wider than a case-sensitive outer one.
                (*outer_ci || !*inner_ci)
                    && inner
                        .iter()
                        .all(|b| outer_sfx.iter().any(|a| ends_with(b, a, *outer_ci)))
            }
            (
                Pattern::Suffix {
                    suffixes: inner,
                    ignore_case: inner_ci,
                },
                Pattern::Contains {
                    needle,
                    ignore_case: outer_ci,
                },
            ) => (*outer_ci || !*inner_ci) && inner.iter().all(|b| contains(b, needle, *outer_ci)),
            (
                Pattern::Contains {
                    needle: inner,
                    ignore_case: inner_ci,
                },
                Pattern::Contains {
                    needle: outer_needle,
                    ignore_case: outer_ci,
                },
            ) => (*outer_ci || !*inner_ci) && contains(inner, outer_needle, *outer_ci),
            (Pattern::Regex(inner), Pattern::Regex(outer)) => inner.as_str() == outer.as_str(),
            _ => false,
        }
    }

    /// `false` only when no path can match both patterns.
    pub(crate) fn may_overlap(&self, other: &Pattern) -> bool {
        match (self, other) {
            (
                Pattern::Suffix {
                    suffixes: left,
                    ignore_case: left_ci,
                },
                Pattern::Suffix {
                    suffixes: right,
                    ignore_case: right_ci,
                },
            ) => {
                // Folding both sides over-approximates the overlap.
                let fold = *left_ci || *right_ci;
                left.iter().any(|a| {
                    right
                        .iter()
                        .any(|b| ends_with(a, b, fold) || ends_with(b, a, fold))
                })
            }
            _ => true,
        }
    }

    /// Human-readable form for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Pattern::Suffix { suffixes, .. } => format!("*{{{}}}", suffixes.join(",")),
            Pattern::Contains { needle, .. } => format!("*{}*", needle),
            Pattern::Regex(re) => format!("/{}/", re.as_str()),
        }
    }
}

fn ends_with(haystack: &str, suffix: &str, ignore_case: bool) -> bool {
    if ignore_case {
        haystack.len() >= suffix.len()
            && haystack.as_bytes()[haystack.len() - suffix.len()..]
                .eq_ignore_ascii_case(suffix.as_bytes())
    } else {
        haystack.ends_with(suffix)
    }
}

fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if ignore_case {
        haystack
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    } else {
        haystack.contains(needle)
    }
}
