use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::classify::Category;
use crate::dialects::{self, CategoryRule, MatchKind, PRECEDENCE, Precedence};
use crate::error::Error;
use crate::normalize::NormalizedMessage;

static BUILTIN: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::compile_lossy(dialects::builtin_rules()));

/// Compiled, immutable rule set shared by every classification call.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<CompiledRule>,
    precedence: &'static [Precedence],
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: CategoryRule,
    regex: Option<Regex>,
}

impl PatternTable {
    /// The built-in rules of every dialect, compiled on first use.
    pub fn builtin() -> &'static PatternTable {
        &BUILTIN
    }

    pub fn new(rules: impl IntoIterator<Item = CategoryRule>) -> Result<Self, Error> {
        let rules = rules
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules,
            precedence: PRECEDENCE,
        })
    }

    /// A copy of this table with `rules` appended.
    pub fn extend(&self, rules: impl IntoIterator<Item = CategoryRule>) -> Result<Self, Error> {
        let mut table = self.clone();
        for rule in rules {
            table.rules.push(CompiledRule::compile(rule)?);
        }
        Ok(table)
    }

    fn compile_lossy(rules: impl IntoIterator<Item = CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter_map(|rule| match CompiledRule::compile(rule) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    tracing::error!(
                        category = %rule.category,
                        dialect = %rule.dialect,
                        pattern = rule.pattern,
                        %err,
                        "skipping built-in rule that failed to compile"
                    );
                    None
                }
            })
            .collect();
        Self {
            rules,
            precedence: PRECEDENCE,
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter().map(|c| &c.rule)
    }

    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &CategoryRule> {
        self.rules().filter(move |r| r.category == category)
    }

    pub fn precedence(&self) -> &'static [Precedence] {
        self.precedence
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether any rule filed under `category` matches, before precedence.
    pub(crate) fn matches(&self, category: Category, msg: &NormalizedMessage) -> bool {
        self.rules
            .iter()
            .any(|c| c.rule.category == category && c.is_match(msg))
    }

    pub(crate) fn hits<'a>(
        &'a self,
        msg: &'a NormalizedMessage,
    ) -> impl Iterator<Item = &'a CategoryRule> {
        self.rules
            .iter()
            .filter(|c| c.is_match(msg))
            .map(|c| &c.rule)
    }
}

impl CompiledRule {
    fn compile(rule: CategoryRule) -> Result<Self, Error> {
        let invalid = |reason: String| Error::Pattern {
            category: rule.category,
            dialect: rule.dialect,
            reason,
        };

        if rule.pattern.is_empty() {
            return Err(invalid("empty pattern".into()));
        }

        let regex = match rule.kind {
            MatchKind::Regex => Some(
                RegexBuilder::new(rule.pattern)
                    .case_insensitive(rule.ignore_case)
                    .build()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self { rule, regex })
    }

    fn is_match(&self, msg: &NormalizedMessage) -> bool {
        let pattern = self.rule.pattern;
        let fold = self.rule.ignore_case;
        match self.rule.kind {
            MatchKind::Exact => msg.texts().any(|t| text_eq(t, pattern, fold)),
            MatchKind::Clause => msg.clauses().any(|c| text_eq(c, pattern, fold)),
            MatchKind::ClausePrefix => msg.clauses().any(|c| has_prefix(c, pattern, fold)),
            MatchKind::ErrorCode => msg.clauses().any(|c| is_error_code(c, pattern, fold)),
            MatchKind::Substring => msg.texts().any(|t| contains(t, pattern, fold)),
            MatchKind::Regex => self
                .regex
                .as_ref()
                .is_some_and(|re| msg.texts().any(|t| re.is_match(t))),
        }
    }
}

fn text_eq(text: &str, pattern: &str, fold: bool) -> bool {
    if fold {
        text.eq_ignore_ascii_case(pattern)
    } else {
        text == pattern
    }
}

fn has_prefix(text: &str, pattern: &str, fold: bool) -> bool {
    if fold {
        text.as_bytes()
            .get(..pattern.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pattern.as_bytes()))
    } else {
        text.starts_with(pattern)
    }
}

/// `code` alone, or `code` followed by a comma and free-form detail.
fn is_error_code(clause: &str, code: &str, fold: bool) -> bool {
    text_eq(clause, code, fold)
        || (has_prefix(clause, code, fold) && clause.as_bytes().get(code.len()) == Some(&b','))
}

fn contains(text: &str, pattern: &str, fold: bool) -> bool {
    if fold {
        text.to_ascii_lowercase()
            .contains(&pattern.to_ascii_lowercase())
    } else {
        text.contains(pattern)
    }
}
