//! Named pattern rules for the supported bubble-sort shape
//!
//! Each algorithmic event is attributed to a source line by one rule. The
//! array declaration is found with a regular expression; every other rule is a
//! plain substring searched from the declaration's line onward. Rules that do
//! not match fall back to the declaration line (see [`locate_line`]).

use super::locator::locate_line;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Name bound to the sorted copy once the loops finish
pub const RESULT_VARIABLE: &str = "result";

static ARRAY_INIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:let|const|var)[ \t]+([A-Za-z_$][A-Za-z0-9_$]*)[ \t]*=[ \t]*(\[[^\]]*\])")
        .expect("array initialization pattern is valid")
});

static LOOP_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfor\s*\(").expect("loop header pattern is valid"));

static ADJACENT_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*j\s*\+\s*1\s*\]").expect("adjacent access pattern is valid")
});

/// Coarse shape check: a `for (` loop header and an adjacent-element access
/// `[j + 1]` must both appear somewhere in the text.
pub fn looks_like_bubble_sort(source: &str) -> bool {
    LOOP_HEADER.is_match(source) && ADJACENT_ACCESS.is_match(source)
}

/// One algorithmic event the generator attributes to a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    ArrayInit,
    LengthInit,
    OuterLoop,
    InnerLoop,
    Comparison,
    Swap,
    FinalAssign,
    Print,
}

impl Rule {
    /// Rules in the order their events first occur
    pub const ALL: [Rule; 8] = [
        Rule::ArrayInit,
        Rule::LengthInit,
        Rule::OuterLoop,
        Rule::InnerLoop,
        Rule::Comparison,
        Rule::Swap,
        Rule::FinalAssign,
        Rule::Print,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::ArrayInit => "array-init",
            Rule::LengthInit => "length-init",
            Rule::OuterLoop => "outer-loop",
            Rule::InnerLoop => "inner-loop",
            Rule::Comparison => "comparison",
            Rule::Swap => "swap",
            Rule::FinalAssign => "final-assign",
            Rule::Print => "print",
        }
    }

    /// Substring that identifies the rule's line for an array named `array`
    pub fn needle(self, array: &str) -> Cow<'static, str> {
        match self {
            Rule::ArrayInit => Cow::Owned(format!("{} = [", array)),
            Rule::LengthInit => Cow::Borrowed(".length"),
            Rule::OuterLoop => Cow::Borrowed("for (let i"),
            Rule::InnerLoop => Cow::Borrowed("for (let j"),
            Rule::Comparison => Cow::Borrowed("if ("),
            Rule::Swap => Cow::Owned(format!("{}[j + 1]] = [", array)),
            Rule::FinalAssign => Cow::Owned(format!("{} =", RESULT_VARIABLE)),
            Rule::Print => Cow::Borrowed("console.log"),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The array declaration matched in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayInit {
    pub name: String,
    /// Bracketed literal text, e.g. `[64, 34, 25]`
    pub literal: String,
    /// 0-based index of the declaration's line
    pub line_index: usize,
}

impl ArrayInit {
    /// Locate the first `let|const|var <name> = [ ... ]` statement
    pub fn find(source: &str) -> Option<Self> {
        let captures = ARRAY_INIT.captures(source)?;
        let whole = captures.get(0)?;
        let line_index = source[..whole.start()].matches('\n').count();

        Some(ArrayInit {
            name: captures.get(1)?.as_str().to_string(),
            literal: captures.get(2)?.as_str().to_string(),
            line_index,
        })
    }
}

/// Resolved 1-based line for every rule of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    lines: [usize; Rule::ALL.len()],
}

impl LineMap {
    pub fn resolve(source_lines: &[&str], init: &ArrayInit) -> Self {
        let mut lines = [init.line_index + 1; Rule::ALL.len()];

        for rule in Rule::ALL.into_iter().filter(|r| *r != Rule::ArrayInit) {
            let needle = rule.needle(&init.name);
            lines[rule.index()] = locate_line(source_lines, &needle, init.line_index);
            log::debug!("rule {} -> line {}", rule.name(), lines[rule.index()]);
        }

        LineMap { lines }
    }

    pub fn line(&self, rule: Rule) -> usize {
        self.lines[rule.index()]
    }
}
