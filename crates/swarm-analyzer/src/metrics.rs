//! Complexity and maintainability metrics.
//!
//! # Cyclomatic complexity
//!
//! One plus the number of decision points: branch and loop keywords,
//! exception handlers, ternaries and boolean operators.
//!
//! # Maintainability index
//!
//! ```text
//! n      = operators + operands
//! volume = n × log2(max(1, n))
//! mi     = 171 − 5.2·ln(max(1, volume)) − 0.23·complexity − 16.2·ln(max(1, loc))
//! ```
//!
//! clamped to `[0, 100]` and rounded to two decimals.

use regex::Regex;

use crate::error::Result;

const DECISION_POINTS: [&str; 13] = [
    r"\bif\b",
    r"\belse\b",
    r"\bwhile\b",
    r"\bfor\b",
    r"\bswitch\b",
    r"\bcase\b",
    r"\bcatch\b",
    r"\bexcept\b",
    r"\?\s*[^:]+\s*:",
    r"&&",
    r"\|\|",
    r"\band\b",
    r"\bor\b",
];

const OPERATORS: &str = r"[+\-*/%=<>!&|^~]";
const OPERANDS: &str = r"\b\w+\b";

/// Compiled metric patterns.
#[derive(Debug, Clone)]
pub struct Metrics {
    decision_points: Vec<Regex>,
    operators: Regex,
    operands: Regex,
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let decision_points = DECISION_POINTS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            decision_points,
            operators: Regex::new(OPERATORS)?,
            operands: Regex::new(OPERANDS)?,
        })
    }

    /// Cyclomatic complexity estimate, at least 1.
    pub fn complexity(&self, content: &str) -> u32 {
        let decisions: usize = self
            .decision_points
            .iter()
            .map(|re| re.find_iter(content).count())
            .sum();
        1 + decisions as u32
    }

    /// Maintainability index in `[0, 100]`.
    pub fn maintainability(&self, content: &str, complexity: u32) -> f64 {
        let loc = content.split('\n').count() as f64;
        let n = (self.operators.find_iter(content).count()
            + self.operands.find_iter(content).count()) as f64;
        let volume = n * n.max(1.0).log2();

        let mi = 171.0
            - 5.2 * volume.max(1.0).ln()
            - 0.23 * f64::from(complexity)
            - 16.2 * loc.max(1.0).ln();

        round2(mi.clamp(0.0, 100.0))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics::new().unwrap()
    }

    #[test]
    fn straight_line_code_has_complexity_one() {
        assert_eq!(metrics().complexity("x = 1\ny = x + 2\n"), 1);
        assert_eq!(metrics().complexity(""), 1);
    }

    #[test]
    fn counts_keywords_and_operators() {
        let m = metrics();
        assert_eq!(m.complexity("if a and b or c:"), 4);
        assert_eq!(m.complexity("if (a && b || c) {} else {}"), 5);
        assert_eq!(m.complexity("for x in xs:\n    while y:\n        pass"), 3);
        assert_eq!(m.complexity("try:\n    f()\nexcept E:\n    g()"), 2);
    }

    #[test]
    fn keywords_need_word_boundaries() {
        let m = metrics();
        assert_eq!(m.complexity("elif_count = format(origin)"), 1);
        assert_eq!(m.complexity("candor = iffy"), 1);
    }

    #[test]
    fn ternary_counts_once() {
        assert_eq!(metrics().complexity("let v = ok ? 1 : 2;"), 2);
    }

    #[test]
    fn small_files_saturate_at_100() {
        let m = metrics();
        assert_eq!(m.maintainability("", 1), 100.0);
        assert_eq!(m.maintainability("a = b + c", 1), 100.0);
    }

    #[test]
    fn large_files_lose_maintainability() {
        let m = metrics();
        let content = "if x and y:\n    z = x + y * 2\n".repeat(400);
        let complexity = m.complexity(&content);
        let mi = m.maintainability(&content, complexity);
        assert!(mi < 50.0, "mi = {mi}");
        assert!(mi >= 0.0);
    }

    #[test]
    fn index_is_rounded() {
        let m = metrics();
        let content = "value = compute(a, b) - offset\n".repeat(60);
        let mi = m.maintainability(&content, 1);
        assert_eq!(mi, round2(mi));
    }
}
