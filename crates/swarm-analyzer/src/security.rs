//! Security anti-pattern detection.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    /// Points deducted from the quality score per finding.
    pub const fn penalty(&self) -> f64 {
        match self {
            Self::Critical => 15.0,
            Self::Warning => 5.0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => f.write_str("critical"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// One detected issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

const RULES: [(&str, Severity, &str); 6] = [
    (r"eval\s*\(", Severity::Critical, "eval() usage detected - security risk"),
    (r"innerHTML\s*=", Severity::Warning, "innerHTML assignment - XSS risk"),
    (r"document\.write", Severity::Warning, "document.write usage - security risk"),
    (r"exec\s*\(|spawn\s*\(", Severity::Warning, "Command execution detected"),
    (
        r#"password\s*=\s*["'][^"']+["']"#,
        Severity::Critical,
        "Hardcoded password detected",
    ),
    (
        r#"api[_-]?key\s*=\s*["'][^"']+["']"#,
        Severity::Critical,
        "Hardcoded API key detected",
    ),
];

#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    severity: Severity,
    message: &'static str,
}

/// Case-insensitive scanner over a fixed rule set.
///
/// Each rule reports at most one finding per file.
#[derive(Debug, Clone)]
pub struct SecurityScanner {
    rules: Vec<Rule>,
}

impl SecurityScanner {
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|&(pattern, severity, message)| {
                Ok(Rule {
                    pattern: Regex::new(&format!("(?i){pattern}"))?,
                    severity,
                    message,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn scan(&self, content: &str) -> Vec<Finding> {
        self.rules
            .iter()
            .filter(|rule| rule.pattern.is_match(content))
            .map(|rule| Finding {
                severity: rule.severity,
                kind: "security".to_string(),
                message: rule.message.to_string(),
            })
            .collect()
    }
}
