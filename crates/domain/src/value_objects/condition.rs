//! Condition expressions gating a trait on the actor's granted conditions
//!
//! Grammar: one or more terms joined by `&&`, each term a condition token
//! optionally prefixed by `!`. Tokens are lowercase ASCII letters, digits,
//! `-`, `_` and `.`.
//!
//! ```
//! use airlift_domain::ConditionExpr;
//!
//! let expr: ConditionExpr = "deployed && !emp-disabled".parse().unwrap();
//! assert!(expr.evaluate(|token| token == "deployed"));
//! assert!(!expr.evaluate(|_| true));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Term {
    negated: bool,
    token: String,
}

/// A parsed `requiresCondition` expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConditionExpr {
    terms: Vec<Term>,
}

impl ConditionExpr {
    /// Evaluate against the set of currently granted tokens.
    pub fn evaluate(&self, is_granted: impl Fn(&str) -> bool) -> bool {
        self.terms
            .iter()
            .all(|term| is_granted(&term.token) != term.negated)
    }

    /// Tokens referenced by this expression, in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|term| term.token.as_str())
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')
}

impl FromStr for ConditionExpr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut terms = Vec::new();
        for raw in s.split("&&") {
            let raw = raw.trim();
            let (negated, token) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest.trim()),
                None => (false, raw),
            };
            if token.is_empty() {
                return Err(DomainError::parse(format!(
                    "Empty term in condition expression '{}'",
                    s
                )));
            }
            if !token.chars().all(is_token_char) {
                return Err(DomainError::parse(format!(
                    "Invalid condition token '{}' in '{}'",
                    token, s
                )));
            }
            terms.push(Term {
                negated,
                token: token.to_string(),
            });
        }
        Ok(Self { terms })
    }
}

impl fmt::Display for ConditionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " && ")?;
            }
            if term.negated {
                write!(f, "!")?;
            }
            write!(f, "{}", term.token)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for ConditionExpr {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ConditionExpr> for String {
    fn from(expr: ConditionExpr) -> String {
        expr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_requires_grant() {
        let expr: ConditionExpr = "deployed".parse().unwrap();
        assert!(expr.evaluate(|t| t == "deployed"));
        assert!(!expr.evaluate(|_| false));
    }

    #[test]
    fn negated_token_is_enabled_until_granted() {
        let expr: ConditionExpr = "!being-captured".parse().unwrap();
        assert!(expr.evaluate(|_| false));
        assert!(!expr.evaluate(|t| t == "being-captured"));
    }

    #[test]
    fn conjunction_needs_every_term() {
        let expr: ConditionExpr = "powered && !emp".parse().unwrap();
        assert!(expr.evaluate(|t| t == "powered"));
        assert!(!expr.evaluate(|t| t == "powered" || t == "emp"));
        assert_eq!(expr.tokens().collect::<Vec<_>>(), vec!["powered", "emp"]);
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!("".parse::<ConditionExpr>().is_err());
        assert!("a && ".parse::<ConditionExpr>().is_err());
        assert!("Deployed".parse::<ConditionExpr>().is_err());
        assert!("a || b".parse::<ConditionExpr>().is_err());
    }

    #[test]
    fn displays_canonical_form() {
        let expr: ConditionExpr = " powered&&! emp ".parse().unwrap();
        assert_eq!(expr.to_string(), "powered && !emp");
    }
}
