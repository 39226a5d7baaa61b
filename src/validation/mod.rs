//! Validation pipeline module.
//!
//! This module checks candidate field values before a user is created:
//! - Email format and availability in the store
//! - Password strength rules and hashing
//! - Rule lists rendered with pass/fail glyphs

mod email;
mod password;

pub use email::{parse_address, validate_email};
pub use password::{validate_password, Hasher};

use crate::store::UserStore;
use std::fmt;

pub const PASS_GLYPH: &str = "✓";
pub const FAIL_GLYPH: &str = "✗";

/// One named check and whether it failed.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleStatus {
    pub description: &'static str,
    pub failed: bool,
}

/// Ordered rule statuses for one validated value. The order is fixed per
/// validator and drives display order.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    rules: Vec<RuleStatus>,
}

impl ValidationResult {
    /// Return a result where every given rule passes.
    ///
    pub(crate) fn new(descriptions: &[&'static str]) -> Self {
        ValidationResult {
            rules: descriptions
                .iter()
                .map(|&description| RuleStatus {
                    description,
                    failed: false,
                })
                .collect(),
        }
    }

    pub(crate) fn set_failed(&mut self, index: usize, failed: bool) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.failed = failed;
        }
    }

    /// Return true if no rule failed.
    ///
    pub fn passed(&self) -> bool {
        self.rules.iter().all(|rule| !rule.failed)
    }

    pub fn rules(&self) -> &[RuleStatus] {
        &self.rules
    }

    /// Return the failed rules in display order.
    ///
    pub fn failed_rules(&self) -> impl Iterator<Item = &RuleStatus> {
        self.rules.iter().filter(|rule| rule.failed)
    }

    /// Return `value` if every rule passed, otherwise the failure carrying
    /// the full rule list.
    ///
    pub(crate) fn into_result<T>(self, value: T) -> Result<T, ValidationFailure> {
        if self.passed() {
            Ok(value)
        } else {
            Err(ValidationFailure(self))
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, rule) in self.rules.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let glyph = if rule.failed { FAIL_GLYPH } else { PASS_GLYPH };
            write!(f, "{} {}", glyph, rule.description)?;
        }
        Ok(())
    }
}

/// A value failed at least one rule. Displays one glyph-prefixed line per
/// rule, failed or not.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationFailure(pub ValidationResult);

impl ValidationFailure {
    pub fn result(&self) -> &ValidationResult {
        &self.0
    }

    /// Return the rule list on a single line, for log output.
    ///
    pub fn flattened(&self) -> String {
        self.to_string().replace('\n', " ")
    }
}

/// Collaborators the per-keystroke validators need, passed explicitly into
/// the form on every edit.
///
pub struct Validator<'a> {
    store: &'a dyn UserStore,
    hasher: &'a Hasher,
}

impl<'a> Validator<'a> {
    pub fn new(store: &'a dyn UserStore, hasher: &'a Hasher) -> Self {
        Validator { store, hasher }
    }

    pub fn email(&self, candidate: &str) -> Result<String, ValidationFailure> {
        validate_email(candidate, self.store)
    }

    pub fn password(&self, candidate: &str) -> Result<String, ValidationFailure> {
        validate_password(candidate, self.hasher)
    }
}
