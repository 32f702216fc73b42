//! Options whitelist
//!
//! A settings page may only write the option names registered for its group.
//! On save the host writes every registered option of the group, taking the
//! submitted value or the empty string when the option was not submitted.

use crate::form::SubmittedForm;
use dashmap::DashMap;
use std::sync::Arc;

/// Registered option names per options group
#[derive(Debug, Clone, Default)]
pub struct OptionsWhitelist {
    groups: Arc<DashMap<String, Vec<String>>>,
}

impl OptionsWhitelist {
    /// Create an empty whitelist
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option name under a group
    pub fn register(&self, group: &str, option: &str) {
        let mut names = self.groups.entry(group.to_string()).or_default();
        if !names.iter().any(|n| n == option) {
            names.push(option.to_string());
        }
    }

    /// Register several option names under a group
    pub fn register_all<I, S>(&self, group: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for option in options {
            self.register(group, option.as_ref());
        }
    }

    /// Make `options` the only names registered under a group
    ///
    /// Used when a group's identifiers are regenerated, so names from an
    /// earlier key scheme stop being writable. Concurrent readers may see
    /// the group partly filled.
    pub fn replace<I, S>(&self, group: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.remove(group);
        self.register_all(group, options);
    }

    /// Drop every name registered under a group
    pub fn remove(&self, group: &str) {
        self.groups.remove(group);
    }

    /// Whether an option may be written through a group
    pub fn is_allowed(&self, group: &str, option: &str) -> bool {
        self.groups
            .get(group)
            .map(|names| names.iter().any(|n| n == option))
            .unwrap_or(false)
    }

    /// Registered option names of a group, in registration order
    pub fn options(&self, group: &str) -> Vec<String> {
        self.groups
            .get(group)
            .map(|names| names.value().clone())
            .unwrap_or_default()
    }

    /// The (option, value) writes a submission to `group` results in
    ///
    /// Unregistered keys are dropped. An option submitted more than once
    /// takes its last value.
    pub fn updates(&self, group: &str, form: &SubmittedForm) -> Vec<(String, String)> {
        self.options(group)
            .into_iter()
            .map(|option| {
                let value = form.get(&option).unwrap_or_default().to_string();
                (option, value)
            })
            .collect()
    }
}
