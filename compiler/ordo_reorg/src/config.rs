//! Reorganizer configuration.
//!
//! Every field has a default, so a driver can deserialize a partial table
//! (for example from a project settings file) and get the rest filled in.

use serde::{Deserialize, Serialize};

/// Lifecycle hooks recognized when no configuration says otherwise.
pub const DEFAULT_LIFECYCLE_METHODS: [&str; 4] = ["Awake", "OnEnable", "Start", "OnDisable"];

/// Knobs for one reorganization pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReorganizeConfig {
    /// Name of the section-annotation (`[Header("Movement")]`).
    pub section_attribute: String,
    /// Name of the marker that exposes a field (`[SerializeField]`).
    pub exposure_attribute: String,
    /// Method names filed as lifecycle hooks. Matched exactly.
    pub lifecycle_methods: Vec<String>,
    pub group_scope: GroupScope,
    /// Insert a blank line after the exposed fields of a group that also
    /// holds non-exposed fields.
    pub separate_exposed_groups: bool,
}

impl Default for ReorganizeConfig {
    fn default() -> Self {
        ReorganizeConfig {
            section_attribute: "Header".to_owned(),
            exposure_attribute: "SerializeField".to_owned(),
            lifecycle_methods: DEFAULT_LIFECYCLE_METHODS
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
            group_scope: GroupScope::default(),
            separate_exposed_groups: true,
        }
    }
}

impl ReorganizeConfig {
    /// Check whether `name` is a lifecycle hook. Case-sensitive.
    pub fn is_lifecycle_method(&self, name: &str) -> bool {
        self.lifecycle_methods.iter().any(|hook| hook == name)
    }

    #[must_use]
    pub fn with_group_scope(mut self, group_scope: GroupScope) -> Self {
        self.group_scope = group_scope;
        self
    }
}

/// How far a section-annotation's group reaches in source order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupScope {
    /// A group ends at the next label or at the first non-field member.
    #[default]
    FieldRuns,
    /// A group ends only at the next label; properties, methods and other
    /// non-field members in between neither join nor close it.
    WholeBody,
}
