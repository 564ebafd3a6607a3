//! Naming conventions of the generated code.
//!
//! Every rewritten file imports a catalog-builder function and a runtime
//! object, declares the catalog, and calls
//! `<runtime>.<formatFunction>(<catalogIdentifier>["key"], { ... })` at each
//! extraction site.

use serde::{Deserialize, Serialize};

use super::script::TargetScript;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Module the runtime object is default-imported from.
    pub runtime_module: String,
    /// Preferred local name of the runtime object.
    pub runtime_name: String,
    /// Method called on the runtime object at every call site.
    pub format_function: String,
    /// Module exporting the catalog-builder function.
    pub catalog_module: String,
    /// Exported name of the catalog-builder function.
    pub catalog_builder: String,
    /// Identifier the catalog declaration is bound to.
    pub catalog_identifier: String,
    /// Token that excludes a node when found in one of its leading comments.
    pub disable_marker: String,
    pub target_script: TargetScript,
    /// Trimmed texts that are never extracted.
    pub ignore_texts: Vec<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            runtime_module: "@/utils/intl".to_string(),
            runtime_name: "intl".to_string(),
            format_function: "formatMessage".to_string(),
            catalog_module: "react-intl".to_string(),
            catalog_builder: "defineMessages".to_string(),
            catalog_identifier: "i18nMessages".to_string(),
            disable_marker: "i18n-disable".to_string(),
            target_script: TargetScript::Han,
            ignore_texts: Vec::new(),
        }
    }
}
