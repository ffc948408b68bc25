//! The fixed table of shipped templates.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Identifies one of the shipped templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// End-User License Agreement.
    Eula,
    /// Third-party licenses bundle.
    Licenses,
    /// Attribution UI examples.
    Attribution,
}

/// A registry row: where a template lives and how it is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub name: TemplateKind,
    /// Path relative to the asset directory.
    #[serde(skip)]
    pub asset_path: &'static str,
    /// File name used when the template is copied out.
    pub file: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        name: TemplateKind::Eula,
        asset_path: "references/eula-template.md",
        file: "eula-template.md",
        description: "End-User License Agreement template",
    },
    TemplateEntry {
        name: TemplateKind::Licenses,
        asset_path: "references/third-party-licenses-template.md",
        file: "third-party-licenses-template.md",
        description: "Third-party licenses bundling template",
    },
    TemplateEntry {
        name: TemplateKind::Attribution,
        asset_path: "references/attribution-ui-template.md",
        file: "attribution-ui-template.md",
        description: "Attribution UI examples (About dialogs, credits)",
    },
];

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Eula => "eula",
            TemplateKind::Licenses => "licenses",
            TemplateKind::Attribution => "attribution",
        }
    }

    pub fn entry(&self) -> &'static TemplateEntry {
        // Every variant has exactly one row, in declaration order.
        &TEMPLATES[*self as usize]
    }

    pub fn asset_path(&self) -> &'static str {
        self.entry().asset_path
    }

    pub fn file_name(&self) -> &'static str {
        self.entry().file
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        TEMPLATES
            .iter()
            .map(|entry| entry.name)
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| Error::UnknownTemplate { name: s.to_string() })
    }
}

/// Resolves a case-insensitive template name to its asset path.
pub fn resolve_template(name: &str) -> Result<&'static str> {
    let kind: TemplateKind = name.parse()?;
    log::debug!("Resolved template '{name}' to '{}'", kind.asset_path());
    Ok(kind.asset_path())
}

/// Comma-separated list of all template names.
pub fn template_names() -> String {
    TEMPLATES.iter().map(|e| e.name.as_str()).collect::<Vec<_>>().join(", ")
}
