//! Injection models
//!
//! Injection log entries and the canonical site set used for rotation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Injection site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionSite {
    Glute,
    Quad,
    Delt,
    Ventroglute,
}

impl InjectionSite {
    /// Canonical rotation order, used to break ties when several sites qualify
    pub const CANONICAL: [InjectionSite; 4] = [
        InjectionSite::Glute,
        InjectionSite::Quad,
        InjectionSite::Delt,
        InjectionSite::Ventroglute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InjectionSite::Glute => "glute",
            InjectionSite::Quad => "quad",
            InjectionSite::Delt => "delt",
            InjectionSite::Ventroglute => "ventroglute",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "glute" | "glutes" => Some(InjectionSite::Glute),
            "quad" | "quads" => Some(InjectionSite::Quad),
            "delt" | "delts" | "deltoid" => Some(InjectionSite::Delt),
            "ventroglute" | "vg" => Some(InjectionSite::Ventroglute),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InjectionSite::Glute => "Glute",
            InjectionSite::Quad => "Quad",
            InjectionSite::Delt => "Deltoid",
            InjectionSite::Ventroglute => "Ventroglute",
        }
    }
}

/// Compound being injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compound {
    Testosterone,
    Deca,
    Other,
}

impl Compound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compound::Testosterone => "testosterone",
            Compound::Deca => "deca",
            Compound::Other => "other",
        }
    }

    /// Parse from string; unrecognized compounds fall back to `Other`
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "testosterone" | "test" => Compound::Testosterone,
            "deca" | "nandrolone" => Compound::Deca,
            _ => Compound::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Compound::Testosterone => "Testosterone",
            Compound::Deca => "Deca",
            Compound::Other => "Other",
        }
    }
}

/// A logged injection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectionEntry {
    pub date: NaiveDate,
    pub compound: Compound,
    pub dose_mg: f64,
    pub site: InjectionSite,
    pub notes: Option<String>,
}
