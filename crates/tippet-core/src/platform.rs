//! Execution-platform detection and the per-platform extension schema.
//!
//! A diagram targets exactly one of the two Camunda runtimes. The modeler
//! records the choice as an attribute on the root definitions element; the
//! refresh pass detects it once and selects the matching extractor schema.

use crate::model::{get, get_str};
use serde_json::Value;
use tracing::debug;

/// Root-element attribute naming the target runtime.
pub const EXECUTION_PLATFORM_ATTR: &str = "modeler:executionPlatform";

/// The two target runtimes, with their distinct extension vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Camunda Platform (classic / 7.x): `camunda:*` extensions, delegate and
    /// Java-class style implementations.
    #[default]
    Platform,
    /// Camunda Cloud (Zeebe / 8.x): `zeebe:*` extensions, job-worker and
    /// FEEL style implementations.
    Cloud,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown execution platform tag: {tag}")]
pub struct UnknownPlatformError {
    pub tag: String,
}

impl Platform {
    pub fn from_tag(tag: &str) -> Result<Self, UnknownPlatformError> {
        match tag {
            "Camunda Cloud" => Ok(Self::Cloud),
            "Camunda Platform" => Ok(Self::Platform),
            other => Err(UnknownPlatformError {
                tag: other.to_string(),
            }),
        }
    }

    /// Detects the active platform from the root element's business object.
    ///
    /// Moddle surfaces unknown-namespace attributes either directly or under
    /// `$attrs`, so both spots are probed. A missing or unknown tag falls
    /// back to classic Platform, matching the modeler's default.
    pub fn detect(root_business_object: &Value) -> Self {
        let tag = get_str(root_business_object, EXECUTION_PLATFORM_ATTR).or_else(|| {
            get(root_business_object, "$attrs")
                .and_then(|attrs| get_str(attrs, EXECUTION_PLATFORM_ATTR))
        });

        match tag {
            Some(tag) => Self::from_tag(tag).unwrap_or_else(|err| {
                debug!(%err, "falling back to Camunda Platform");
                Self::Platform
            }),
            None => {
                debug!("no execution platform attribute on root; assuming Camunda Platform");
                Self::Platform
            }
        }
    }

    /// The extension schema shared extractor code is parameterized by.
    pub fn schema(self) -> &'static PlatformSchema {
        match self {
            Self::Platform => &PLATFORM_SCHEMA,
            Self::Cloud => &CLOUD_SCHEMA,
        }
    }
}

/// Per-platform extension discriminators consumed by the shared extractors.
/// Branch groups that differ structurally between the platforms are not
/// squeezed in here; they dispatch on [`Platform`] directly.
#[derive(Debug)]
pub struct PlatformSchema {
    pub platform: Platform,
    /// Retry-cycle extension on loop characteristics, when the platform has
    /// one.
    pub retry_cycle: Option<&'static str>,
    /// Extension on loop characteristics carrying the collection/element
    /// variable fields; `None` means they are direct fields.
    pub loop_extension: Option<&'static str>,
    /// Business-key extension on call activities.
    pub business_key: Option<&'static str>,
    /// Whether condition expressions may declare a scripting language.
    pub condition_language: bool,
}

static PLATFORM_SCHEMA: PlatformSchema = PlatformSchema {
    platform: Platform::Platform,
    retry_cycle: Some("camunda:FailedJobRetryTimeCycle"),
    loop_extension: None,
    business_key: Some("camunda:In"),
    condition_language: true,
};

static CLOUD_SCHEMA: PlatformSchema = PlatformSchema {
    platform: Platform::Cloud,
    retry_cycle: None,
    loop_extension: Some("zeebe:LoopCharacteristics"),
    business_key: Some("camunda:In"),
    condition_language: false,
};
