use crate::FormatName;
use crate::foundation::error::{PixcompError, PixcompResult};

/// Environment variable that can switch fast paths off (`0`, `false` or `off`).
pub const FAST_PATHS_ENV: &str = "PIXCOMP_FAST_PATHS";

/// Options for [`crate::Compositor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositeOpts {
    /// Allow specialized loops for common format combinations.
    pub fast_paths: bool,
}

impl Default for CompositeOpts {
    fn default() -> Self {
        Self { fast_paths: true }
    }
}

impl CompositeOpts {
    /// Return options with fast-path selection switched on or off.
    pub fn with_fast_paths(mut self, enabled: bool) -> Self {
        self.fast_paths = enabled;
        self
    }

    /// Defaults, overridden by [`FAST_PATHS_ENV`] when it is set.
    pub fn from_env() -> Self {
        let fast_paths = fast_paths_override(std::env::var(FAST_PATHS_ENV).ok().as_deref())
            .unwrap_or(Self::default().fast_paths);
        Self { fast_paths }
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> PixcompResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PixcompError::serde(format!("parse composite options JSON: {e}")))
    }
}

fn fast_paths_override(value: Option<&str>) -> Option<bool> {
    let v = value?.trim();
    if v.is_empty() {
        return None;
    }
    Some(!matches!(
        v.to_ascii_lowercase().as_str(),
        "0" | "false" | "off"
    ))
}

/// Options for the trapezoid and triangle compositing entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrapezoidOpts {
    /// Format of the temporary coverage mask. Must be an alpha-only format.
    pub mask_format: FormatName,
}

impl Default for TrapezoidOpts {
    fn default() -> Self {
        Self {
            mask_format: FormatName::A8,
        }
    }
}

impl TrapezoidOpts {
    /// Return options using `format` for the coverage mask.
    pub fn with_mask_format(mut self, format: FormatName) -> Self {
        self.mask_format = format;
        self
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> PixcompResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PixcompError::serde(format!("parse trapezoid options JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
