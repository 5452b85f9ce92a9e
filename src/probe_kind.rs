//! Probe kind enum identifying the discovery strategies.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The discovery strategy used to locate the node binary.
///
/// Each variant corresponds to one self-contained way of producing a
/// candidate path. Variants are declared in priority order: detection runs
/// them top to bottom and accepts the first validated hit, so `all()`
/// yields them in exactly the order they are attempted.
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` to allow adding new probe types
/// in future versions. When matching on `ProbeKind`, always include a
/// wildcard pattern to handle future variants.
///
/// # Example
///
/// ```rust
/// use node_discovery::ProbeKind;
///
/// // Iterate over all probes in priority order
/// for kind in ProbeKind::all() {
///     println!("{}", kind.display_name());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum ProbeKind {
    /// Fixed list of conventional install locations, env override first.
    CommonLocations,
    /// The platform's executable-lookup command (`which` / `where`).
    PathLookup,
    /// AppleScript query of a running companion GUI app (macOS only).
    CompanionApp,
    /// `.appiumconfig.json` next to the tool's install root.
    ConfigFile,
}

impl ProbeKind {
    /// Human-readable name for the probe.
    ///
    /// Used in log output and suitable for display in UIs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use node_discovery::ProbeKind;
    ///
    /// assert_eq!(ProbeKind::PathLookup.display_name(), "PATH lookup");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CommonLocations => "common locations",
            Self::PathLookup => "PATH lookup",
            Self::CompanionApp => "companion app",
            Self::ConfigFile => "config file",
        }
    }

    /// Iterator over all probes, in priority order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use node_discovery::ProbeKind;
    ///
    /// let probes: Vec<_> = ProbeKind::all().collect();
    /// assert_eq!(probes.len(), 4);
    /// assert_eq!(probes[0], ProbeKind::CommonLocations);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
