//! # node-discovery
//!
//! Node.js runtime binary discovery for automation tooling.
//!
//! This crate locates an installed `node` executable by running four
//! discovery probes in priority order and returning the first candidate
//! that exists on the filesystem:
//!
//! 1. **Common locations**: a `NODE_BIN` environment override, then
//!    conventional install paths
//! 2. **PATH lookup**: the platform's executable-lookup command
//! 3. **Companion app**: a running Appium GUI app, asked for its
//!    configured node path via AppleScript (macOS only)
//! 4. **Config file**: a `.appiumconfig.json` document near the tool's
//!    install root
//!
//! Detection never fails: probe-local errors are logged and treated as
//! "found nothing", and exhausting every probe yields `None`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use node_discovery::{detect, discover};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Just the path
//!     if let Some(path) = detect().await {
//!         println!("node is at {}", path.display());
//!     }
//!
//!     // Path plus which probe found it
//!     if let Some(found) = discover().await {
//!         println!("{} (via {})", found.path.display(), found.probe.display_name());
//!     }
//! }
//! ```

mod detect;
mod discovery;
mod options;
mod probe_kind;
mod probes;

pub use detect::{detect, detect_with_options, discover, discover_with_options};
pub use discovery::{Discovery, ProbeError};
pub use options::{DetectOptions, MAX_CAPTURED_OUTPUT, NODE_BIN_ENV};
pub use probe_kind::ProbeKind;
pub use probes::config_file::CONFIG_FILE_NAME;
pub use probes::NodeConfig;
