//! Plugin descriptor registered with the host CMS.

use crate::editor::EditorKind;
use crate::error::{PluginError, PluginResult};
use crate::version::is_at_least;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Release version of both editor plugins.
pub const DESCRIPTOR_VERSION: &str = "0.1.0";

/// Version of the plugins' stored data layout.
pub const SCHEMA_VERSION: &str = "0.1.0";

const HOST_MINIMUM_VERSION: &str = "2.5";
const RUNTIME_MINIMUM_VERSION: &str = "5.4";
const DEVELOPER: &str = "Benjamin Fleming";
const DEVELOPER_URL: &str = "http://benjamminf.github.io";

/// Versions of the environment a plugin is being installed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEnvironment {
    /// Version of the host CMS.
    pub host_version: String,
    /// Version of the runtime the host runs on.
    pub runtime_version: String,
}

impl HostEnvironment {
    pub fn new(host_version: impl Into<String>, runtime_version: impl Into<String>) -> Self {
        Self {
            host_version: host_version.into(),
            runtime_version: runtime_version.into(),
        }
    }
}

/// Metadata the host shows for an installed plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub editor: EditorKind,
    /// Human-readable plugin name.
    pub name: String,
    pub description: String,
    /// Dotted release version.
    pub version: String,
    pub schema_version: String,
    /// Oldest host version the plugin installs on.
    pub host_minimum_version: String,
    /// Oldest runtime version the plugin installs on.
    pub runtime_minimum_version: String,
    pub developer: String,
    pub developer_url: String,
    pub documentation_url: String,
    /// JSON feed the host polls for plugin updates.
    pub release_feed_url: String,
}

impl PluginDescriptor {
    /// Descriptor for the plugin wrapping `editor`.
    pub fn for_editor(editor: EditorKind) -> Self {
        let repo = format!("benjamminf/craft-{}", editor.handle());
        Self {
            editor,
            name: editor.display_name().to_string(),
            description: format!(
                "Adds {} as a rich text field type to Craft",
                editor.display_name()
            ),
            version: DESCRIPTOR_VERSION.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            host_minimum_version: HOST_MINIMUM_VERSION.to_string(),
            runtime_minimum_version: RUNTIME_MINIMUM_VERSION.to_string(),
            developer: DEVELOPER.to_string(),
            developer_url: DEVELOPER_URL.to_string(),
            documentation_url: format!("https://github.com/{repo}/wiki"),
            release_feed_url: format!(
                "https://raw.githubusercontent.com/{repo}/master/releases.json"
            ),
        }
    }

    /// Validates the descriptor for required fields and constraints.
    pub fn validate(&self) -> PluginResult<()> {
        if self.name.is_empty() {
            return Err(PluginError::DescriptorInvalid("name is required".into()));
        }
        for (field, value) in [
            ("version", &self.version),
            ("schema_version", &self.schema_version),
            ("host_minimum_version", &self.host_minimum_version),
            ("runtime_minimum_version", &self.runtime_minimum_version),
        ] {
            if !is_dotted_version(value) {
                return Err(PluginError::DescriptorInvalid(format!(
                    "{field} must be a dotted version, got {value:?}"
                )));
            }
        }
        for (field, value) in [
            ("developer_url", &self.developer_url),
            ("documentation_url", &self.documentation_url),
            ("release_feed_url", &self.release_feed_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(PluginError::DescriptorInvalid(format!(
                    "{field} must be an http(s) URL"
                )));
            }
        }
        Ok(())
    }

    pub fn is_host_required_version(&self, host_version: &str) -> bool {
        is_at_least(host_version, &self.host_minimum_version)
    }

    pub fn is_runtime_required_version(&self, runtime_version: &str) -> bool {
        is_at_least(runtime_version, &self.runtime_minimum_version)
    }

    /// Checks both minimum versions, reporting the first one not met.
    pub fn check_compatibility(&self, env: &HostEnvironment) -> PluginResult<()> {
        match self.incompatibilities(env).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Install hook. Logs every unmet requirement and returns whether
    /// installation may proceed.
    pub fn on_before_install(&self, env: &HostEnvironment) -> bool {
        let problems = self.incompatibilities(env);
        for problem in &problems {
            error!("{}", problem);
        }
        if problems.is_empty() {
            debug!(
                "{} {} is compatible with host {} / runtime {}",
                self.name, self.version, env.host_version, env.runtime_version
            );
        }
        problems.is_empty()
    }

    fn incompatibilities(&self, env: &HostEnvironment) -> Vec<PluginError> {
        let mut problems = Vec::new();
        if !self.is_host_required_version(&env.host_version) {
            problems.push(PluginError::Incompatible {
                component: "host",
                version: env.host_version.clone(),
                required: self.host_minimum_version.clone(),
            });
        }
        if !self.is_runtime_required_version(&env.runtime_version) {
            problems.push(PluginError::Incompatible {
                component: "runtime",
                version: env.runtime_version.clone(),
                required: self.runtime_minimum_version.clone(),
            });
        }
        problems
    }
}

fn is_dotted_version(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
