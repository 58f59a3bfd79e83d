//! Error types for the plugin crate.

use thiserror::Error;

pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error("This plugin is not compatible with {component} {version} - requires {component} {required} or greater")]
    Incompatible {
        component: &'static str,
        version: String,
        required: String,
    },

    #[error("descriptor validation error: {0}")]
    DescriptorInvalid(String),

    #[error("unknown editor: {0}")]
    UnknownEditor(String),
}
