//! Plugin descriptors for the rich text editor integrations.
//!
//! Each supported editor ships as its own host plugin:
//! - [`EditorKind::CkEditor`] reads configs from `<config>/ckeditor/`
//! - [`EditorKind::TinyMce`] reads configs from `<config>/tinymce/` and serves
//!   `.json` configs wrapped in a `tinymce.config = ...` assignment
//!
//! Before installation the host calls
//! [`PluginDescriptor::on_before_install`], which refuses hosts or runtimes
//! older than the descriptor's minimum versions.

mod descriptor;
mod editor;
mod error;
mod version;

pub use descriptor::{DESCRIPTOR_VERSION, HostEnvironment, PluginDescriptor, SCHEMA_VERSION};
pub use editor::EditorKind;
pub use error::{PluginError, PluginResult};
pub use version::{compare_versions, is_at_least};
