use nestview::export::DEFAULT_FILE_PREFIX;
use nestview::render::svg_util::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration of the nestview command-line driver
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NestViewConfig {
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Exported sheets are named `<file_prefix>_<n>.svg`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_owned()
}

impl Default for NestViewConfig {
    fn default() -> Self {
        Self {
            svg_draw_options: SvgDrawOptions::default(),
            file_prefix: default_file_prefix(),
        }
    }
}
