use crate::extension::ExtensionPriority;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "generated";
pub const DEFAULT_COMMENT_PREFIX: &str = "//";
pub const DEFAULT_FILE_SEPARATION: usize = 2;

/// Options for a single gather call. Start from `Default` and override what differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatherOptions {
    /// Where auto-named output goes; ignored when an output path is given.
    pub output_dir: PathBuf,
    pub comment_prefix: String,
    /// Newlines appended after each file.
    pub file_separation: usize,
    pub create_output_dir: bool,
    pub extension_priority: ExtensionPriority,
}

impl Default for GatherOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            file_separation: DEFAULT_FILE_SEPARATION,
            create_output_dir: true,
            extension_priority: ExtensionPriority::default(),
        }
    }
}

impl GatherOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    pub fn with_file_separation(mut self, newlines: usize) -> Self {
        self.file_separation = newlines;
        self
    }

    pub fn with_create_output_dir(mut self, create: bool) -> Self {
        self.create_output_dir = create;
        self
    }

    pub fn with_extension_priority(mut self, priority: ExtensionPriority) -> Self {
        self.extension_priority = priority;
        self
    }
}
