use std::collections::HashMap;
use std::path::Path;

/// Rank given to extensions missing from the priority table.
pub const UNKNOWN_RANK: u32 = 999;
pub const FALLBACK_EXTENSION: &str = ".txt";

const DEFAULT_PRIORITY: [(&str, u32); 6] = [
    (".ts", 1),
    (".js", 2),
    (".svelte", 3),
    (".glsl", 4),
    (".vert", 5),
    (".frag", 6),
];

/// Ranks extensions for auto-named output; a lower rank wins when inputs are mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPriority {
    ranks: HashMap<String, u32>,
}

impl ExtensionPriority {
    pub fn rank(&self, ext: &str) -> u32 {
        self.ranks.get(&normalize_key(ext)).copied().unwrap_or(UNKNOWN_RANK)
    }

    pub fn set(&mut self, ext: &str, rank: u32) {
        self.ranks.insert(normalize_key(ext), rank);
    }
}

impl Default for ExtensionPriority {
    fn default() -> Self {
        DEFAULT_PRIORITY.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for ExtensionPriority {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let ranks = iter.into_iter().map(|(e, r)| (normalize_key(e.as_ref()), r)).collect();
        Self { ranks }
    }
}

fn normalize_key(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') { lower } else { format!(".{}", lower) }
}

/// Extension of the final path component including its dot, lowercased.
/// `.bashrc` has none; `name.` yields `"."`.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    match name.rfind('.') {
        Some(0) | None => None,
        Some(i) => Some(name[i..].to_lowercase()),
    }
}

pub fn determine_output_extension<P: AsRef<Path>>(files: &[P], priorities: &ExtensionPriority) -> String {
    let mut unique: Vec<String> = Vec::new();
    for ext in files.iter().filter_map(|f| extension_of(f.as_ref())) {
        if !unique.contains(&ext) { unique.push(ext); }
    }
    if unique.len() == 1 {
        return unique.remove(0);
    }
    // stable: equal ranks keep first-seen order
    unique.sort_by_key(|e| priorities.rank(e));
    unique.into_iter().next().unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
