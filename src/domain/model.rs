pub const DEFAULT_LIBRARY_NAME: &str = "GodotPlayGamesServices";
pub const BINARY_TYPE: &str = "local";
pub const BINARY_SUFFIX: &str = ".release.aar";

pub const DEFAULT_EXCLUDED_KEYWORDS: [&str; 5] =
    ["test", "junit", "mockito", "espresso", "robolectric"];
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 1] = ["org.jetbrains.kotlin:kotlin-stdlib"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub binary_type: String,
    pub binary: String,
    pub remote: Vec<String>,
}

impl Descriptor {
    pub fn new(library_name: &str, remote: Vec<String>) -> Self {
        Self {
            name: library_name.to_string(),
            binary_type: BINARY_TYPE.to_string(),
            binary: format!("{}{}", library_name, BINARY_SUFFIX),
            remote,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Write the descriptor to the output path.
    #[default]
    Write,
    /// Print the descriptor without touching the output path.
    DryRun,
    /// Compare the descriptor with the one on disk.
    Check,
}

/// Which declared dependencies stay out of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Stored lowercase; matched as substrings of the lowercased coordinate.
    excluded_keywords: Vec<String>,
    excluded_prefixes: Vec<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            excluded_keywords: DEFAULT_EXCLUDED_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl FilterPolicy {
    /// Adds to the built-in rules; the defaults can never be switched off.
    pub fn with_extra(mut self, keywords: &[String], prefixes: &[String]) -> Self {
        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            if !self.excluded_keywords.contains(&keyword) {
                self.excluded_keywords.push(keyword);
            }
        }
        for prefix in prefixes {
            if !self.excluded_prefixes.contains(prefix) {
                self.excluded_prefixes.push(prefix.clone());
            }
        }
        self
    }

    pub fn excluded_keywords(&self) -> &[String] {
        &self.excluded_keywords
    }

    pub fn excluded_prefixes(&self) -> &[String] {
        &self.excluded_prefixes
    }

    pub fn allows(&self, dependency: &str) -> bool {
        let lowered = dependency.to_lowercase();
        if self
            .excluded_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
        {
            return false;
        }

        if self
            .excluded_prefixes
            .iter()
            .any(|prefix| dependency.starts_with(prefix.as_str()))
        {
            return false;
        }

        dependency.contains(':')
    }

    /// Keeps surviving entries in their original order, duplicates included.
    pub fn apply(&self, declared: Vec<String>) -> Vec<String> {
        declared
            .into_iter()
            .filter(|dependency| {
                let keep = self.allows(dependency);
                if !keep {
                    tracing::debug!("Skipping excluded dependency: {}", dependency);
                }
                keep
            })
            .collect()
    }
}
