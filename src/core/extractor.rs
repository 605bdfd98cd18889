use crate::domain::model::FilterPolicy;
use crate::utils::error::Result;
use regex::Regex;

/// First `dependencies { ... }` block, up to the first closing brace.
/// Nested braces inside the block end the match early.
const BLOCK_PATTERN: &str = r"(?s)dependencies\s*\{(.*?)\}";
const DECLARATION_PATTERN: &str = r#"implementation\s+['"]([^'"]+)['"]"#;

pub struct GradleExtractor {
    block: Regex,
    declaration: Regex,
}

impl GradleExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            block: Regex::new(BLOCK_PATTERN)?,
            declaration: Regex::new(DECLARATION_PATTERN)?,
        })
    }

    pub fn find_block<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.block
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Literal contents of every `implementation '...'` / `implementation "..."`
    /// inside the block, in source order. `None` when there is no block.
    pub fn declared(&self, content: &str) -> Option<Vec<String>> {
        let block = self.find_block(content)?;
        let declared = self
            .declaration
            .captures_iter(block)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect::<Vec<_>>();
        tracing::debug!("Found {} implementation declarations", declared.len());
        Some(declared)
    }
}

/// Declared dependencies that survive `policy`. Empty when the build file has
/// no dependencies block.
pub fn extract_dependencies(content: &str, policy: &FilterPolicy) -> Result<Vec<String>> {
    let extractor = GradleExtractor::new()?;
    match extractor.declared(content) {
        Some(declared) => Ok(policy.apply(declared)),
        None => {
            tracing::warn!("Could not find dependencies block");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILD_GRADLE: &str = r#"
plugins {
    id 'com.android.library'
    id 'org.jetbrains.kotlin.android'
}

dependencies {
    implementation "org.jetbrains.kotlin:kotlin-stdlib:1.9.0"
    implementation 'com.google.android.gms:play-services-games-v2:19.0.0'
    implementation "com.google.code.gson:gson:2.10.1"
    compileOnly fileTree(dir: 'libs', include: ['godot-lib*.aar'])
    testImplementation 'junit:junit:4.13.2'
    implementation 'androidx.test.espresso:espresso-core:3.5.1'
    implementation "godot-lib"
}
"#;

    #[test]
    fn test_extract_dependencies_filters_and_keeps_order() {
        let deps = extract_dependencies(BUILD_GRADLE, &FilterPolicy::default()).unwrap();
        assert_eq!(
            deps,
            vec![
                "com.google.android.gms:play-services-games-v2:19.0.0",
                "com.google.code.gson:gson:2.10.1",
            ]
        );
    }

    #[test]
    fn test_declared_returns_unfiltered_literals() {
        let extractor = GradleExtractor::new().unwrap();
        let declared = extractor.declared(BUILD_GRADLE).unwrap();
        // `testImplementation` never matches: the keyword is case-sensitive.
        assert_eq!(declared.len(), 5);
        assert_eq!(declared[0], "org.jetbrains.kotlin:kotlin-stdlib:1.9.0");
        assert_eq!(declared[4], "godot-lib");
    }

    #[test]
    fn test_n_clean_declarations_yield_n_entries() {
        let content = r#"dependencies {
    implementation "a.b:one:1.0"
    implementation 'a.b:two:2.0'
    implementation "a.b:three:3.0"
    implementation "a.b:one:1.0"
}"#;
        let deps = extract_dependencies(content, &FilterPolicy::default()).unwrap();
        assert_eq!(
            deps,
            vec!["a.b:one:1.0", "a.b:two:2.0", "a.b:three:3.0", "a.b:one:1.0"]
        );
    }

    #[test]
    fn test_missing_block_yields_empty() {
        let content = "android {\n    compileSdk 34\n}\n";
        let deps = extract_dependencies(content, &FilterPolicy::default()).unwrap();
        assert!(deps.is_empty());

        let extractor = GradleExtractor::new().unwrap();
        assert!(extractor.declared(content).is_none());
    }

    #[test]
    fn test_nested_braces_truncate_block() {
        let content = r#"dependencies {
    implementation "a.b:before:1.0"
    implementation("a.b:nested:1.0") {
        exclude group: 'x'
    }
    implementation "a.b:after:1.0"
}"#;
        let deps = extract_dependencies(content, &FilterPolicy::default()).unwrap();
        assert_eq!(deps, vec!["a.b:before:1.0"]);
    }

    #[test]
    fn test_only_first_block_is_read() {
        let content = r#"buildscript {
    dependencies {
        implementation "first.block:lib:1.0"
    }
}
dependencies {
    implementation "second.block:lib:1.0"
}"#;
        let deps = extract_dependencies(content, &FilterPolicy::default()).unwrap();
        assert_eq!(deps, vec!["first.block:lib:1.0"]);
    }

    #[test]
    fn test_empty_block() {
        let deps = extract_dependencies("dependencies {}", &FilterPolicy::default()).unwrap();
        assert!(deps.is_empty());
    }
}
