use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub tools: Tools,
    #[serde(default)]
    pub patterns: Patterns,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub log_decisions: bool,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Tools {
    /// Tool names routed through the rationale check.
    #[serde(default)]
    pub guarded: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Patterns {
    /// Extra case-insensitive stems checked in addition to the built-in
    /// multilingual rules. The built-ins are fixed and not configurable.
    #[serde(default)]
    pub extra: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    tools: ToolsOverlay,
    #[serde(default)]
    patterns: PatternsOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_decisions: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct ToolsOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    guarded: Vec<String>,
    #[serde(default)]
    remove_guarded: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PatternsOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    extra: Vec<String>,
    #[serde(default)]
    remove_extra: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cc-metronome/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend, scalars override.
    /// Set `replace = true` in any section to replace its defaults entirely.
    /// Use `remove_<field>` lists to subtract specific items from defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/cc-metronome/config.toml.
    /// An unreadable or unparsable overlay is ignored: config problems must
    /// not take the hook down.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/cc-metronome/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::warn!("config parse error, using defaults: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.settings.log_decisions {
            self.settings.log_decisions = v;
        }

        let t = overlay.tools;
        merge_list(&mut self.tools.guarded, t.guarded, &t.remove_guarded, t.replace);

        let p = overlay.patterns;
        merge_list(&mut self.patterns.extra, p.extra, &p.remove_extra, p.replace);
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert_eq!(config.tools.guarded, vec!["Bash"]);
        assert!(config.patterns.extra.is_empty());
    }

    #[test]
    fn default_log_decisions_is_false() {
        let config = Config::default_config();
        assert!(!config.settings.log_decisions);
    }

    #[test]
    fn overlay_extends_guarded_tools() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [tools]
            guarded = ["Shell"]
        "#,
        );
        assert!(config.tools.guarded.contains(&"Bash".to_string()));
        assert!(config.tools.guarded.contains(&"Shell".to_string()));
    }

    #[test]
    fn overlay_replace_guarded_tools() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [tools]
            replace = true
            guarded = ["Shell"]
        "#,
        );
        assert_eq!(config.tools.guarded, vec!["Shell"]);
    }

    #[test]
    fn overlay_removes_guarded_tool() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [tools]
            remove_guarded = ["Bash"]
        "#,
        );
        assert!(config.tools.guarded.is_empty());
    }

    #[test]
    fn overlay_adds_extra_patterns() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [patterns]
            extra = ["in bulk", "batch"]
        "#,
        );
        assert_eq!(config.patterns.extra, vec!["in bulk", "batch"]);
    }

    #[test]
    fn overlay_no_duplicates() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [tools]
            guarded = ["Bash"]
        "#,
        );
        let count = config.tools.guarded.iter().filter(|s| *s == "Bash").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn overlay_scalar_override() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            log_decisions = true
        "#,
        );
        assert!(config.settings.log_decisions);
    }

    #[test]
    fn overlay_omitted_settings_unchanged() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [patterns]
            extra = ["bulk"]
        "#,
        );
        assert!(!config.settings.log_decisions);
        assert_eq!(config.tools.guarded, vec!["Bash"]);
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.tools.guarded, original.tools.guarded);
        assert_eq!(config.patterns.extra, original.patterns.extra);
    }
}
