use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use elpick::app_dirs;
use elpick::filter::DEFAULT_DEBOUNCE;
use elpick::source::{DEFAULT_COUNT, DEFAULT_LATENCY};
use elpick::ui::style;
use elpick::{DEFAULT_MAX_SELECTION, SourceOptions, ThresholdFilter, UiLabels};

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    source: SourceSection,
    picker: PickerSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
    count: Option<usize>,
    latency_ms: Option<u64>,
    fail_with: Option<String>,
    never_resolve: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PickerSection {
    max_selection: Option<usize>,
    debounce_ms: Option<u64>,
    initial_filter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    dialog_title: Option<String>,
    search_placeholder: Option<String>,
    theme: Option<String>,
}

/// Fully validated settings used to build the picker.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: SourceOptions,
    pub max_selection: usize,
    pub debounce: Duration,
    pub initial_filter: ThresholdFilter,
    pub labels: UiLabels,
    pub theme: String,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Items: {}", self.source.count);
        println!("  Latency: {}ms", self.source.latency.as_millis());
        if let Some(message) = &self.source.fail_with {
            println!("  Simulated failure: {message}");
        }
        if self.source.never_resolve {
            println!("  Never resolve: enabled");
        }
        println!("  Max selection: {}", self.max_selection);
        println!("  Debounce: {}ms", self.debounce.as_millis());
        println!("  Initial filter: {}", self.initial_filter.label());
        println!("  Title: {}", self.labels.title);
        println!("  Dialog title: {}", self.labels.dialog_title);
        println!("  Search placeholder: {}", self.labels.search_placeholder);
        println!("  UI theme: {}", self.theme);
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("elpick")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".elpick.toml"));
        files.push(current_dir.join("elpick.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(count) = cli.count {
            self.source.count = Some(count);
        }
        if let Some(latency) = cli.latency_ms {
            self.source.latency_ms = Some(latency);
        }
        if let Some(message) = cli.fail_with.clone() {
            self.source.fail_with = Some(message);
        }
        if cli.never_resolve {
            self.source.never_resolve = Some(true);
        }

        if let Some(max) = cli.max_selection {
            self.picker.max_selection = Some(max);
        }
        if let Some(debounce) = cli.debounce_ms {
            self.picker.debounce_ms = Some(debounce);
        }
        if let Some(filter) = cli.filter.clone() {
            self.picker.initial_filter = Some(filter);
        }

        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let count = self.source.count.unwrap_or(DEFAULT_COUNT);
        ensure!(count > 0, "source.count must be greater than zero");

        let latency = self
            .source
            .latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY);
        let fail_with = self
            .source
            .fail_with
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());

        let max_selection = self.picker.max_selection.unwrap_or(DEFAULT_MAX_SELECTION);
        ensure!(
            max_selection > 0,
            "picker.max_selection must be greater than zero"
        );

        let debounce = self
            .picker
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE);

        let initial_filter = match self.picker.initial_filter.as_deref() {
            Some(token) => token
                .trim()
                .parse::<ThresholdFilter>()
                .with_context(|| format!("invalid picker.initial_filter '{token}'"))?,
            None => ThresholdFilter::None,
        };

        let theme = self
            .ui
            .theme
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        ensure!(
            style::by_name(&theme).is_some(),
            "unknown theme '{theme}' (available: {})",
            style::names().join(", ")
        );

        let mut labels = UiLabels::default();
        if let Some(title) = self.ui.title {
            labels.title = title;
        }
        if let Some(title) = self.ui.dialog_title {
            labels.dialog_title = title;
        }
        if let Some(placeholder) = self.ui.search_placeholder {
            labels.search_placeholder = placeholder;
        }

        Ok(ResolvedConfig {
            source: SourceOptions {
                count,
                latency,
                fail_with,
                never_resolve: self.source.never_resolve.unwrap_or(false),
            },
            max_selection,
            debounce,
            initial_filter,
            labels,
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        let mut argv = vec!["elpick", "--no-config"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn defaults_apply_without_sources() {
        let resolved = load(&cli(&[])).unwrap();
        assert_eq!(resolved.source.count, 300);
        assert_eq!(resolved.source.latency, Duration::from_millis(500));
        assert_eq!(resolved.max_selection, 3);
        assert_eq!(resolved.debounce, Duration::from_millis(300));
        assert_eq!(resolved.initial_filter, ThresholdFilter::None);
        assert_eq!(resolved.theme, "default");
        assert_eq!(resolved.labels.title, "Select items");
    }

    #[test]
    fn config_file_is_overridden_by_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("picker.toml");
        fs::write(
            &path,
            r#"
[source]
count = 50
fail_with = "backend down"

[picker]
max_selection = 5
initial_filter = ">10"

[ui]
title = "Pick elements"
theme = "light"
"#,
        )
        .unwrap();

        let path = path.to_string_lossy().into_owned();
        let resolved = load(&cli(&["--config", &path, "--max-selection", "2"])).unwrap();
        assert_eq!(resolved.source.count, 50);
        assert_eq!(resolved.source.fail_with.as_deref(), Some("backend down"));
        assert_eq!(resolved.max_selection, 2);
        assert_eq!(resolved.initial_filter, ThresholdFilter::GreaterThan(10));
        assert_eq!(resolved.labels.title, "Pick elements");
        assert_eq!(resolved.theme, "light");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = load(&cli(&["--max-selection", "0"])).unwrap_err();
        assert!(err.to_string().contains("max_selection"));

        let err = load(&cli(&["--theme", "neon"])).unwrap_err();
        assert!(err.to_string().starts_with("unknown theme 'neon'"));

        let err = load(&cli(&["--filter", "10"])).unwrap_err();
        assert!(err.to_string().contains("initial_filter"));
    }

    #[test]
    fn initial_filter_must_be_a_selector_option() {
        let err = load(&cli(&["--filter", ">5"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid picker.initial_filter '>5'");
        let cause = err.root_cause().to_string();
        assert!(cause.contains("not one of"), "{cause}");

        let resolved = load(&cli(&["--filter", ">200"])).unwrap();
        assert_eq!(resolved.initial_filter, ThresholdFilter::GreaterThan(200));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let path = path.to_string_lossy().into_owned();
        assert!(load(&cli(&["--config", &path])).is_err());
    }
}
