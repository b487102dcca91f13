use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use shared::domain::SortField;

pub const SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub dataset_path: Option<PathBuf>,
    pub sample_size: usize,
    pub sample_seed: u64,
    pub locale: String,
    pub initial_sort_field: SortField,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            sample_size: 200,
            sample_seed: 42,
            locale: "en".into(),
            initial_sort_field: SortField::Id,
            window_title: "People Dashboard".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    dataset_path: Option<PathBuf>,
    sample_size: Option<usize>,
    sample_seed: Option<u64>,
    locale: Option<String>,
    initial_sort_field: Option<String>,
    window_title: Option<String>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

/// File values override defaults; environment values override both.
/// Each key may be set as `DASHBOARD_<KEY>` or `APP__<KEY>`, the latter winning.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings file")
            }
        },
        Err(_) => tracing::debug!(path = %path.display(), "no settings file, using defaults"),
    }

    let lookup = |key: &str| {
        env(&format!("APP__{key}"))
            .or_else(|| env(&format!("DASHBOARD_{key}")))
            .filter(|v| !v.trim().is_empty())
    };

    if let Some(v) = lookup("DATASET_PATH") {
        settings.dataset_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("SAMPLE_SIZE") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.sample_size = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric sample size"),
        }
    }
    if let Some(v) = lookup("SAMPLE_SEED") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.sample_seed = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric sample seed"),
        }
    }
    if let Some(v) = lookup("LOCALE") {
        settings.locale = v;
    }
    if let Some(v) = lookup("INITIAL_SORT_FIELD") {
        apply_sort_field(&mut settings, &v);
    }
    if let Some(v) = lookup("WINDOW_TITLE") {
        settings.window_title = v;
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.dataset_path {
        settings.dataset_path = Some(v);
    }
    if let Some(v) = file_cfg.sample_size {
        settings.sample_size = v;
    }
    if let Some(v) = file_cfg.sample_seed {
        settings.sample_seed = v;
    }
    if let Some(v) = file_cfg.locale {
        settings.locale = v;
    }
    if let Some(v) = file_cfg.initial_sort_field {
        apply_sort_field(settings, &v);
    }
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
}

fn apply_sort_field(settings: &mut Settings, raw: &str) {
    match raw.parse::<SortField>() {
        Ok(field) => settings.initial_sort_field = field,
        Err(err) => tracing::warn!(error = %err, "keeping default sort field"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
