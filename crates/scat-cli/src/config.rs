use std::path::{Path, PathBuf};
use std::time::Duration;

use scat_core::{InstrumentKind, keys};
use scat_export::ExportOptions;
use scat_export::mapping::FieldMap;
use scat_export::template::TemplateSource;
use scat_storage::{DraftSettings, LegacyDrafts};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub draft_dir: PathBuf,
    pub autosave_debounce_ms: u64,
    pub draft_max_age_hours: u64,
    pub legacy_drafts: LegacyDrafts,
    pub template_timeout_secs: u64,
    pub scat6: InstrumentConfig,
    pub scoat6: InstrumentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub template: TemplateSource,
    /// Replaces the built-in field table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_map: Option<PathBuf>,
}

impl InstrumentConfig {
    fn bundled(kind: InstrumentKind) -> Self {
        Self {
            template: TemplateSource::Path(PathBuf::from(keys::template(kind))),
            field_map: None,
        }
    }
}

impl Default for ScatConfig {
    fn default() -> Self {
        let data = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            config_version: CURRENT_VERSION,
            draft_dir: data.join("scat").join("drafts"),
            autosave_debounce_ms: 3000,
            draft_max_age_hours: 24,
            legacy_drafts: LegacyDrafts::default(),
            template_timeout_secs: 30,
            scat6: InstrumentConfig::bundled(InstrumentKind::Scat6),
            scoat6: InstrumentConfig::bundled(InstrumentKind::Scoat6),
        }
    }
}

impl ScatConfig {
    pub fn instrument(&self, kind: InstrumentKind) -> &InstrumentConfig {
        match kind {
            InstrumentKind::Scat6 => &self.scat6,
            InstrumentKind::Scoat6 => &self.scoat6,
        }
    }

    pub fn template_timeout(&self) -> Duration {
        Duration::from_secs(self.template_timeout_secs)
    }

    pub fn draft_settings(&self) -> DraftSettings {
        DraftSettings {
            debounce: Duration::from_millis(self.autosave_debounce_ms),
            max_age: Duration::from_secs(self.draft_max_age_hours.saturating_mul(60 * 60)),
            legacy: self.legacy_drafts,
        }
    }

    pub fn export_options(&self, kind: InstrumentKind) -> eyre::Result<ExportOptions> {
        let instrument = self.instrument(kind);
        let mut options = ExportOptions::new(instrument.template.clone());
        options.timeout = self.template_timeout();
        if let Some(path) = &instrument.field_map {
            options.field_map = Some(FieldMap::load(path)?);
        }
        Ok(options)
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("scat").join("config.json"))
}

/// Load the config at `path`, falling back to defaults when it does not
/// exist yet.
pub fn load_config(path: &Path) -> eyre::Result<ScatConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config, using defaults");
        return Ok(ScatConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0);

    let migrated = migrate(json, on_disk_version)?;
    let config: ScatConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update scat."
        ));
    }

    // v0 → v1: add legacy_drafts. Unversioned installs offered drafts
    // without a timestamp.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("legacy_drafts")
            .or_insert(serde_json::Value::String("offer".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added legacy_drafts)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScatConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
