use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use eyre::{Result, eyre};
use scat_core::{Assessment, InstrumentKind};
use scat_export::ExportSource;
use scat_export::mapping::FieldMap;
use scat_export::summary::render_summary;
use scat_storage::{DraftManager, FileStore, Recovery};

use crate::config::{self, ScatConfig};

fn read_record<R: Assessment>(path: &Path) -> Result<R> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre!("failed to read record at {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| eyre!("{} is not a {} record: {e}", path.display(), R::KIND.label()))
}

fn drafts<R: Assessment>(config: &ScatConfig) -> DraftManager<R> {
    let store = Arc::new(FileStore::new(config.draft_dir.clone()));
    DraftManager::new(store, config.draft_settings())
}

fn athlete_or_unnamed(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() { "unnamed athlete" } else { name }
}

pub fn score<R: ExportSource>(path: &Path, json: bool) -> Result<()> {
    let record: R = read_record(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record.scores())?);
    } else {
        print!("{}", render_summary(&record)?);
    }
    Ok(())
}

pub async fn export<R: ExportSource>(
    config: &ScatConfig,
    record_path: &Path,
    out_dir: &Path,
    keep_draft: bool,
) -> Result<()> {
    let record: R = read_record(record_path)?;
    let options = config.export_options(R::KIND)?;
    let doc = scat_export::export(&record, &options).await?;

    tokio::fs::create_dir_all(out_dir).await?;
    let path = out_dir.join(&doc.filename);
    tokio::fs::write(&path, &doc.bytes).await?;

    println!("wrote {}", path.display());
    println!(
        "filled {} fields, skipped {}",
        doc.report.filled.len(),
        doc.report.skipped.len()
    );
    for skipped in doc.report.problems() {
        println!("  {}: {}", skipped.field, skipped.reason);
    }

    // The exported document supersedes the autosave.
    if !keep_draft {
        drafts::<R>(config).discard()?;
    }
    Ok(())
}

pub async fn fields(config: &ScatConfig, kind: InstrumentKind, missing: bool) -> Result<()> {
    let instrument = config.instrument(kind);
    let fields =
        scat_export::template_fields(&instrument.template, config.template_timeout()).await?;

    if !missing {
        for field in &fields {
            if field.on_states.is_empty() {
                println!("{}\t{}", field.name, field.kind);
            } else {
                println!("{}\t{}\t{}", field.name, field.kind, field.on_states.join(","));
            }
        }
        println!("{} fields", fields.len());
        return Ok(());
    }

    let map = match &instrument.field_map {
        Some(path) => FieldMap::load(path)?,
        None => FieldMap::default_for(kind)?,
    };
    let present: HashSet<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    let absent: Vec<&str> = map
        .bindings
        .iter()
        .map(|b| b.field.as_str())
        .filter(|name| !present.contains(name))
        .collect();
    for name in &absent {
        println!("{name}");
    }
    println!("{} of {} mapped fields missing", absent.len(), map.len());
    Ok(())
}

pub fn draft_status<R: Assessment>(config: &ScatConfig) -> Result<()> {
    let label = R::KIND.label();
    match drafts::<R>(config).recover() {
        Recovery::None => println!("no {label} draft"),
        Recovery::Expired => println!("{label} draft expired and was cleared"),
        Recovery::Available(draft) => {
            let captured = draft
                .captured_at
                .map(|ts| ts.to_string())
                .unwrap_or_else(|| "an unknown time".to_string());
            println!(
                "{label} draft for {} saved at {captured}",
                athlete_or_unnamed(&draft.record.demographics().athlete_name)
            );
        }
    }
    Ok(())
}

pub fn draft_discard<R: Assessment>(config: &ScatConfig) -> Result<()> {
    drafts::<R>(config).discard()?;
    println!("{} draft discarded", R::KIND.label());
    Ok(())
}

pub async fn draft_save<R: Assessment>(config: &ScatConfig, record_path: &Path) -> Result<()> {
    let record: R = read_record(record_path)?;
    drafts::<R>(config).flush(&record).await?;
    println!("{} draft saved", R::KIND.label());
    Ok(())
}

pub fn show_config(path: &Path) -> Result<()> {
    let config = config::load_config(path)?;
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(path, &ScatConfig::default())?;
    println!("wrote {}", path.display());
    Ok(())
}
