use crate::{emit_json, OutputMode};
use lokvani::config::{self, LokvaniConfig};
use lokvani::ui::{self, Icons};
use lokvani::{Filter, SqliteStore};
use std::path::Path;

pub fn run_init(path: &Path, force: bool) -> anyhow::Result<()> {
    let config = config::starter_config();
    config::write_config(path, &config, force)?;

    if !lokvani::output::is_quiet() {
        ui::success(&format!("Wrote {}", path.display()));
        for (key, value) in describe(&config) {
            ui::summary_row(key, &value);
        }
    }
    Ok(())
}

pub fn run_stats(database: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let store = SqliteStore::open(database)?;
    let stats = store.stats()?;

    if output_mode.is_human() {
        ui::section(&format!("{} Lokvani ({})", Icons::STATS, database.display()));
        let stories = stats.stories.to_string();
        let proverbs = stats.proverbs.to_string();
        let languages = stats.languages.to_string();
        println!(
            "{}",
            ui::stats_table(&[
                ("Stories", stories.as_str()),
                ("Proverbs", proverbs.as_str()),
                ("Languages", languages.as_str()),
            ])
        );
    } else {
        emit_json(&stats)?;
    }
    Ok(())
}

pub fn run_list_stories(
    database: &Path,
    language: Option<String>,
    category: Option<String>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let store = SqliteStore::open(database)?;
    let stories = store.list_stories(&Filter::new(language, category))?;

    if !output_mode.is_human() {
        return emit_json(&stories);
    }
    if stories.is_empty() {
        println!("{} No stories found.", Icons::EMPTY);
    } else {
        println!("{} {} stories", Icons::BOOK, stories.len());
        println!("{}", ui::stories_table(&stories));
    }
    Ok(())
}

pub fn run_list_proverbs(
    database: &Path,
    language: Option<String>,
    region: Option<String>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let store = SqliteStore::open(database)?;
    let proverbs = store.list_proverbs(&Filter::new(language, region))?;

    if !output_mode.is_human() {
        return emit_json(&proverbs);
    }
    if proverbs.is_empty() {
        println!("{} No proverbs found.", Icons::EMPTY);
    } else {
        println!("{} {} proverbs", Icons::SCROLL, proverbs.len());
        println!("{}", ui::proverbs_table(&proverbs));
    }
    Ok(())
}

pub fn run_languages(database: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let store = SqliteStore::open(database)?;
    let languages = store.languages()?;

    if output_mode.is_human() {
        for language in &languages {
            println!("{} {}", Icons::GLOBE, language);
        }
    } else {
        emit_json(&languages)?;
    }
    Ok(())
}

fn describe(config: &LokvaniConfig) -> Vec<(&'static str, String)> {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    vec![
        ("database", show(&config.database)),
        ("host", show(&config.host)),
        ("port", config.port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())),
        ("static_dir", show(&config.static_dir)),
    ]
}
