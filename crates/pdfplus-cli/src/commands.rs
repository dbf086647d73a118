use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde_json::{Map, Value};
use tracing::debug;

use pdfplus_model::{RedirectDescriptor, RedirectMapping, VaultFile, ViewStateRecord};
use pdfplus_view::{FsVault, PageFragment, Settings, SubpathMapper, Vault};

use crate::cli::ResolveArgs;

/// Result of resolving one descriptor inside a vault.
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub descriptor: VaultFile,
    pub redirect: RedirectDescriptor,
    pub mapping: RedirectMapping,
}

pub async fn run_resolve(args: &ResolveArgs, settings: &Settings) -> Result<ResolveOutcome> {
    let vault = FsVault::new(&args.vault, settings.redirect.resource_path_prefix.clone());
    let descriptor = VaultFile::new(args.descriptor.as_str());
    if !descriptor.has_extension(&settings.redirect.descriptor_extension) {
        debug!(
            descriptor = %args.descriptor,
            extension = %settings.redirect.descriptor_extension,
            "descriptor does not use the configured extension"
        );
    }

    let content = vault
        .read(&descriptor)
        .await
        .with_context(|| format!("read {}", vault.absolute(&descriptor).display()))?;
    let redirect = settings
        .resolver(vault.clone())
        .resolve(&descriptor, &content)
        .with_context(|| format!("resolve {descriptor}"))?;
    let mapping = RedirectMapping::for_descriptor(&vault.resource_path(&descriptor), &redirect);

    Ok(ResolveOutcome {
        descriptor,
        redirect,
        mapping,
    })
}

pub fn print_resolve(outcome: &ResolveOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", resolve_json(outcome)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("descriptor"),
        Cell::new(outcome.descriptor.path()),
    ]);
    table.add_row(vec![
        Cell::new("href"),
        Cell::new(&outcome.redirect.raw_path),
    ]);
    table.add_row(vec![
        Cell::new("external path"),
        Cell::new(&outcome.redirect.resolved_external_path),
    ]);
    table.add_row(vec![
        Cell::new("resource"),
        Cell::new(&outcome.redirect.resource_locator),
    ]);
    table.add_row(vec![
        Cell::new("redirect from"),
        Cell::new(&outcome.mapping.from).fg(Color::DarkGrey),
    ]);
    println!("{table}");
    Ok(())
}

fn resolve_json(outcome: &ResolveOutcome) -> Result<String> {
    let value = serde_json::json!({
        "descriptor": outcome.descriptor,
        "redirect": outcome.redirect,
        "mapping": outcome.mapping,
    });
    serde_json::to_string_pretty(&value).context("serialize result")
}

/// Page fragment for a JSON view state, or `None` when it has no usable page.
pub fn run_subpath(state: &str) -> Result<Option<String>> {
    let map: Map<String, Value> =
        serde_json::from_str(state).context("view state must be a JSON object")?;
    Ok(PageFragment.subpath(&ViewStateRecord::from_map(map)))
}

pub fn run_config(path: &Path, settings: &Settings) -> Result<String> {
    let body = toml::to_string_pretty(settings).context("serialize settings")?;
    Ok(format!("# {}\n{body}", path.display()))
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
