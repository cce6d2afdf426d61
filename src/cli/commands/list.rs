//! list command - Print the apps in the apps directory

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::Context;
use crate::catalog::AppCatalog;
use crate::core::types::AppName;
use crate::ui::output;

/// One app and everything nested under it.
#[derive(Debug, Serialize)]
struct AppTree {
    name: AppName,
    runnable: bool,
    apps: Vec<AppTree>,
}

/// List apps, as an indented tree or as JSON.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let catalog = ctx.catalog();
    let tree = build_tree(&catalog, &ctx.apps_dir)?;

    if json {
        let rendered = serde_json::to_string_pretty(&tree).context("Failed to encode app list")?;
        println!("{}", rendered);
        return Ok(());
    }

    if tree.is_empty() {
        output::print("No apps available yet.", ctx.verbosity);
        return Ok(());
    }

    let mut lines = Vec::new();
    render(&tree, 0, &mut lines);
    println!("{}", lines.join("\n"));
    Ok(())
}

fn build_tree(catalog: &AppCatalog, root: &Path) -> Result<Vec<AppTree>> {
    let names = catalog
        .list_apps(root)
        .context("Failed to list apps")?;

    names
        .into_iter()
        .map(|name| {
            let entry = catalog.inspect(root, &name);
            let apps = if entry.is_group() {
                build_tree(catalog, &entry.directory)?
            } else {
                Vec::new()
            };
            Ok(AppTree {
                name,
                runnable: entry.has_entrypoint,
                apps,
            })
        })
        .collect()
}

fn render(tree: &[AppTree], depth: usize, lines: &mut Vec<String>) {
    for app in tree {
        let marker = if app.runnable { "" } else { " (no entrypoint)" };
        lines.push(format!("{}{}{}", "  ".repeat(depth), app.name, marker));
        render(&app.apps, depth + 1, lines);
    }
}
