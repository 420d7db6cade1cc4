use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::table::{Report, RouteTable};

pub fn execute(config: &Config, root: &Path, json: bool) -> Result<()> {
    let table = RouteTable::build(config, root, Report::FirstError)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    print_table(&table);
    Ok(())
}

/// Prints registrations in load order: plugins, middleware, routes
pub fn print_table(table: &RouteTable) {
    for plugin in &table.plugins {
        println!("{} Registered plugin: {}", "+".green(), plugin.file.cyan());
    }

    for middleware in &table.middleware {
        println!("{} Registered middleware: {}", "+".green(), middleware.file.cyan());
    }

    for route in &table.routes {
        println!(
            "{} Registered route: {} {} {}",
            "+".green(),
            route.display_path.cyan(),
            format!("[{}]", route.method).dimmed(),
            route.pattern.dimmed()
        );
    }

    for shadowed in &table.shadowed {
        println!(
            "{} Shadowed route: {} (by {})",
            "~".yellow(),
            shadowed.file.cyan(),
            shadowed.shadowed_by
        );
    }

    for rejected in &table.rejected {
        for error in &rejected.errors {
            println!(
                "{} Rejected route: {} {}",
                "✗".red(),
                rejected.file.cyan(),
                error
            );
        }
    }

    for skipped in &table.skipped {
        println!("{} Invalid route file name format: {}", "⚠".yellow(), skipped);
    }

    for warning in &table.warnings {
        println!("{} {}", "⚠".yellow(), warning);
    }

    if table.plugins.is_empty() && table.middleware.is_empty() && table.routes.is_empty() {
        println!("{}", "No routes found".yellow());
    }
}
