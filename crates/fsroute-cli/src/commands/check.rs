use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::table::{Report, RouteTable};

/// Compiles every route in strict mode and reports every violation
pub fn execute(config: &Config, root: &Path) -> Result<()> {
    let mut config = config.clone();
    config.strict = true;

    let table = RouteTable::build(&config, root, Report::AllErrors)?;
    super::routes::print_table(&table);
    println!();

    if table.is_clean() {
        println!(
            "{} {} route(s) pass strict validation",
            "✓".green().bold(),
            table.routes.len()
        );
        return Ok(());
    }

    bail!(
        "{} of {} route(s) rejected",
        table.rejected.len(),
        table.rejected.len() + table.routes.len()
    )
}
