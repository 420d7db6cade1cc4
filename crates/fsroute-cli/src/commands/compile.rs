use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::Config;

pub fn execute(config: &Config, pattern: &str, show_params: bool) -> Result<()> {
    let compiler = config.compiler();

    match compiler.compile_pattern(pattern) {
        Ok(compiled) => {
            println!("{}", compiled.pattern);

            if show_params {
                for param in &compiled.params {
                    let regex = param.regex.as_deref().unwrap_or("-");
                    println!(
                        "  {} {} {}",
                        param.name.cyan(),
                        format!("{:?}", param.kind).dimmed(),
                        regex
                    );
                }
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            bail!("pattern rejected in strict mode: {}", pattern)
        }
    }
}
