use anyhow::Result;
use fsroute_router::{
    middleware_key, plugin_key, Compiler, Method, Param, RouteFile, ValidationError,
};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::scan::{scan_dir, FileKind};

/// A middleware or plugin file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub file: String,
    pub key: String,
}

/// A route that compiled successfully
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub method: Method,
    pub file: String,
    pub key: String,
    /// Router pattern relative to the prefix
    pub pattern: String,
    /// Authored path under the prefix, for display
    pub display_path: String,
    pub params: Vec<Param>,
}

/// A route rejected by strict validation
#[derive(Debug, Clone, Serialize)]
pub struct Rejected {
    pub file: String,
    pub route_path: String,
    pub errors: Vec<String>,
}

/// A route that compiled to the same method and pattern as an earlier one
#[derive(Debug, Clone, Serialize)]
pub struct Shadowed {
    pub file: String,
    pub shadowed_by: String,
}

/// Everything a source directory registers, in load order
#[derive(Debug, Default, Serialize)]
pub struct RouteTable {
    pub prefix: String,
    pub plugins: Vec<Registration>,
    pub middleware: Vec<Registration>,
    pub routes: Vec<RouteEntry>,
    pub rejected: Vec<Rejected>,
    pub shadowed: Vec<Shadowed>,
    /// Files whose names do not follow `<name>[.<method>].<ext>`
    pub skipped: Vec<String>,
    /// Non-fatal problems, such as constraint regexes that do not compile
    pub warnings: Vec<String>,
}

/// How rejected routes are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// First violation only
    FirstError,
    /// Every violation of the pattern
    AllErrors,
}

impl RouteTable {
    /// Scans `<root>/<src_dir>` and compiles every route
    pub fn build(config: &Config, root: &Path, report: Report) -> Result<Self> {
        let src = config.src_path(root);
        let [plugins, middleware, routes] = FileKind::LOAD_ORDER.map(|kind| scan_dir(&src, kind));
        let (plugins, middleware, routes) = (plugins?, middleware?, routes?);

        let table = Self::from_files(
            &config.compiler(),
            &config.prefix,
            &plugins,
            &middleware,
            &routes,
            report,
        );

        info!(
            src = %src.display(),
            plugins = table.plugins.len(),
            middleware = table.middleware.len(),
            routes = table.routes.len(),
            rejected = table.rejected.len(),
            "route table built"
        );

        Ok(table)
    }

    /// Builds a table from already-scanned file lists (pure)
    ///
    /// Each route is compiled on its own: a rejected route never stops the
    /// others from registering.
    pub fn from_files(
        compiler: &Compiler,
        prefix: &str,
        plugins: &[String],
        middleware: &[String],
        routes: &[String],
        report: Report,
    ) -> Self {
        let mut table = RouteTable {
            prefix: prefix.to_string(),
            plugins: plugins
                .iter()
                .map(|file| Registration {
                    file: file.clone(),
                    key: plugin_key(file),
                })
                .collect(),
            middleware: middleware
                .iter()
                .map(|file| Registration {
                    file: file.clone(),
                    key: middleware_key(file),
                })
                .collect(),
            ..Default::default()
        };

        let mut seen: HashMap<(Method, String), String> = HashMap::new();

        for file in routes {
            let Some(route) = RouteFile::from_relative(file, prefix) else {
                warn!(file = %file, "invalid route file name format");
                table.skipped.push(file.clone());
                continue;
            };

            match route.compile(compiler) {
                Ok(compiled) => {
                    let identity = (route.method, compiled.pattern.clone());
                    if let Some(first) = seen.get(&identity) {
                        warn!(file = %file, shadowed_by = %first, "duplicate route");
                        table.shadowed.push(Shadowed {
                            file: route.file,
                            shadowed_by: first.clone(),
                        });
                        continue;
                    }
                    seen.insert(identity, route.file.clone());

                    table.warnings.extend(check_constraints(&route.file, &compiled.params));
                    table.routes.push(RouteEntry {
                        method: route.method,
                        file: route.file,
                        key: route.key,
                        pattern: compiled.pattern,
                        display_path: route.log_path,
                        params: compiled.params,
                    });
                }
                Err(err) => {
                    warn!(file = %file, error = %err, "route rejected");
                    let errors = match report {
                        Report::FirstError => vec![err],
                        Report::AllErrors => compiler.diagnose(&route.route_path),
                    };
                    table.rejected.push(Rejected {
                        file: route.file,
                        route_path: route.route_path,
                        errors: errors.iter().map(ValidationError::to_string).collect(),
                    });
                }
            }
        }

        table
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Checks that each constraint regex compiles as a full-segment match
fn check_constraints(file: &str, params: &[Param]) -> Vec<String> {
    params
        .iter()
        .filter_map(|param| {
            let regex = param.regex.as_deref()?;
            Regex::new(&format!("^(?:{})$", regex)).err().map(|err| {
                warn!(file = %file, param = %param.name, "constraint regex does not compile");
                format!(
                    "{}: parameter `{}` has an invalid regex `{}`: {}",
                    file, param.name, regex, err
                )
            })
        })
        .collect()
}
