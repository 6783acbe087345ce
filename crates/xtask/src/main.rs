use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain crate must never depend on (outside dev-dependencies).
const DOMAIN_FORBIDDEN: &[&str] = &[
    "airlift-engine",
    "tracing",
    "tracing-subscriber",
    "anyhow",
    "mockall",
    "dotenvy",
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, "dev" or "build" otherwise
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let packages: HashMap<&str, &Package> = metadata
        .packages
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    let domain = packages
        .get("airlift-domain")
        .context("airlift-domain not found in workspace")?;
    let violations = forbidden_dependencies(domain, DOMAIN_FORBIDDEN);

    if !violations.is_empty() {
        anyhow::bail!(
            "airlift-domain must stay free of engine dependencies, found: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed ({} packages)", packages.len());
    Ok(())
}

fn forbidden_dependencies<'a>(package: &'a Package, forbidden: &[&str]) -> Vec<&'a str> {
    package
        .dependencies
        .iter()
        .filter(|dep| dep.kind.as_deref() != Some("dev"))
        .filter(|dep| forbidden.contains(&dep.name.as_str()))
        .map(|dep| dep.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(deps: &[(&str, Option<&str>)]) -> Package {
        Package {
            name: "airlift-domain".into(),
            dependencies: deps
                .iter()
                .map(|(name, kind)| Dependency {
                    name: name.to_string(),
                    kind: kind.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn dev_dependencies_are_allowed() {
        let domain = package(&[("serde", None), ("mockall", Some("dev"))]);
        assert!(forbidden_dependencies(&domain, DOMAIN_FORBIDDEN).is_empty());
    }

    #[test]
    fn normal_engine_dependency_is_reported() {
        let domain = package(&[("tracing", None), ("airlift-engine", Some("build"))]);
        assert_eq!(
            forbidden_dependencies(&domain, DOMAIN_FORBIDDEN),
            vec!["tracing", "airlift-engine"]
        );
    }

    #[test]
    fn parses_metadata_json() {
        let json = r#"{ "packages": [
            { "name": "airlift-domain", "version": "0.1.0",
              "dependencies": [{ "name": "uuid", "kind": null, "req": "^1" }] }
        ] }"#;
        let metadata: Metadata = serde_json::from_str(json).expect("valid metadata");
        assert_eq!(metadata.packages[0].dependencies[0].name, "uuid");
    }
}
