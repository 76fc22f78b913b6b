//! Config command implementation

use crate::cli::ConfigInitArgs;
use crate::config::ForemanConfig;

/// Handle `config init`: write a default configuration file.
pub fn handle_config_init(args: &ConfigInitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    std::fs::write(&args.output, ForemanConfig::default_toml())?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_init_writes_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("foreman.toml");

        handle_config_init(&ConfigInitArgs {
            output: output.clone(),
            force: false,
        })
        .unwrap();

        let loaded = ForemanConfig::load(Some(&output)).unwrap();
        assert_eq!(loaded.server.port, ForemanConfig::default().server.port);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("foreman.toml");
        std::fs::write(&output, "# existing").unwrap();

        let result = handle_config_init(&ConfigInitArgs {
            output: output.clone(),
            force: false,
        });
        assert!(result.is_err());

        // And with --force it goes through.
        handle_config_init(&ConfigInitArgs {
            output,
            force: true,
        })
        .unwrap();
    }

    #[test]
    fn test_init_missing_dir_errors() {
        let result = handle_config_init(&ConfigInitArgs {
            output: PathBuf::from("/nonexistent/dir/foreman.toml"),
            force: false,
        });
        assert!(result.is_err());
    }
}
