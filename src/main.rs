use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use hotkeys::events::KEY_ACTION;
use hotkeys::keymap::{
    canonicalize, default_config, dispatch, format_key_code, get_default_hotkeys_yaml,
    parse_key_string, ActionId, ACTIONS,
};
use hotkeys::{HotkeyConfig, Hotkeys, KeyCode, Namespace, VarBus};

mod cli;

use cli::{CliArgs, CliCommand, ConfigArgs};

/// Assemble the configuration layers selected on the command line
///
/// Embedded defaults, then the user file, then `--config`.
fn load_config(args: &ConfigArgs) -> Result<HotkeyConfig> {
    let mut config = match (args.no_defaults, args.no_user) {
        (false, false) => HotkeyConfig::load(),
        (false, true) => default_config(),
        (true, false) => HotkeyConfig::load_user(),
        (true, true) => HotkeyConfig::new(),
    };

    if let Some(path) = &args.config {
        let overrides = HotkeyConfig::load_from_path(path)
            .with_context(|| format!("Failed to load hotkeys from {}", path.display()))?;
        config.merge(overrides);
    }

    Ok(config)
}

fn start(args: &ConfigArgs) -> Result<(Arc<VarBus>, Hotkeys)> {
    let config = load_config(args)?;
    let bus = Arc::new(VarBus::new());
    let hotkeys =
        Hotkeys::init(bus.clone(), &config).context("Failed to initialize hotkeys")?;

    for issue in &hotkeys.report().issues {
        eprintln!("warning: {}", issue);
    }
    Ok((bus, hotkeys))
}

fn describe(code: KeyCode) -> String {
    format_key_code(code).unwrap_or_else(|e| format!("<{}>", e))
}

fn run(args: CliArgs) -> Result<()> {
    match args.command {
        CliCommand::Parse { keys } => {
            for key in keys {
                let code = parse_key_string(&key).with_context(|| format!("\"{}\"", key))?;
                println!("{:#010x}\t{}", code, canonicalize(&key)?);
            }
        }
        CliCommand::Format { codes } => {
            for raw in codes {
                let code = KeyCode::from_raw(raw);
                let text = format_key_code(code)?;
                println!("{:#010x}\t{}", code, text);
            }
        }
        CliCommand::Actions => {
            let (_bus, hotkeys) = start(&args.config)?;
            for name in hotkeys.actions().iter() {
                println!("{}", name);
            }
        }
        CliCommand::Bindings { global } => {
            let namespace = if global {
                Namespace::Global
            } else {
                Namespace::Local
            };
            let (_bus, hotkeys) = start(&args.config)?;
            for desc in ACTIONS {
                let keys = hotkeys.keys_for(desc.id, namespace);
                if keys.is_empty() {
                    continue;
                }
                let keys: Vec<String> = keys.into_iter().map(describe).collect();
                println!("{:<20}{}", desc.name, keys.join(", "));
            }
        }
        CliCommand::Resolve { key, global } => {
            let namespace = if global {
                Namespace::Global
            } else {
                Namespace::Local
            };
            let code = parse_key_string(&key).with_context(|| format!("\"{}\"", key))?;
            let (bus, _hotkeys) = start(&args.config)?;

            dispatch::press(bus.as_ref(), namespace, code);

            let raw = bus.get_integer(KEY_ACTION).unwrap_or_default();
            let action = u32::try_from(raw)
                .ok()
                .and_then(ActionId::from_raw)
                .unwrap_or_default();
            if action.is_none() {
                bail!("{} is not bound in the {} namespace", describe(code), namespace);
            }
            println!("{}", action);
        }
        CliCommand::Defaults => {
            print!("{}", get_default_hotkeys_yaml());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    hotkeys::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!("{:?}", args);
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_explicit_file_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.yaml");
        std::fs::write(&path, "key-quit: Ctrl+w\nkey-zoom-half: 1\n").unwrap();

        let args = ConfigArgs {
            config: Some(path),
            no_defaults: false,
            no_user: true,
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.get("key-quit"), Some("Ctrl+w"));
        assert_eq!(config.get("key-zoom-half"), Some("1"));
        assert_eq!(
            config.get("key-play-pause"),
            default_config().get("key-play-pause")
        );
    }

    #[test]
    fn test_load_config_without_any_layer() {
        let args = ConfigArgs {
            config: None,
            no_defaults: true,
            no_user: true,
        };
        assert!(load_config(&args).unwrap().is_empty());
    }

    #[test]
    fn test_load_config_missing_explicit_file_fails() {
        let dir = tempdir().unwrap();
        let args = ConfigArgs {
            config: Some(dir.path().join("absent.yaml")),
            no_defaults: true,
            no_user: true,
        };
        assert!(load_config(&args).is_err());
    }
}
