use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::args::CliArgs;
use vgen_codegen::CodegenOptions;

pub const CONFIG_FILE_NAME: &str = "vgen.json";

/// Contents of a `vgen.json` file.
///
/// Codegen options sit at the top level under their camelCase names:
///
/// ```json
/// { "mode": "module", "prefixIdentifiers": true, "outDir": "dist" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VgenConfig {
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(flatten)]
    pub codegen: CodegenOptions,
}

pub fn parse_config(source: &str) -> Result<VgenConfig> {
    let config = serde_json::from_str(source).context("failed to parse vgen config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<VgenConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// `vgen.json` in `dir`, if one exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Resolved settings for one run: config file values with command-line
/// flags applied on top.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub codegen: CodegenOptions,
    pub out_dir: Option<PathBuf>,
}

pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let config_path = match &args.config {
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    let (config, base_dir) = match config_path {
        Some(path) => {
            let config = load_config(&path)?;
            let base_dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
            (config, base_dir)
        }
        None => (VgenConfig::default(), cwd.to_path_buf()),
    };

    let mut codegen = config.codegen;
    if let Some(mode) = args.mode {
        codegen.mode = mode.to_codegen_mode();
    }
    codegen.prefix_identifiers = toggle(
        codegen.prefix_identifiers,
        args.prefix_identifiers,
        args.no_prefix_identifiers,
    );
    codegen.optimize_bindings = toggle(
        codegen.optimize_bindings,
        args.optimize_bindings,
        args.no_optimize_bindings,
    );
    codegen.ssr = toggle(codegen.ssr, args.ssr, args.no_ssr);
    if let Some(scope_id) = &args.scope_id {
        codegen.scope_id = Some(scope_id.clone());
    }

    // Command-line paths are relative to the working directory, config paths
    // to the config file.
    let out_dir = match (&args.out_dir, config.out_dir) {
        (Some(dir), _) => Some(cwd.join(dir)),
        (None, Some(dir)) => Some(base_dir.join(dir)),
        (None, None) => None,
    };

    Ok(ResolvedConfig { codegen, out_dir })
}

/// Config value overridden by an `--x` / `--no-x` flag pair.
const fn toggle(config: bool, on: bool, off: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        config
    }
}
