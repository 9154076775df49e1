use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::args::CliArgs;
use super::config::{ResolvedConfig, resolve_config};
use vgen_codegen::{CodegenOptions, generate_with_registry};
use vgen_ir::{HelperRegistry, RootNode};

/// Generated code for one input file.
#[derive(Debug, Clone)]
pub struct UnitOutput {
    pub input: PathBuf,
    /// Where the code was written, when an output directory is configured.
    pub output: Option<PathBuf>,
    pub code: String,
}

/// Generate every input of `args`. Units are generated in parallel;
/// results come back in input order.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<Vec<UnitOutput>> {
    let ResolvedConfig { codegen, out_dir } = resolve_config(args, cwd)?;
    let registry = HelperRegistry::new();
    info!(
        units = args.inputs.len(),
        mode = %codegen.mode,
        ssr = codegen.ssr,
        "generating render functions"
    );

    let inputs: Vec<PathBuf> = args.inputs.iter().map(|input| cwd.join(input)).collect();
    if let Some(dir) = &out_dir {
        check_output_collisions(dir, &inputs)?;
    }

    let units = inputs
        .par_iter()
        .map(|input| -> Result<UnitOutput> {
            let code = generate_file(input, &codegen, &registry)?;
            Ok(UnitOutput {
                input: input.clone(),
                output: out_dir.as_deref().map(|dir| output_path(dir, input)),
                code,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
        write_outputs(&units)?;
    }
    Ok(units)
}

/// Read one IR file and generate its code.
pub fn generate_file(
    input: &Path,
    options: &CodegenOptions,
    registry: &HelperRegistry,
) -> Result<String> {
    let file =
        File::open(input).with_context(|| format!("failed to read {}", input.display()))?;
    let root = RootNode::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load IR from {}", input.display()))?;
    let result = generate_with_registry(&root, options, registry)
        .with_context(|| format!("failed to generate {}", input.display()))?;
    debug!(
        input = %input.display(),
        bytes = result.code.len(),
        helpers = result.helpers.len(),
        "generated unit"
    );
    Ok(result.code)
}

/// `<out_dir>/<stem>.js`, where the stem drops every extension
/// (`App.ir.json` -> `App.js`).
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    out_dir.join(format!("{stem}.js"))
}

/// Fail when two inputs would write the same output file.
fn check_output_collisions(out_dir: &Path, inputs: &[PathBuf]) -> Result<()> {
    let mut claimed: FxHashMap<PathBuf, &Path> = FxHashMap::default();
    for input in inputs {
        let output = output_path(out_dir, input);
        if let Some(previous) = claimed.get(&output) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                output.display()
            );
        }
        claimed.insert(output, input.as_path());
    }
    Ok(())
}

fn write_outputs(units: &[UnitOutput]) -> Result<()> {
    units.par_iter().try_for_each(|unit| -> Result<()> {
        if let Some(path) = &unit.output {
            std::fs::write(path, &unit.code)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        Ok(())
    })
}

/// Registry contents as an aligned `id  name` table.
pub fn helper_table(registry: &HelperRegistry) -> String {
    let entries = registry.entries();
    let mut table = String::with_capacity(entries.len() * 24);
    for (id, name) in entries {
        let _ = writeln!(table, "{:>5}  {name}", id.0);
    }
    table
}
