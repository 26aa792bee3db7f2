use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use smade_blocks::{BlockConfig, BlockConfigPaths};
use smade_blueprint::{Header, Meta, HEADER_FILE_NAME, META_FILE_NAME};

mod report;

#[derive(Parser)]
#[command(
    name = "blueprint-info",
    version,
    about = "Print the header summary of a StarMade blueprint"
)]
struct Cli {
    /// Blueprint directory, or a header file inside one.
    #[arg(value_name = "PATH_TO_BLUEPRINT")]
    blueprint: PathBuf,
    /// Game installation directory; resolves block ids to names.
    #[arg(long, env = "STARMADE_HOME", value_name = "DIR")]
    starmade: Option<PathBuf>,
    /// Also summarize the metadata record, when the blueprint has one.
    #[arg(long)]
    meta: bool,
}

/// Locate the header file and its blueprint directory.
fn resolve_header(path: &Path) -> Result<(PathBuf, PathBuf)> {
    if path.is_file() {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        return Ok((dir, path.to_path_buf()));
    }
    if path.is_dir() {
        return Ok((path.to_path_buf(), path.join(HEADER_FILE_NAME)));
    }
    bail!("blueprint not found: {}", path.display())
}

fn load_blocks(game_root: &Path) -> Result<BlockConfig> {
    let paths = BlockConfigPaths::from_game_root(game_root);
    let blocks = BlockConfig::load(&paths)
        .with_context(|| format!("failed to load block config from {}", game_root.display()))?;
    eprintln!(
        "[blocks] loaded {} block types from {}",
        blocks.len(),
        paths.xml.display()
    );
    Ok(blocks)
}

fn load_meta(dir: &Path) -> Result<Option<Meta>> {
    let path = dir.join(META_FILE_NAME);
    if !path.is_file() {
        eprintln!("[meta] no {} in {}", META_FILE_NAME, dir.display());
        return Ok(None);
    }
    let meta =
        Meta::load(&path).with_context(|| format!("failed to read meta: {}", path.display()))?;
    Ok(Some(meta))
}

fn run(cli: &Cli) -> Result<()> {
    let (dir, header_path) = resolve_header(&cli.blueprint)?;
    let header = Header::load(&header_path)
        .with_context(|| format!("failed to read header: {}", header_path.display()))?;

    let blocks = cli.starmade.as_deref().map(load_blocks).transpose()?;
    let meta = if cli.meta { load_meta(&dir)? } else { None };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_header_report(&mut out, &dir, &header, blocks.as_ref())?;
    if cli.meta {
        report::write_meta_report(&mut out, meta.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
