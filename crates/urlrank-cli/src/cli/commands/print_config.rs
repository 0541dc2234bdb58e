//! `urlrank config` – show the effective configuration.

use anyhow::Result;
use urlrank_core::config::{self, RankConfig};

pub fn run_print_config(cfg: &RankConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("# user config: {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
