use clap::Parser;
use std::path::PathBuf;

pub const LONG_VERSION: &str = concat!(
    "version: ", env!("CARGO_PKG_VERSION"), "\n",
    "git sha: ", env!("GCO_GIT_SHA"), "\n",
    "build time (UTC): ", env!("GCO_BUILD_TIME"), "\n",
    "target: ", env!("GCO_TARGET")
);

#[derive(Parser, Debug)]
#[command(
    name = "git-credential-op",
    about = "Git credential helper backed by the 1Password CLI",
    disable_version_flag = true
)]
pub struct Cli {
    /// Operation requested by git (get, store or erase); anything else is ignored
    pub operation: Option<String>,
    /// 1Password account to use when more than one is signed in
    #[arg(long)]
    pub account: Option<String>,
    /// Vault to search and store credentials in (default: all vaults)
    #[arg(long)]
    pub vault: Option<String>,
    /// Path to the `op` executable (default: search PATH)
    #[arg(long, value_name = "PATH")]
    pub op_path: Option<PathBuf>,
    /// 1Password CLI configuration directory
    #[arg(long, value_name = "DIR")]
    pub op_config: Option<PathBuf>,
    /// Named profile from config.toml
    #[arg(long)]
    pub profile: Option<String>,
    /// Print helper and 1Password CLI versions
    #[arg(long)]
    pub version: bool,
}
