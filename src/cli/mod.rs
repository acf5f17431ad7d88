#![allow(clippy::module_inception)]
use crate::config::app_config::{Config, ConfigOverrides};
use crate::core::adapters::OpCli;
use crate::core::service::{CredentialHelper, Operation};
use crate::credential::attributes::AttributeRecord;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};
use tracing::debug;

mod cli;

pub use cli::{Cli, LONG_VERSION};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with(cli, io::stdin().lock(), io::stdout().lock())
}

/// Executes one helper invocation, reading attributes from `input` and
/// writing any answer to `output`.
pub fn run_with<R: Read, W: Write>(cli: Cli, input: R, mut output: W) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        account: cli.account,
        vault: cli.vault,
        op_path: cli.op_path,
        op_config: cli.op_config,
        profile: cli.profile,
    };

    if cli.version {
        let config = Config::create(overrides).context("failed to load configuration")?;
        return print_version(&config, &mut output);
    }

    let Some(operation) = cli.operation.as_deref().map(Operation::from) else {
        debug!("no operation given");
        return Ok(());
    };

    let attrs = AttributeRecord::read_from(input).context("failed to read credential attributes")?;
    // Non-https requests never look at configuration.
    if !attrs.is_https() {
        debug!(protocol = ?attrs.protocol, "ignoring non-https request");
        return Ok(());
    }

    let config = Config::create(overrides).context("failed to load configuration")?;
    let helper = CredentialHelper::create(&config);
    if let Some(answer) = helper.run(&operation, attrs)? {
        output.write_all(answer.serialize().as_bytes())?;
        output.flush()?;
    }
    Ok(())
}

fn print_version<W: Write>(config: &Config, output: &mut W) -> anyhow::Result<()> {
    writeln!(output, "git-credential-op {LONG_VERSION}")?;
    match OpCli::from_config(config).version() {
        Ok(v) => writeln!(output, "op version {v}")?,
        Err(e) => eprintln!("unable to read op version: {e}"),
    }
    Ok(())
}
