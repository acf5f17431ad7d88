use crate::config::app_config::Config;
use crate::core::ports::{FieldAssignment, ItemTemplate, VaultClient};
use crate::vault::error::OpError;
use crate::vault::filter::{apply_filters, Filter};
use crate::vault::models::{ItemSummary, VaultItem};
use serde::de::DeserializeOwned;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Where the 1Password installer puts `op` when it is not on `PATH`.
pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/bin";

#[cfg(windows)]
const OP_EXECUTABLE: &str = "op.exe";
#[cfg(not(windows))]
const OP_EXECUTABLE: &str = "op";

// ===== 1Password CLI adapter =====
pub struct OpCli {
    executable: Option<PathBuf>,
    account: Option<String>,
    config_dir: Option<PathBuf>,
}

impl OpCli {
    pub fn new(
        executable: Option<PathBuf>,
        account: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            executable,
            account,
            config_dir,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.op_path.clone(),
            config.account.clone(),
            config.op_config.clone(),
        )
    }

    /// Version reported by `op --version`.
    pub fn version(&self) -> Result<String, OpError> {
        let out = self.exec(vec!["--version".into()])?;
        Ok(String::from_utf8_lossy(&out).trim().to_string())
    }

    fn resolve_executable(&self) -> Result<PathBuf, OpError> {
        match &self.executable {
            Some(p) => Ok(p.clone()),
            None => locate_op().ok_or(OpError::NotFound),
        }
    }

    fn global_args(&self, cmd: &mut Vec<String>) {
        if let Some(account) = self.account.as_deref().filter(|a| !a.is_empty()) {
            cmd.push(format!("--account={account}"));
        }
        if let Some(dir) = &self.config_dir {
            cmd.push(format!("--config={}", dir.display()));
        }
    }

    fn exec(&self, mut cmd: Vec<String>) -> Result<Vec<u8>, OpError> {
        self.global_args(&mut cmd);
        let path = self.resolve_executable()?;
        debug!(op = %path.display(), command = %describe(&cmd), "running op");

        let output = Command::new(&path)
            .args(&cmd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| OpError::Spawn {
                path: path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OpError::Exit {
                command: describe(&cmd),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    fn exec_json<T: DeserializeOwned>(&self, mut cmd: Vec<String>) -> Result<T, OpError> {
        cmd.extend(["--format", "json", "--iso-timestamps"].map(String::from));
        let out = self.exec(cmd)?;
        Ok(serde_json::from_slice(&out)?)
    }
}

impl VaultClient for OpCli {
    fn list_items(&self, filters: &[Filter]) -> Result<Vec<ItemSummary>, OpError> {
        let mut cmd = vec!["item".to_string(), "list".to_string()];
        apply_filters(&mut cmd, filters);
        self.exec_json(cmd)
    }

    fn get_item(&self, id: &str, filters: &[Filter]) -> Result<VaultItem, OpError> {
        let mut cmd = vec!["item".to_string(), "get".to_string(), id.to_string()];
        apply_filters(&mut cmd, filters);
        self.exec_json(cmd)
    }

    fn create_item(
        &self,
        template: &ItemTemplate,
        filters: &[Filter],
    ) -> Result<VaultItem, OpError> {
        let mut cmd = vec![
            "item".to_string(),
            "create".to_string(),
            "--category".to_string(),
            template.category.as_str().to_string(),
            "--title".to_string(),
            template.title.clone(),
        ];
        apply_filters(&mut cmd, filters);
        cmd.extend(template.assignments.iter().map(FieldAssignment::to_arg));
        self.exec_json(cmd)
    }

    fn update_item(
        &self,
        id: &str,
        assignments: &[FieldAssignment],
        filters: &[Filter],
    ) -> Result<(), OpError> {
        let mut cmd = vec!["item".to_string(), "edit".to_string(), id.to_string()];
        apply_filters(&mut cmd, filters);
        cmd.extend(assignments.iter().map(FieldAssignment::to_arg));
        self.exec(cmd).map(|_| ())
    }

    fn archive_item(&self, id: &str, filters: &[Filter]) -> Result<(), OpError> {
        let mut cmd = vec![
            "item".to_string(),
            "delete".to_string(),
            id.to_string(),
            "--archive".to_string(),
        ];
        apply_filters(&mut cmd, filters);
        self.exec(cmd).map(|_| ())
    }
}

/// First `op` on `PATH`, falling back to [`DEFAULT_INSTALL_DIR`].
pub fn locate_op() -> Option<PathBuf> {
    let search = env::var_os("PATH")
        .map(|p| env::split_paths(&p).collect::<Vec<_>>())
        .unwrap_or_default();
    search
        .iter()
        .map(PathBuf::as_path)
        .chain(std::iter::once(Path::new(DEFAULT_INSTALL_DIR)))
        .map(|dir| dir.join(OP_EXECUTABLE))
        .find(|candidate| candidate.is_file())
}

// Assignment arguments carry secrets; only the subcommand is worth logging.
fn describe(cmd: &[String]) -> String {
    cmd.iter()
        .take(2)
        .filter(|a| !a.contains('='))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_keeps_only_the_subcommand() {
        let cmd: Vec<String> = ["item", "edit", "abc", "credential[concealed]=s3cret"]
            .map(String::from)
            .to_vec();
        assert_eq!(describe(&cmd), "item edit");
        assert_eq!(describe(&["--version".to_string()]), "--version");
    }

    #[test]
    fn missing_explicit_executable_fails_to_spawn() {
        let cli = OpCli::new(
            Some(PathBuf::from("/nonexistent/definitely/op")),
            None,
            None,
        );
        match cli.version() {
            Err(OpError::Spawn { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/definitely/op"))
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }
}
