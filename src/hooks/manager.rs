// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{CmcError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::for_dir(repo.git_dir().join("hooks"))
    }

    /// Create a hook manager for a specific hooks directory.
    pub fn for_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                CmcError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = parse_hook(hook_name)?;
        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    /// Install a hook from a template.
    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if hook_path.exists() && !self.is_cmc_hook(&hook_path)? {
            if !force {
                return Err(CmcError::Hook(HookError::AlreadyExists {
                    hook: template.filename().to_string(),
                }));
            }

            fs::rename(&hook_path, &backup_path).map_err(|e| {
                CmcError::Hook(HookError::InstallFailed {
                    hook: template.filename().to_string(),
                    message: format!("Failed to backup existing hook: {}", e),
                })
            })?;
        }

        tracing::debug!("Writing hook to {:?}", hook_path);
        fs::write(&hook_path, template.generate()).map_err(|e| {
            CmcError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        make_executable(&hook_path).map_err(|e| {
            CmcError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to set permissions: {}", e),
            })
        })?;

        Ok(())
    }

    /// Uninstall a specific hook.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = parse_hook(hook_name)?;

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(()); // Nothing to uninstall
        }

        if !self.is_cmc_hook(&hook_path)? {
            return Err(CmcError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by cmc".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            CmcError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                CmcError::Hook(HookError::RemoveFailed {
                    hook: hook_name.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Get the status of all hooks.
    pub fn status(&self) -> Result<Vec<(String, bool)>> {
        let mut status = Vec::new();

        for template in HookTemplate::all() {
            let hook_path = self.hooks_dir.join(template.filename());
            let installed = hook_path.exists() && self.is_cmc_hook(&hook_path)?;
            status.push((template.filename().to_string(), installed));
        }

        Ok(status)
    }

    /// Check if a hook was installed by cmc.
    fn is_cmc_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).unwrap_or_default();
        Ok(content.contains(HOOK_MARKER))
    }
}

fn parse_hook(hook_name: &str) -> Result<HookTemplate> {
    hook_name.parse::<HookTemplate>().map_err(|_| {
        CmcError::Hook(HookError::NotFound {
            hook: hook_name.to_string(),
        })
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
