use crate::api::InvApi;
use crate::audit::FileAuditLog;
use crate::config::{InvConfig, CONFIG_DIRNAME};
use crate::inventory::Inventory;
use crate::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct InvContext {
    pub api: InvApi<FileStore, FileAuditLog>,
    pub config: InvConfig,
    pub data_file: PathBuf,
    pub audit_log: PathBuf,
}

/// Paths given on the command line take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct PathOverrides {
    pub data_file: Option<PathBuf>,
    pub audit_log: Option<PathBuf>,
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn initialize(cwd: &Path, overrides: PathOverrides) -> InvContext {
    let config_dir = cwd.join(CONFIG_DIRNAME);
    let config = InvConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        InvConfig::default()
    });

    let data_file = resolve(
        cwd,
        &overrides
            .data_file
            .unwrap_or_else(|| PathBuf::from(&config.data_file)),
    );
    let audit_log = resolve(
        cwd,
        &overrides
            .audit_log
            .unwrap_or_else(|| PathBuf::from(&config.audit_log)),
    );
    debug!(data_file = %data_file.display(), audit_log = %audit_log.display(), "resolved paths");

    let inventory = Inventory::open(FileStore::new(&data_file), FileAuditLog::new(&audit_log));
    let api = InvApi::new(inventory, config_dir);

    InvContext {
        api,
        config,
        data_file,
        audit_log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_under_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = initialize(dir.path(), PathOverrides::default());
        assert_eq!(ctx.data_file, dir.path().join("data/inventory.json"));
        assert_eq!(ctx.audit_log, dir.path().join("logs/deletion.log"));
        assert_eq!(ctx.api.config_dir(), dir.path().join(".invtrack"));
    }

    #[test]
    fn config_file_paths_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = InvConfig::default();
        config.set("data-file", "stock/items.json").unwrap();
        config.save(dir.path().join(CONFIG_DIRNAME)).unwrap();

        let ctx = initialize(dir.path(), PathOverrides::default());
        assert_eq!(ctx.data_file, dir.path().join("stock/items.json"));
    }

    #[test]
    fn overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("elsewhere.json");
        let ctx = initialize(
            dir.path(),
            PathOverrides {
                data_file: Some(absolute.clone()),
                audit_log: Some(PathBuf::from("audit.log")),
            },
        );
        assert_eq!(ctx.data_file, absolute);
        assert_eq!(ctx.audit_log, dir.path().join("audit.log"));
    }
}
