use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Config path {0} has no file name")]
    NoFileName(PathBuf),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn is_meaningful(event: &Event, target: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == target)
}

/// Blocks, calling `on_change` each time the file at `config_path` is
/// created, modified or removed. Returns once the watcher shuts down.
pub fn watch_config(config_path: &Path, mut on_change: impl FnMut()) -> Result<(), WatchError> {
    let file_name = config_path
        .file_name()
        .ok_or_else(|| WatchError::NoFileName(config_path.to_path_buf()))?;
    let config_dir = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs_err::create_dir_all(&config_dir)?;
    // events carry absolute paths
    let config_dir = fs_err::canonicalize(&config_dir)?;
    let target = config_dir.join(file_name);

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;
    log::info!("Watching {}", target.display());

    while let Ok(res) = bridge_rx.recv_blocking() {
        match res {
            Ok(event) if is_meaningful(&event, &target) => on_change(),
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};

    #[test]
    fn test_meaningful_events() {
        let target = PathBuf::from("/tmp/lapring/config.toml");
        let other = PathBuf::from("/tmp/lapring/other.toml");

        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(target.clone());
        assert!(is_meaningful(&modify, &target));

        let create = Event::new(EventKind::Create(CreateKind::File)).add_path(target.clone());
        assert!(is_meaningful(&create, &target));

        let access = Event::new(EventKind::Access(AccessKind::Any)).add_path(target.clone());
        assert!(!is_meaningful(&access, &target));

        let elsewhere = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(other);
        assert!(!is_meaningful(&elsewhere, &target));
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(matches!(
            watch_config(Path::new("/"), || {}),
            Err(WatchError::NoFileName(_))
        ));
    }
}
