//! Polling watcher that hot-reloads word lists when their files change.

use std::path::Path;
use std::sync::{Arc, Weak};
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tracing::debug;

use super::{Category, WordListProvider};

const CATEGORIES: [Category; 2] = [Category::Adjectives, Category::Animals];

/// Modification time and size of a category file; `None` when it is absent.
/// Size is included because mtime granularity can be a full second on some
/// filesystems.
type FileStamp = Option<(SystemTime, u64)>;

/// Spawn a background task that polls the provider's word-list files and
/// reloads a category when its file is created, modified, or removed.
///
/// The task holds only a weak reference to the provider and exits once the
/// provider is dropped. Returns `None` for a builtin provider, which has no
/// files to watch. Must be called from within a tokio runtime.
pub fn watch(provider: &Arc<WordListProvider>, interval: Duration) -> Option<JoinHandle<()>> {
    let dir = provider.resources_dir()?.to_path_buf();
    let weak = Arc::downgrade(provider);
    Some(tokio::spawn(async move {
        poll_loop(weak, &dir, interval).await;
    }))
}

async fn poll_loop(provider: Weak<WordListProvider>, dir: &Path, interval: Duration) {
    let mut stamps = CATEGORIES.map(|category| file_stamp(dir, category));
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        let Some(provider) = provider.upgrade() else {
            debug!("word-list provider dropped, stopping watcher");
            break;
        };
        for (stamp, category) in stamps.iter_mut().zip(CATEGORIES) {
            let current = file_stamp(dir, category);
            if current != *stamp {
                debug!("{} changed on disk, reloading", category.file_name());
                provider.reload_category(category);
                *stamp = current;
            }
        }
    }
}

fn file_stamp(dir: &Path, category: Category) -> FileStamp {
    let meta = std::fs::metadata(dir.join(category.file_name())).ok()?;
    Some((meta.modified().ok()?, meta.len()))
}
