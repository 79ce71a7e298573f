use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum StepError {
    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File access for one site directory, addressed by file name.
pub trait SiteFs {
    fn path(&self, name: &str) -> PathBuf;
    fn read_to_string(&self, name: &str) -> Result<String, StepError>;
    fn write(&mut self, name: &str, contents: &str) -> Result<(), StepError>;
}

/// `SiteFs` rooted at a directory on disk.
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SiteFs for DiskFs {
    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_to_string(&self, name: &str) -> Result<String, StepError> {
        let path = self.path(name);
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StepError::InputNotFound(path)
            } else {
                StepError::Read { path, source }
            }
        })
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<(), StepError> {
        let path = self.path(name);
        std::fs::write(&path, contents).map_err(|source| StepError::Write { path, source })
    }
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/gallery-placeholders/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}
