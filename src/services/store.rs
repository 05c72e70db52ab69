use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use super::{digest, module};
use crate::error::{ConjugationError, Result};
use crate::model::ConjugationItem;

/// What to do when an existing module cannot be read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseFailurePolicy {
    #[default]
    Fail,
    /// Discard the unreadable content and start a fresh sequence.
    Reset,
}

/// Snapshot of a module file as it was read.
#[derive(Debug)]
pub struct Loaded {
    pub items: Vec<ConjugationItem>,
    /// Hash of the bytes on disk, `None` if the file did not exist.
    pub hash: Option<String>,
}

pub fn load(path: &Path, policy: ParseFailurePolicy) -> Result<Loaded> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} does not exist yet, starting a new sequence", path.display());
            return Ok(Loaded {
                items: Vec::new(),
                hash: None,
            });
        }
        Err(e) => return Err(ConjugationError::io(path, e)),
    };

    let hash = Some(digest::content_hash(&bytes));

    let parsed = String::from_utf8(bytes)
        .map_err(|e| e.to_string())
        .and_then(|content| module::parse(&content));

    match (parsed, policy) {
        (Ok(items), _) => Ok(Loaded { items, hash }),
        (Err(reason), ParseFailurePolicy::Reset) => {
            warn!(
                "discarding unreadable content of {}: {}",
                path.display(),
                reason
            );
            Ok(Loaded {
                items: Vec::new(),
                hash,
            })
        }
        (Err(reason), ParseFailurePolicy::Fail) => Err(ConjugationError::ModuleParse {
            path: path.to_path_buf(),
            reason,
        }),
    }
}

/// Renders `items` and replaces `path` in one rename.
pub fn save(path: &Path, items: &[ConjugationItem]) -> Result<()> {
    let text = module::render(items)?;
    write_atomic(path, text.as_bytes(), None)
}

/// Appends one record to the module at `path`, returning the new length.
pub fn append(path: &Path, item: ConjugationItem, policy: ParseFailurePolicy) -> Result<usize> {
    let Loaded { mut items, hash } = load(path, policy)?;
    items.push(item);

    let text = module::render(&items)?;
    write_atomic(path, text.as_bytes(), Some(hash.as_deref()))?;

    Ok(items.len())
}

/// Writes through a sibling temp file. When `expected` is given, the current
/// file must still hash to it (or still be absent for `Some(None)`) right
/// before the rename.
fn write_atomic(path: &Path, bytes: &[u8], expected: Option<Option<&str>>) -> Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConjugationError::io(parent, e))?;
        }
    }

    fs::write(&tmp, bytes).map_err(|e| ConjugationError::io(&tmp, e))?;

    if let Some(expected) = expected {
        if current_hash(path)?.as_deref() != expected {
            let _ = fs::remove_file(&tmp);
            return Err(ConjugationError::ConcurrentModification {
                path: path.to_path_buf(),
            });
        }
    }

    fs::rename(&tmp, path).map_err(|e| ConjugationError::io(path, e))?;

    Ok(())
}

fn current_hash(path: &Path) -> Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(digest::content_hash(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConjugationError::io(path, e)),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "conjugation_data.ts".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
