//! Test helpers for writing session files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::session::Operation;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary directory holding a `session.json` file.
pub(super) struct SessionWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    session_path: Utf8PathBuf,
}

impl SessionWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let session_path = root.join("session.json");
        Self {
            _dir: dir,
            root,
            session_path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn session_path(&self) -> &Utf8Path {
        &self.session_path
    }

    pub(super) fn write_operations(&self, operations: &[Operation]) {
        let payload = serde_json::to_string_pretty(operations).expect("serialise session");
        write_utf8(&self.session_path, payload.as_bytes());
    }

    pub(super) fn write_raw(&self, contents: &[u8]) {
        write_utf8(&self.session_path, contents);
    }
}
