//! Isolated test environment with temp directory.

use super::{HoardCommand, TestExport};
use hoard::store::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary home and store file.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands run with `HOME` pointed at it, so no user config is read.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Root of the environment
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the root of the environment.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the store file used by `cmd()`.
    pub fn store_path(&self) -> PathBuf {
        self.root.join("data").join("notes.hoard")
    }

    /// Writes an export document and returns its path.
    pub fn write_export(&self, name: &str, export: &TestExport) -> PathBuf {
        self.write_file(name, export.to_xml().as_bytes())
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Loads the store file written by the CLI.
    pub fn load_store(&self) -> NoteStore {
        let bytes = std::fs::read(self.store_path()).expect("Failed to read store file");
        NoteStore::import_blob(&bytes).expect("Store file should be a valid snapshot")
    }

    /// Creates a HoardCommand configured for this test environment.
    pub fn cmd(&self) -> HoardCommand {
        HoardCommand::new()
            .home(&self.root)
            .store(&self.store_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_store_path_inside_root() {
        let env = TestEnv::new();
        assert!(env.store_path().starts_with(env.root()));
        assert!(!env.store_path().exists(), "store is created lazily");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--store");
        assert_eq!(args[1], env.store_path().to_string_lossy());
    }
}
