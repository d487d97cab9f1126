use crate::core::patterns::ActionPatterns;
use crate::core::walker::find_files;
use crate::domain::model::{Action, Manifest};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Turns a directory of headers into a [`Manifest`].
///
/// Unreadable files are logged and skipped; files without a declaration are
/// skipped silently. Nothing a single file does can fail the scan.
pub struct ManifestBuilder<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    patterns: ActionPatterns,
}

impl<S: Storage, C: ConfigProvider> ManifestBuilder<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let patterns = ActionPatterns::from_config(&config)?;
        Ok(Self {
            storage,
            config,
            patterns,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn parse_file(&self, path: &Path) -> Option<Action> {
        let content = match self.storage.read_file(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Skipping unreadable file: {}", e);
                return None;
            }
        };

        let action = self.patterns.parse_source(&content);
        if let Some(action) = &action {
            tracing::debug!(
                "{}: action {} ({} inputs, {} outputs)",
                path.display(),
                action.name,
                action.inputs.len(),
                action.outputs.len()
            );
        }
        action
    }

    pub fn parse_files<I, P>(&self, paths: I) -> Vec<Action>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .filter_map(|path| self.parse_file(path.as_ref()))
            .collect()
    }

    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        find_files(root, self.config.extensions())
    }

    pub fn parse_directory(&self, root: &Path) -> Vec<Action> {
        self.parse_files(self.discover(root))
    }

    pub fn scan(&self, root: &Path) -> Manifest {
        Manifest::new(self.parse_directory(root))
    }

    /// Serializes `manifest` and, when `output` is given, writes it there.
    ///
    /// A failed write is logged, not returned: the JSON text comes back
    /// either way. Only serialization itself can fail.
    pub fn generate_json(&self, manifest: &Manifest, output: Option<&Path>) -> Result<String> {
        let json = manifest.to_json()?;

        if let Some(output) = output {
            match self.storage.write_file(output, json.as_bytes()) {
                Ok(()) => tracing::info!("Actions JSON written to {}", output.display()),
                Err(e) => tracing::error!("Manifest not persisted: {}", e),
            }
        }

        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::domain::model::Field;
    use crate::utils::error::ScanError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    #[derive(Default)]
    struct MockStorage {
        files: HashMap<PathBuf, String>,
        written: RefCell<HashMap<PathBuf, Vec<u8>>>,
        fail_writes: bool,
    }

    impl MockStorage {
        fn with_file(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }

        fn written(&self, path: &str) -> Option<Vec<u8>> {
            self.written.borrow().get(Path::new(path)).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &Path) -> Result<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ScanError::ReadError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                })
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(ScanError::WriteError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::PermissionDenied,
                        "read-only",
                    ),
                });
            }
            self.written
                .borrow_mut()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    const MOVE_ACTION: &str = "struct MoveAction : public IAction {\n    Vector3 target; IN();\n    bool success; OUT();\n};\n";

    #[test]
    fn test_parse_files_skips_unreadable_and_plain_headers() {
        let storage = MockStorage::default()
            .with_file("move.h", MOVE_ACTION)
            .with_file("math.h", "struct Vector3 { float x, y, z; };");
        let builder = ManifestBuilder::new(storage, ScanConfig::default()).unwrap();

        let actions = builder.parse_files(["missing.h", "math.h", "move.h"]);

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "MoveAction");
        assert_eq!(actions[0].inputs, vec![Field::new("target", "Vector3")]);
    }

    #[test]
    fn test_unreadable_file_is_reported_once_by_path() {
        let storage = MockStorage::default()
            .with_file("math.h", "struct Vector3 { float x, y, z; };")
            .with_file("move.h", MOVE_ACTION);
        let builder = ManifestBuilder::new(storage, ScanConfig::default()).unwrap();

        let (actions, logs) =
            capture_logs(|| builder.parse_files(["missing.h", "math.h", "move.h"]));

        assert_eq!(actions.len(), 1);
        assert!(logs.contains("ERROR"));
        assert_eq!(logs.matches("missing.h").count(), 1);
        assert!(logs.contains("no such file"));
        // Headers without a declaration are skipped silently.
        assert!(!logs.contains("math.h"));
    }

    #[test]
    fn test_parse_files_preserves_input_order() {
        let storage = MockStorage::default()
            .with_file("b.h", "struct B : IAction {};")
            .with_file("a.h", "struct A : IAction {};");
        let builder = ManifestBuilder::new(storage, ScanConfig::default()).unwrap();

        let names: Vec<String> = builder
            .parse_files(["b.h", "a.h"])
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_generate_json_writes_output() {
        let storage = MockStorage::default().with_file("move.h", MOVE_ACTION);
        let builder = ManifestBuilder::new(storage, ScanConfig::default()).unwrap();
        let manifest = Manifest::new(builder.parse_files(["move.h"]));

        let json = builder
            .generate_json(&manifest, Some(Path::new("out/actions.json")))
            .unwrap();

        let written = builder.storage.written("out/actions.json").unwrap();
        assert_eq!(written, json.as_bytes());
        assert_eq!(Manifest::from_json(&json).unwrap(), manifest);
    }

    #[test]
    fn test_generate_json_without_output_writes_nothing() {
        let builder = ManifestBuilder::new(MockStorage::default(), ScanConfig::default()).unwrap();

        let json = builder.generate_json(&Manifest::new(vec![]), None).unwrap();

        assert!(json.contains("\"count\": 0"));
        assert!(builder.storage.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_json_returns_text_when_write_fails() {
        let storage = MockStorage {
            fail_writes: true,
            ..MockStorage::default()
        }
        .with_file("move.h", MOVE_ACTION);
        let builder = ManifestBuilder::new(storage, ScanConfig::default()).unwrap();
        let manifest = Manifest::new(builder.parse_files(["move.h"]));

        let json = builder
            .generate_json(&manifest, Some(Path::new("/read-only/actions.json")))
            .unwrap();

        assert!(json.contains("MoveAction"));
        assert!(builder.storage.written("/read-only/actions.json").is_none());
    }

    #[test]
    fn test_custom_markers_from_config() {
        let config = ScanConfig::from_toml_str(
            "[markers]\naction = \"ICommand\"\ninput = \"ARG\"\noutput = \"RET\"\n",
        )
        .unwrap();
        let storage = MockStorage::default()
            .with_file("cmd.h", "class Save : ICommand {\n  Path file; ARG();\n  bool ok; RET();\n};")
            .with_file("move.h", MOVE_ACTION);
        let builder = ManifestBuilder::new(storage, config).unwrap();

        let actions = builder.parse_files(["cmd.h", "move.h"]);

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "Save");
        assert_eq!(actions[0].inputs, vec![Field::new("file", "Path")]);
        assert_eq!(actions[0].outputs, vec![Field::new("ok", "bool")]);
    }
}
