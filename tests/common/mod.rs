//! Common test utilities for Modwrap integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write the five stock fragment files
    pub fn write_default_fragments(&self) {
        self.write_file("utils.js", "var Utils = { trim: function(s) { return s; } };\n");
        self.write_file("text.js", "var TextParser = { parse: function(s) { return s; } };\n");
        self.write_file("data.js", "var DataParser = { parse: function(s) { return s; } };\n");
        self.write_file("parser.js", "var Parser = { parse: function(s) { return s; } };\n");
        self.write_file("runtime.js", "var Runtime = { run: function() {} };\n");
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}
