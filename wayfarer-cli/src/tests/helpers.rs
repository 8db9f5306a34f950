//! Test helpers for composing CLI inputs on disk and stub catalog builders.

use super::*;
use crate::catalog::{CatalogBuilder, CatalogSource};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wayfarer_core::{CatalogProvider, StaticCatalog, test_support::FailingCatalog};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding request, catalog and output files.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn write_request(&self, interests: &[&str], minutes: u32) -> Utf8PathBuf {
        let payload = json!({
            "interests": interests,
            "available_time": minutes,
        });
        self.write("request.json", &payload.to_string())
    }
}

/// Builder that always hands out the same in-memory catalog.
pub(super) struct StaticCatalogBuilder(pub(super) StaticCatalog);

impl CatalogBuilder for StaticCatalogBuilder {
    fn build(&self, _source: &CatalogSource) -> Result<Box<dyn CatalogProvider>, CliError> {
        Ok(Box::new(self.0.clone()))
    }
}

/// Builder whose catalog fails on every read.
pub(super) struct FailingCatalogBuilder;

impl CatalogBuilder for FailingCatalogBuilder {
    fn build(&self, _source: &CatalogSource) -> Result<Box<dyn CatalogProvider>, CliError> {
        Ok(Box::new(FailingCatalog))
    }
}
