//! Caller-supplied fare series loaded from JSON fixture files.
//!
//! Fixtures live in a single directory as `<name>.json`, each holding a
//! [`FareSeries`] in its JSON object form. Parsed series are kept in memory and
//! handed out as `Rc<FareSeries>`, so views built from the same fixture share
//! one instance.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::{self, FIXTURE_EXTENSION};
use crate::error::{FareCalendarError, Result};
use crate::models::FareSeries;

/// Loads and memoizes fare series fixtures from a directory.
pub struct FixtureStore {
    /// Directory the fixtures are read from.
    pub fixture_dir: PathBuf,
    loaded: HashMap<String, Rc<FareSeries>>,
}

impl FixtureStore {
    pub fn new<P: Into<PathBuf>>(fixture_dir: P) -> Self {
        Self {
            fixture_dir: fixture_dir.into(),
            loaded: HashMap::new(),
        }
    }

    /// Local filesystem path of the fixture called `name`.
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        config::fixture_path(&self.fixture_dir, name)
    }

    /// True if the fixture is already in memory or present on disk.
    pub fn exists(&self, name: &str) -> bool {
        self.loaded.contains_key(name) || self.fixture_path(name).exists()
    }

    /// Load a fixture, reading and validating it on first access.
    ///
    /// Fails with [`FareCalendarError::NotFound`] if no such file exists, and
    /// with the decoding or validation error if its content is not a valid series.
    pub fn load(&mut self, name: &str) -> Result<Rc<FareSeries>> {
        if let Some(series) = self.loaded.get(name) {
            return Ok(Rc::clone(series));
        }

        let path = self.fixture_path(name);
        if !path.exists() {
            return Err(FareCalendarError::NotFound(format!(
                "Fare fixture '{}' not found in {}",
                name,
                self.fixture_dir.display()
            )));
        }

        let contents = fs::read_to_string(&path)?;
        let series = match FareSeries::from_json_str(&contents) {
            Ok(series) => Rc::new(series),
            Err(e) => {
                log::warn!("Rejected fare fixture {}: {}", path.display(), e);
                return Err(e);
            }
        };

        log::debug!("Loaded fare fixture {} ({} days)", name, series.len());
        self.loaded.insert(name.to_string(), Rc::clone(&series));
        Ok(series)
    }

    /// Register an in-memory series under `name`, replacing any loaded one.
    pub fn insert(&mut self, name: &str, series: FareSeries) -> Rc<FareSeries> {
        let series = Rc::new(series);
        self.loaded.insert(name.to_string(), Rc::clone(&series));
        series
    }

    /// Names of the fixture files on disk, sorted.
    pub fn available(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.fixture_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FIXTURE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Names of the series currently held in memory, sorted.
    pub fn loaded(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loaded.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every in-memory series. Outstanding `Rc`s stay valid.
    pub fn clear(&mut self) {
        self.loaded.clear();
    }
}
