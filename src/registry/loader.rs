//! Bulk loading of descriptor files from a directory.
//!
//! Each `.json` file in the directory (non-recursive) holds one descriptor.
//! Files are parsed and validated independently; a failure is recorded in
//! the [`LoadReport`] and never stops the rest of the batch.

use super::RegistryStore;
use crate::descriptor::{
    AgentCard, AgentCardDocument, DescriptorError, McpServer, McpServerDocument,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::de::DeserializeOwned;
use std::io;
use thiserror::Error;
use tracing::{error, info, warn};

const DESCRIPTOR_EXTENSION: &str = "json";

/// Reason a single descriptor file was skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file or directory could not be read.
    #[error("failed to read descriptor: {0}")]
    Read(#[from] io::Error),
    /// The file is not well-formed JSON for the descriptor shape.
    #[error("failed to parse descriptor: {0}")]
    Parse(#[from] serde_json::Error),
    /// The descriptor violates a structural invariant.
    #[error("invalid descriptor: {0}")]
    Validation(#[from] DescriptorError),
}

/// A file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    file: Utf8PathBuf,
    error: LoadError,
}

impl LoadFailure {
    /// Returns the offending file.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// Returns the reason the file was skipped.
    #[must_use]
    pub const fn error(&self) -> &LoadError {
        &self.error
    }
}

/// Outcome of loading one descriptor directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    loaded: usize,
    failures: Vec<LoadFailure>,
    directory_missing: bool,
}

impl LoadReport {
    /// Returns the number of descriptors registered.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.loaded
    }

    /// Returns every file that was skipped.
    #[must_use]
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Returns whether the directory did not exist.
    #[must_use]
    pub const fn directory_missing(&self) -> bool {
        self.directory_missing
    }

    fn missing() -> Self {
        Self {
            directory_missing: true,
            ..Self::default()
        }
    }

    fn record_failure(&mut self, file: Utf8PathBuf, error: LoadError) {
        error!(file = %file, error = %error, "failed to load descriptor");
        self.failures.push(LoadFailure { file, error });
    }
}

impl RegistryStore {
    /// Loads every agent card file in `directory`, keyed by `name:version`.
    pub fn load_agent_cards_from_directory(&self, directory: &Utf8Path) -> LoadReport {
        load_directory::<AgentCardDocument, AgentCard>(directory, "agent card", |card| {
            self.register_agent_card(card.storage_key(), card);
        })
    }

    /// Loads every MCP server file in `directory`, keyed by `id:version`.
    pub fn load_mcp_servers_from_directory(&self, directory: &Utf8Path) -> LoadReport {
        load_directory::<McpServerDocument, McpServer>(directory, "MCP server", |server| {
            self.register_mcp_server(server.composite_key(), server);
        })
    }
}

fn load_directory<D, T>(
    directory: &Utf8Path,
    kind: &'static str,
    mut register: impl FnMut(T),
) -> LoadReport
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = DescriptorError>,
{
    info!(directory = %directory, kind, "loading descriptors");
    let dir = match Dir::open_ambient_dir(directory, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(directory = %directory, kind, "descriptor directory does not exist");
            return LoadReport::missing();
        }
        Err(err) => {
            let mut report = LoadReport::default();
            report.record_failure(directory.to_owned(), LoadError::Read(err));
            return report;
        }
    };

    let mut report = LoadReport::default();
    let file_names = match descriptor_file_names(&dir, directory, &mut report) {
        Ok(names) => names,
        Err(err) => {
            report.record_failure(directory.to_owned(), LoadError::Read(err));
            return report;
        }
    };

    for file_name in file_names {
        let path = directory.join(&file_name);
        match read_descriptor::<D, T>(&dir, &file_name) {
            Ok(descriptor) => {
                register(descriptor);
                report.loaded += 1;
                info!(file = %path, kind, "loaded descriptor");
            }
            Err(err) => report.record_failure(path, err),
        }
    }

    info!(
        directory = %directory,
        kind,
        loaded = report.loaded,
        failed = report.failures.len(),
        "finished loading descriptors"
    );
    report
}

/// Lists descriptor file names in name order so loads are reproducible.
///
/// Only an unreadable directory fails the listing. An entry whose name or
/// type cannot be read is recorded in `report` and skipped.
fn descriptor_file_names(
    dir: &Dir,
    directory: &Utf8Path,
    report: &mut LoadReport,
) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in dir.entries()? {
        let name = match entry.and_then(|dir_entry| {
            let entry_name = dir_entry.file_name()?;
            Ok((dir_entry.file_type()?.is_file(), entry_name))
        }) {
            Ok((true, entry_name)) => entry_name,
            Ok((false, _)) => continue,
            Err(err) => {
                report.record_failure(directory.to_owned(), LoadError::Read(err));
                continue;
            }
        };
        if Utf8Path::new(&name).extension() == Some(DESCRIPTOR_EXTENSION) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn read_descriptor<D, T>(dir: &Dir, file_name: &str) -> Result<T, LoadError>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = DescriptorError>,
{
    let text = dir.read_to_string(file_name)?;
    let document: D = serde_json::from_str(&text)?;
    Ok(T::try_from(document)?)
}
