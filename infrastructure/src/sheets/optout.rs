//! Opt-out sheet exclusion source
//!
//! Reads the opt-out form responses as CSV, either from a published-sheet
//! URL or from a local file. Row 1 is the header; the identity lives in a
//! fixed column (column 3 in the original form layout: timestamp, email,
//! username). The parser is deliberately naive - the username column never
//! contains commas or quotes.

use async_trait::async_trait;
use roulette_application::{ExclusionSource, SourceError};
use roulette_domain::ExclusionSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Default zero-based column of the identity in the form responses
const DEFAULT_IDENTITY_COLUMN: usize = 2;

enum Location {
    Url(String),
    File(PathBuf),
}

/// Exclusion source backed by the opt-out sheet's CSV export
pub struct OptOutSheetSource {
    location: Location,
    identity_column: usize,
}

impl OptOutSheetSource {
    /// Read from a published-sheet CSV URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            location: Location::Url(url.into()),
            identity_column: DEFAULT_IDENTITY_COLUMN,
        }
    }

    /// Read from a local CSV file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
            identity_column: DEFAULT_IDENTITY_COLUMN,
        }
    }

    /// Override which column holds the identity
    pub fn with_identity_column(mut self, column: usize) -> Self {
        self.identity_column = column;
        self
    }

    async fn read_csv(&self) -> Result<String, SourceError> {
        match &self.location {
            Location::Url(url) => {
                info!(url = %url, "fetching opt-out sheet");
                let response = reqwest::get(url)
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| SourceError::Unavailable(e.to_string()))?;
                response
                    .text()
                    .await
                    .map_err(|e| SourceError::Unavailable(e.to_string()))
            }
            Location::File(path) => {
                info!(path = %path.display(), "reading opt-out file");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| SourceError::Unavailable(format!("{}: {e}", path.display())))
            }
        }
    }
}

#[async_trait]
impl ExclusionSource for OptOutSheetSource {
    async fn fetch_exclusions(&self) -> Result<ExclusionSet, SourceError> {
        let csv = self.read_csv().await?;
        parse_optout_rows(&csv, self.identity_column)
    }
}

/// Parse opt-out rows: skip the header, take the identity column of each
/// non-empty row.
fn parse_optout_rows(csv: &str, column: usize) -> Result<ExclusionSet, SourceError> {
    let mut identities = Vec::new();
    for (line_no, line) in csv.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let cell = line.split(',').nth(column).map(str::trim).ok_or_else(|| {
            SourceError::Malformed(format!(
                "row {} has no column {}: {line:?}",
                line_no + 1,
                column + 1
            ))
        })?;
        if cell.is_empty() {
            return Err(SourceError::Malformed(format!(
                "row {} has an empty identity",
                line_no + 1
            )));
        }
        debug!(identity = cell, "opt-out row");
        identities.push(cell.to_string());
    }
    Ok(identities.into_iter().collect())
}
