//! One-shot command-line search.

use std::io::BufRead;
use std::path::Path;

use tracing::info;

use crate::config::{AppConfig, ConfigError};
use crate::data::{Catalog, DataError};
use crate::input::{InputError, read_search_file, read_search_input};
use crate::output::{OutputError, render};
use crate::planner::{SearchError, SearchRequest};

/// Any failure of a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Read one request from `reader`, search `catalog`, and render the result
/// document.
pub fn run_once<R: BufRead>(
    catalog: &Catalog,
    config: &AppConfig,
    reader: R,
) -> Result<String, CliError> {
    let request = read_search_input(reader)?;
    run_request(catalog, config, &request)
}

/// Like [`run_once`], reading the request from the file at `path`.
pub fn run_file(
    catalog: &Catalog,
    config: &AppConfig,
    path: impl AsRef<Path>,
) -> Result<String, CliError> {
    let request = read_search_file(path)?;
    run_request(catalog, config, &request)
}

/// Search `catalog` for `request` and render the result document.
pub fn run_request(
    catalog: &Catalog,
    config: &AppConfig,
    request: &SearchRequest,
) -> Result<String, CliError> {
    let result = catalog.planner(&config.search).search(request)?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        criterion = %request.criterion,
        candidates = result.candidates,
        found = result.best().is_some(),
        "search finished"
    );

    let document = render(
        &result.routes,
        &catalog.rates,
        config.output_format,
        config.return_multiple_routes,
    )?;
    Ok(document)
}
