use reqwest::Client;
use rusqlite::Connection;
use thiserror::Error;
use tracing::info;

use crate::db;
use crate::extract::{self, FieldCountMismatch};
use crate::fetch::{self, FetchOutcome};
use crate::format;

/// User-facing failure taxonomy for one fetch-and-process cycle. Raw
/// transport/storage detail is carried as context inside the classified
/// message, never surfaced on its own.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot reach host: {0}")]
    Unreachable(String),

    #[error("page not retrievable: {0}")]
    NotRetrievable(u16),

    #[error("unexpected page structure: {0}")]
    Structure(#[from] FieldCountMismatch),

    #[error("contact store unavailable: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Outcome of a successful cycle: the rendered table (duplicates included,
/// for visibility) plus how many records were actually new to the store.
#[derive(Debug)]
pub struct CycleReport {
    pub table: String,
    pub total: usize,
    pub inserted: usize,
}

/// One full cycle: fetch, extract, assemble, render, persist. Stateless
/// between invocations; only the store accumulates.
pub async fn run_cycle(
    client: &Client,
    conn: &Connection,
    url: &str,
    user_agent: &str,
) -> Result<CycleReport, PipelineError> {
    let outcome = fetch::fetch_page(client, url, user_agent).await;
    handle_outcome(conn, outcome)
}

/// Process a classified fetch outcome. Split from `run_cycle` so the
/// extraction/persistence path is testable without a live endpoint.
pub fn handle_outcome(
    conn: &Connection,
    outcome: FetchOutcome,
) -> Result<CycleReport, PipelineError> {
    let body = match outcome {
        FetchOutcome::Success { body } => body,
        FetchOutcome::ConnectionFailed { detail } => {
            return Err(PipelineError::Unreachable(detail))
        }
        FetchOutcome::HttpError { status } => return Err(PipelineError::NotRetrievable(status)),
    };

    let contacts = extract::assemble(extract::extract_fields(&body))?;
    let table = format::render_table(&contacts);
    let inserted = db::insert_contacts(conn, &contacts)?;
    info!(
        total = contacts.len(),
        inserted,
        skipped = contacts.len() - inserted,
        "Cycle complete"
    );

    Ok(CycleReport {
        table,
        total: contacts.len(),
        inserted,
    })
}

// ── Tests ──
