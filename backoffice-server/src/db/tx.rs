//! Transaction coordination
//!
//! Multi-step writes run as one multi-statement SurrealQL transaction
//! (`BEGIN TRANSACTION; ...; COMMIT TRANSACTION;`). In-transaction guard
//! statements `THROW` a tagged message; the throw cancels the transaction,
//! so either every statement commits or none do.
//!
//! Tag convention inside transaction scripts:
//!
//! ```surql
//! IF $existing != NONE { THROW 'conflict:Invoice already exists for this order'; };
//! IF $target == NONE { THROW 'not_found:Order not found'; };
//! ```
//!
//! [`map_tx_error`] recovers the tag from the driver error and maps it back
//! to the [`RepoError`] taxonomy. Unique-index violations (the store-level
//! backstop for racing writers) also map to [`RepoError::Duplicate`].

use super::repository::RepoError;

/// Tag for guard failures that should surface as `RepoError::NotFound`
pub const NOT_FOUND_TAG: &str = "not_found:";

/// Tag for guard failures that should surface as `RepoError::Duplicate`
pub const CONFLICT_TAG: &str = "conflict:";

/// Map a transaction failure back to the repository error taxonomy
pub fn map_tx_error(err: surrealdb::Error) -> RepoError {
    let msg = err.to_string();

    if let Some(tagged) = extract_tagged(&msg, NOT_FOUND_TAG) {
        return RepoError::NotFound(tagged);
    }
    if let Some(tagged) = extract_tagged(&msg, CONFLICT_TAG) {
        return RepoError::Duplicate(tagged);
    }
    // Unique index violation: a racing writer won
    if msg.contains("already contains") {
        return RepoError::Duplicate(msg);
    }

    RepoError::Database(msg)
}

/// Pull the message following `tag` out of a driver error string
fn extract_tagged(msg: &str, tag: &str) -> Option<String> {
    let idx = msg.find(tag)?;
    let rest = &msg[idx + tag.len()..];
    Some(
        rest.trim_end_matches(|c: char| c == '\'' || c == '"' || c == ')' || c == '`')
            .trim()
            .to_string(),
    )
}
