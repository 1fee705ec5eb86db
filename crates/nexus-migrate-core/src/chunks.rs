//! Code chunk migration: OpenClaw `chunks` table to `memory/vector/*.json`.

use std::path::{Component, Path};

use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool, TypeInfo, ValueRef};

use crate::error::Result;
use crate::models::{ChunkMetadata, ChunkRecord};
use crate::{output, paths};

const SELECT_CHUNKS: &str = r"
SELECT id, path, source, start_line, end_line, hash, model, text, embedding, updated_at
FROM chunks
ORDER BY path, start_line
";

/// Migrate every chunk that carries a non-empty embedding into `vector_dir`.
///
/// Returns the number of chunk files written. A missing database is not an
/// error: the pass logs a warning and migrates nothing.
pub async fn migrate_chunks(db_path: &Path, vector_dir: &Path) -> Result<usize> {
    if !db_path.exists() {
        tracing::warn!("No OpenClaw database found at {}", db_path.display());
        return Ok(0);
    }

    let pool = open_read_only(db_path).await?;
    let result = copy_chunks(&pool, vector_dir).await;
    pool.close().await;
    result
}

async fn open_read_only(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new().filename(path).read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

async fn copy_chunks(pool: &SqlitePool, vector_dir: &Path) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chunks")
        .fetch_one(pool)
        .await?;
    tracing::info!("Found {count} code chunks");

    let rows = sqlx::query(SELECT_CHUNKS).fetch_all(pool).await?;

    let mut migrated = 0usize;
    for row in &rows {
        let Some(record) = chunk_record(row)? else {
            continue;
        };
        let stem = file_stem(&record.id);
        // Ids name the output file; one that is not a single path component
        // would land outside `vector_dir`.
        if !is_plain_file_name(&stem) {
            tracing::warn!("Skipping chunk {stem:?}: id is not a valid file name");
            continue;
        }
        let file = paths::chunk_file(vector_dir, &stem);
        output::write_json(&file, &record)?;
        migrated += 1;
    }

    Ok(migrated)
}

/// Build the destination record for one row, or `None` when the row has no
/// usable embedding.
fn chunk_record(row: &SqliteRow) -> Result<Option<ChunkRecord>> {
    let id = column_value(row, "id")?;

    let Some(embedding) = embedding_bytes(row)?
        .as_deref()
        .and_then(decode_embedding)
    else {
        tracing::debug!("Skipping chunk {id}: no embedding");
        return Ok(None);
    };

    let updated_at = column_value(row, "updated_at")?;
    let metadata = ChunkMetadata::new(
        column_value(row, "path")?,
        column_value(row, "start_line")?,
        column_value(row, "end_line")?,
        column_value(row, "hash")?,
        column_value(row, "model")?,
        column_value(row, "source")?,
        updated_at.clone(),
    );

    Ok(Some(ChunkRecord {
        id,
        content: column_value(row, "text")?,
        metadata,
        embedding,
        timestamp: updated_at,
    }))
}

/// Read a column as JSON, keeping the SQLite storage class of the value.
fn column_value(row: &SqliteRow, column: &str) -> Result<Value> {
    let raw = row.try_get_raw(column)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(column)?),
        "REAL" => Value::from(row.try_get::<f64, _>(column)?),
        "BLOB" => {
            let bytes: Vec<u8> = row.try_get(column)?;
            Value::from(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Value::from(row.try_get::<String, _>(column)?),
    };
    Ok(value)
}

/// Raw embedding payload. Embeddings are stored as JSON text, occasionally
/// as a BLOB holding the same text; anything else has no embedding.
fn embedding_bytes(row: &SqliteRow) -> Result<Option<Vec<u8>>> {
    let raw = row.try_get_raw("embedding")?;
    if raw.is_null() {
        return Ok(None);
    }

    let bytes = match raw.type_info().name() {
        "TEXT" => Some(row.try_get::<String, _>("embedding")?.into_bytes()),
        "BLOB" => Some(row.try_get::<Vec<u8>, _>("embedding")?),
        _ => None,
    };
    Ok(bytes)
}

/// Parse an embedding payload. Any non-empty JSON array is an embedding and
/// its elements are kept exactly as parsed; unparseable, non-array and empty
/// payloads count as "no embedding".
pub fn decode_embedding(bytes: &[u8]) -> Option<Vec<Value>> {
    match serde_json::from_slice::<Value>(bytes).ok()? {
        Value::Array(embedding) if !embedding.is_empty() => Some(embedding),
        _ => None,
    }
}

/// File stem for a chunk id: strings as-is, other values as their JSON text.
fn file_stem(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_plain_file_name(stem: &str) -> bool {
    let mut components = Path::new(stem).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == stem
    )
}
