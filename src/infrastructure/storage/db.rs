use crate::domain::error::FaqError;
use crate::domain::model::{Faq, NewFaq};
use crate::domain::traits::FaqRepository;
use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::path::Path;
use tokio_rusqlite::Connection;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS faq (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL DEFAULT '',
    question_hi TEXT,
    question_bn TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
)";

const SELECT_COLUMNS: &str =
    "SELECT id, question, answer, question_hi, question_bn, created_at, updated_at FROM faq";

pub async fn init_database(db_path: &Path) -> Result<Connection, FaqError> {
    let db = Connection::open(db_path.to_path_buf()).await?;
    create_schema(&db).await?;
    Ok(db)
}

/// Open a private in-memory database (used by tests and dry runs)
pub async fn init_memory_database() -> Result<Connection, FaqError> {
    let db = Connection::open_in_memory().await?;
    create_schema(&db).await?;
    Ok(db)
}

async fn create_schema(db: &Connection) -> Result<(), FaqError> {
    db.call(|conn| -> rusqlite::Result<()> {
        conn.execute(SCHEMA, [])?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_faq_updated ON faq(updated_at)",
            [],
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

fn row_to_faq(row: &Row<'_>) -> rusqlite::Result<Faq> {
    Ok(Faq {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        question_hi: row.get(3)?,
        question_bn: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// SQLite-backed FAQ repository
#[derive(Clone)]
pub struct SqliteFaqRepository {
    conn: Connection,
}

impl SqliteFaqRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl FaqRepository for SqliteFaqRepository {
    async fn create(&self, draft: NewFaq) -> Result<Faq, FaqError> {
        let now = chrono::Utc::now().timestamp();

        let id = self
            .conn
            .call(move |conn| -> rusqlite::Result<i64> {
                conn.execute(
                    "INSERT INTO faq (question, answer, question_hi, question_bn, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?, ?)",
                    params![
                        draft.question,
                        draft.answer,
                        draft.question_hi,
                        draft.question_bn,
                        now,
                        now
                    ],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        self.get(id).await?.ok_or(FaqError::NotFound(id))
    }

    async fn update(&self, faq: &Faq) -> Result<Faq, FaqError> {
        let mut updated = faq.clone();
        updated.updated_at = chrono::Utc::now().timestamp();

        let row = updated.clone();
        let changed = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "UPDATE faq SET question = ?, answer = ?, question_hi = ?, question_bn = ?, updated_at = ?
                     WHERE id = ?",
                    params![
                        row.question,
                        row.answer,
                        row.question_hi,
                        row.question_bn,
                        row.updated_at,
                        row.id
                    ],
                )
            })
            .await?;

        if changed == 0 {
            return Err(FaqError::NotFound(faq.id));
        }
        Ok(updated)
    }

    async fn get(&self, id: i64) -> Result<Option<Faq>, FaqError> {
        let faq = self
            .conn
            .call(move |conn| {
                conn.query_row(
                    &format!("{} WHERE id = ?", SELECT_COLUMNS),
                    params![id],
                    row_to_faq,
                )
                .optional()
            })
            .await?;
        Ok(faq)
    }

    async fn list(&self) -> Result<Vec<Faq>, FaqError> {
        let faqs = self
            .conn
            .call(|conn| -> rusqlite::Result<Vec<Faq>> {
                let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
                let rows = stmt.query_map([], row_to_faq)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await?;
        Ok(faqs)
    }

    async fn count(&self) -> Result<usize, FaqError> {
        let count: i64 = self
            .conn
            .call(|conn| conn.query_row("SELECT COUNT(*) FROM faq", [], |row| row.get(0)))
            .await?;
        Ok(count as usize)
    }
}
