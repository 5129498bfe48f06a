use rusqlite::{params, Connection};

/// A single directory contact. `email` is the identity: the store never
/// holds two rows with the same email, and the first-seen row wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub email: String,
}

pub fn connect(path: &str) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Idempotent: re-running on an existing store keeps all rows.
pub fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            iid    INTEGER PRIMARY KEY AUTOINCREMENT,
            name   TEXT NOT NULL,
            title  TEXT NOT NULL,
            email  TEXT NOT NULL UNIQUE
        );
        ",
    )?;
    Ok(())
}

/// Atomic conditional insert keyed on `email`. Returns true if the row was
/// new. `INSERT OR IGNORE` makes the check-then-insert a single statement,
/// so concurrent cycles racing on the same email cannot both insert.
///
/// Emails compare as exact bytes; no case folding or trimming.
pub fn insert_if_new(conn: &Connection, contact: &Contact) -> Result<bool, rusqlite::Error> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO contacts (name, title, email) VALUES (?1, ?2, ?3)",
        params![contact.name, contact.title, contact.email],
    )?;
    Ok(changed == 1)
}

/// Insert a batch in one transaction. Returns how many rows were new;
/// duplicates are skipped silently.
pub fn insert_contacts(conn: &Connection, contacts: &[Contact]) -> Result<usize, rusqlite::Error> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO contacts (name, title, email) VALUES (?1, ?2, ?3)",
        )?;
        for c in contacts {
            inserted += stmt.execute(params![c.name, c.title, c.email])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

pub fn fetch_contacts(
    conn: &Connection,
    limit: Option<usize>,
) -> Result<Vec<Contact>, rusqlite::Error> {
    let sql = match limit {
        Some(n) => format!("SELECT name, title, email FROM contacts ORDER BY iid LIMIT {}", n),
        None => "SELECT name, title, email FROM contacts ORDER BY iid".to_string(),
    };
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Contact {
                name: row.get(0)?,
                title: row.get(1)?,
                email: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn count_contacts(conn: &Connection) -> Result<usize, rusqlite::Error> {
    conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))
}

// ── Tests ──
