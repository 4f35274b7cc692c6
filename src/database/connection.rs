//! Database connection management

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use crate::error::{SheetgenError, Result};
use super::schema;

/// Database connection wrapper
pub struct Database {
    /// Path to the database file (`None` for in-memory databases)
    path: Option<PathBuf>,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open an existing catalog database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Some(conn),
        })
    }

    /// Open (or create) a catalog database and ensure all tables exist
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        create_tables(&conn)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Some(conn),
        })
    }

    /// Create a transient in-memory catalog database
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_tables(&conn)?;
        Ok(Self {
            path: None,
            conn: Some(conn),
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            SheetgenError::DatabaseError("Database not open".to_string())
        })
    }

    /// Get a mutable reference to the connection
    pub fn connection_mut(&mut self) -> Result<&mut Connection> {
        self.conn.as_mut().ok_or_else(|| {
            SheetgenError::DatabaseError("Database not open".to_string())
        })
    }

    /// Get the database path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }
}

fn create_tables(conn: &Connection) -> Result<()> {
    for sql in schema::CREATE_ALL_TABLES {
        conn.execute(sql, [])?;
    }
    Ok(())
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}
