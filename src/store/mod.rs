// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Smarthome Labs

//! SQLite-backed persistence for users and sensor readings.
//!
//! The store owns the only database connection. Callers go through
//! [`Store`] methods; nothing else touches SQL.
//!
//! Credentials are stored as plaintext and compared by equality at the
//! login handler. This mirrors how the accounts are provisioned today and
//! is a known weakness of the scheme.

mod error;
mod schema;

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use crate::models::{Sensor, User};

pub use error::{Error, Result};

/// SQLite-based store for login credentials and sensor records.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        info!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for better performance
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        // Initialize schema
        schema::initialize(&conn)?;

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    // === User operations ===

    /// Look up a user by exact username.
    pub fn get_user(&self, username: &str) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT username, password FROM users WHERE username = ?1",
                [username],
                |row| {
                    Ok(User {
                        username: row.get(0)?,
                        password: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(user)
    }

    /// Insert or replace a credential pair.
    ///
    /// The API never calls this; accounts are provisioned at startup.
    pub fn upsert_user(&self, username: &str, password: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)
             ON CONFLICT(username) DO UPDATE SET password = ?2",
            rusqlite::params![username, password],
        )?;
        Ok(())
    }

    // === Sensor operations ===

    /// Fetch all sensor records in rowid order.
    pub fn list_sensors(&self) -> Result<Vec<Sensor>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, value, recorded_at FROM sensors ORDER BY id")?;

        let sensors = stmt
            .query_map([], |row| {
                Ok(Sensor {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    value: row.get(2)?,
                    recorded_at: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(sensors)
    }

    /// Fetch a single sensor record by id.
    pub fn get_sensor(&self, id: i64) -> Result<Option<Sensor>> {
        let sensor = self
            .conn
            .query_row(
                "SELECT id, name, value, recorded_at FROM sensors WHERE id = ?1",
                [id],
                |row| {
                    Ok(Sensor {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        value: row.get(2)?,
                        recorded_at: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(sensor)
    }

    /// Persist a new sensor record.
    ///
    /// The id comes from the store and `recorded_at` from the server clock
    /// at the moment of insertion; callers cannot supply either.
    pub fn create_sensor(&self, name: &str, value: f64) -> Result<Sensor> {
        let recorded_at = Utc::now();

        self.conn.execute(
            "INSERT INTO sensors (name, value, recorded_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, value, recorded_at],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get_sensor(id)?.ok_or(Error::SensorNotFound(id))
    }

    /// Overwrite name and value of an existing sensor record.
    ///
    /// Single conditional statement; the affected-row count decides between
    /// success and [`Error::SensorNotFound`], so there is no window between
    /// an existence check and the write.
    pub fn update_sensor(&self, id: i64, name: &str, value: f64) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE sensors SET name = ?1, value = ?2 WHERE id = ?3",
            rusqlite::params![name, value, id],
        )?;

        if updated == 0 {
            return Err(Error::SensorNotFound(id));
        }
        Ok(())
    }

    /// Remove a sensor record.
    ///
    /// Same atomicity contract as [`Store::update_sensor`].
    pub fn delete_sensor(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM sensors WHERE id = ?1", [id])?;

        if deleted == 0 {
            return Err(Error::SensorNotFound(id));
        }
        Ok(())
    }
}
