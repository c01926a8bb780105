//! In-memory `items` table used by the router tests.

use super::{Connector, ItemStore};
use crate::config::DbSettings;
use crate::error::{AppError, DbError};
use crate::model::{Item, NewItem};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MemoryDb {
    pub rows: BTreeMap<i64, Item>,
    pub next_id: i64,
    /// When set, `connect` fails with this driver text.
    pub refuse_connections: Option<String>,
    /// When set, every statement fails with this driver text.
    pub fail_statements: Option<String>,
    pub opened: usize,
    pub closed: usize,
    pub statements: usize,
}

#[derive(Clone, Default)]
pub struct MemoryConnector {
    pub db: Arc<Mutex<MemoryDb>>,
}

impl MemoryConnector {
    pub fn with<R>(&self, f: impl FnOnce(&mut MemoryDb) -> R) -> R {
        f(&mut *self.db.lock().unwrap())
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    async fn connect(&self, _settings: &DbSettings) -> Result<Box<dyn ItemStore>, AppError> {
        let mut db = self.db.lock().unwrap();
        if let Some(msg) = &db.refuse_connections {
            return Err(AppError::Connection(format!("Failed to connect to PostgreSQL: {}", msg)));
        }
        db.opened += 1;
        Ok(Box::new(MemoryStore { db: self.db.clone() }))
    }
}

pub struct MemoryStore {
    db: Arc<Mutex<MemoryDb>>,
}

impl MemoryStore {
    fn run<R>(&self, f: impl FnOnce(&mut MemoryDb) -> Result<R, DbError>) -> Result<R, DbError> {
        let mut db = self.db.lock().unwrap();
        db.statements += 1;
        if let Some(msg) = &db.fail_statements {
            return Err(DbError(msg.clone()));
        }
        f(&mut *db)
    }
}

fn parse_id(id: &str) -> Result<i64, DbError> {
    id.parse()
        .map_err(|_| DbError(format!("invalid input syntax for type bigint: \"{}\"", id)))
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn ping(&mut self) -> Result<(), DbError> {
        self.run(|_| Ok(()))
    }

    async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        self.run(|db| Ok(db.rows.values().cloned().collect()))
    }

    async fn get(&mut self, id: &str) -> Result<Option<Item>, DbError> {
        self.run(|db| Ok(db.rows.get(&parse_id(id)?).cloned()))
    }

    async fn create(&mut self, item: &NewItem) -> Result<Item, DbError> {
        self.run(|db| {
            db.next_id += 1;
            let row = Item {
                id: db.next_id,
                name: item.name.clone(),
                description: item.description.clone(),
            };
            db.rows.insert(row.id, row.clone());
            Ok(row)
        })
    }

    async fn update(&mut self, id: &str, item: &NewItem) -> Result<Option<Item>, DbError> {
        self.run(|db| {
            let id = parse_id(id)?;
            Ok(db.rows.get_mut(&id).map(|row| {
                row.name = item.name.clone();
                row.description = item.description.clone();
                row.clone()
            }))
        })
    }

    async fn delete(&mut self, id: &str) -> Result<Option<i64>, DbError> {
        self.run(|db| Ok(db.rows.remove(&parse_id(id)?).map(|row| row.id)))
    }

    async fn close(self: Box<Self>) {
        self.db.lock().unwrap().closed += 1;
    }
}
