use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use shared_types::{AppError, DeadlineSetting, NewTodo, Todo, TodoPatch};
use sqlx::{Pool, Postgres};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repo;

// ── Store handle ────────────────────────────────────────────────────

/// Where to-dos and the deadline live.
///
/// Handlers talk to this enum only. Postgres is the production backend;
/// the in-memory backend serves tests and local runs without `DATABASE_URL`.
#[derive(Clone)]
pub enum TodoStore {
    Postgres(Pool<Postgres>),
    Memory(MemoryStore),
}

impl TodoStore {
    pub fn memory() -> Self {
        TodoStore::Memory(MemoryStore::default())
    }

    /// Short backend name for health output and logs.
    pub fn backend(&self) -> &'static str {
        match self {
            TodoStore::Postgres(_) => "postgres",
            TodoStore::Memory(_) => "memory",
        }
    }

    /// Round-trip to the backend.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            TodoStore::Postgres(pool) => {
                sqlx::query_scalar::<_, i32>("SELECT 1")
                    .fetch_one(pool)
                    .await
                    .map_err(crate::error_convert::sqlx_to_app_error)?;
                Ok(())
            }
            TodoStore::Memory(_) => Ok(()),
        }
    }

    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Todo>, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::todo::list_by_date(pool, date).await,
            TodoStore::Memory(mem) => Ok(mem.list_by_date(date).await),
        }
    }

    pub async fn create(&self, new: &NewTodo) -> Result<Todo, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::todo::create(pool, new).await,
            TodoStore::Memory(mem) => Ok(mem.create(new).await),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::todo::find_by_id(pool, id).await,
            TodoStore::Memory(mem) => Ok(mem.find_by_id(id).await),
        }
    }

    /// Returns None when `id` is unknown; nothing is written in that case.
    pub async fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<Option<Todo>, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::todo::update(pool, id, patch).await,
            TodoStore::Memory(mem) => Ok(mem.update(id, patch).await),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::todo::delete(pool, id).await,
            TodoStore::Memory(mem) => Ok(mem.delete(id).await),
        }
    }

    pub async fn find_deadline(&self) -> Result<Option<DeadlineSetting>, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::metadata::find_deadline(pool).await,
            TodoStore::Memory(mem) => Ok(mem.find_deadline().await),
        }
    }

    pub async fn upsert_deadline(&self, deadline: &str) -> Result<DeadlineSetting, AppError> {
        match self {
            TodoStore::Postgres(pool) => repo::metadata::upsert_deadline(pool, deadline).await,
            TodoStore::Memory(mem) => Ok(mem.upsert_deadline(deadline).await),
        }
    }
}

// ── In-memory implementation ────────────────────────────────────────

#[derive(Default)]
struct MemoryState {
    /// Insertion sequence alongside each record, used as the ordering tiebreak.
    todos: HashMap<Uuid, (u64, Todo)>,
    next_seq: u64,
    deadline: Option<DeadlineSetting>,
}

/// Process-local store. Every operation holds the lock for its whole
/// read-modify-write, so a merge is never observed half-applied.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    async fn list_by_date(&self, date: NaiveDate) -> Vec<Todo> {
        let state = self.state.read().await;
        let mut rows: Vec<&(u64, Todo)> = state
            .todos
            .values()
            .filter(|(_, t)| t.date == date)
            .collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        rows.into_iter().map(|(_, t)| t.clone()).collect()
    }

    async fn create(&self, new: &NewTodo) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            text: new.text.clone(),
            created_by: new.created_by.clone(),
            created_at: Utc::now(),
            completed: false,
            date: new.date,
        };
        let mut state = self.state.write().await;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.todos.insert(todo.id, (seq, todo.clone()));
        todo
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Todo> {
        let state = self.state.read().await;
        state.todos.get(&id).map(|(_, t)| t.clone())
    }

    async fn update(&self, id: Uuid, patch: &TodoPatch) -> Option<Todo> {
        let mut state = self.state.write().await;
        let (_, todo) = state.todos.get_mut(&id)?;
        patch.apply(todo);
        Some(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut state = self.state.write().await;
        state.todos.remove(&id).is_some()
    }

    async fn find_deadline(&self) -> Option<DeadlineSetting> {
        self.state.read().await.deadline.clone()
    }

    async fn upsert_deadline(&self, deadline: &str) -> DeadlineSetting {
        let setting = DeadlineSetting {
            deadline: deadline.to_string(),
            updated_at: Utc::now(),
        };
        self.state.write().await.deadline = Some(setting.clone());
        setting
    }
}
