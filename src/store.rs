use std::sync::Arc;

use async_trait::async_trait;
use mealsync_shared::planner::Field;
use serde_json::Value;
use tokio::sync::RwLock;

/// Where the planner document lives. Writes replace one top-level field at a
/// time; there is no cross-field transaction.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<Value>>;

    /// Creates or fully replaces the document.
    async fn save(&self, document: Value) -> anyhow::Result<()>;

    /// Replaces one field of an existing document.
    async fn update_field(&self, field: Field, value: Value) -> anyhow::Result<()>;
}

/// In-process store. Clones share the same document, which makes it usable
/// as a stand-in for a remote store shared by several sessions.
#[derive(Clone, Default)]
pub struct MemoryStore {
    document: Arc<RwLock<Option<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Value) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document))),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> anyhow::Result<Option<Value>> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: Value) -> anyhow::Result<()> {
        *self.document.write().await = Some(document);

        Ok(())
    }

    async fn update_field(&self, field: Field, value: Value) -> anyhow::Result<()> {
        let mut document = self.document.write().await;
        let Some(Value::Object(fields)) = document.as_mut() else {
            anyhow::bail!("cannot update `{field}`: document does not exist");
        };

        fields.insert(field.to_string(), value);

        Ok(())
    }
}
