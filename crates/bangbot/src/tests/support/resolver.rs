//! Entity resolvers: a mockall mock and a fixed lookup table.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::mock;

use crate::client::{ClientError, EntityResolver};
use crate::ids::EntityId;

mock! {
    pub Resolver {}

    #[async_trait]
    impl EntityResolver for Resolver {
        async fn resolve_entity(&self, handle: &str) -> Result<Option<EntityId>, ClientError>;
    }
}

/// Resolves numeric handles to themselves and known usernames from a table.
#[derive(Debug, Default)]
pub struct StaticResolver {
    handles: HashMap<String, EntityId>,
}

impl StaticResolver {
    /// Adds a username.
    #[must_use]
    pub fn with(mut self, handle: &str, id: i64) -> Self {
        self.handles.insert(handle.to_owned(), EntityId(id));
        self
    }
}

#[async_trait]
impl EntityResolver for StaticResolver {
    async fn resolve_entity(&self, handle: &str) -> Result<Option<EntityId>, ClientError> {
        if let Ok(id) = handle.parse::<i64>() {
            return Ok(Some(EntityId(id)));
        }
        Ok(self.handles.get(handle).copied())
    }
}
