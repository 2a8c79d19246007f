pub mod practicum;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::base::types::BotError;

// Traits.

/// Generic homework status API trait that clients must implement.
///
/// Implementations only fetch and decode; the payload shape is checked later
/// by [`crate::interaction::status::check_response`].
#[async_trait]
pub trait GenericHomeworkClient: Send + Sync + 'static {
    /// Fetch every homework whose status changed since `timestamp` (Unix seconds).
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value, BotError>;
}

// Structs.

/// Homework status client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct HomeworkClient {
    inner: Arc<dyn GenericHomeworkClient>,
}

impl Deref for HomeworkClient {
    type Target = dyn GenericHomeworkClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl HomeworkClient {
    pub fn new(inner: Arc<dyn GenericHomeworkClient>) -> Self {
        Self { inner }
    }
}
