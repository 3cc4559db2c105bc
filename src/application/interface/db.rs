use async_trait::async_trait;

use crate::application::app_error::AppResult;

/// Unit of work shared by the gateways of one request.
///
/// Gateway writes stay invisible to other connections until `commit` runs;
/// a session dropped without committing is rolled back.
#[async_trait]
pub trait DBSession: Send + Sync {
    /// Committing a session that never opened a transaction is a no-op.
    async fn commit(&self) -> AppResult<()>;
}
