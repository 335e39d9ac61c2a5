// Billing endpoints
//
// Credit pools the account owns or is a member of.

use tracing::debug;

use crate::client::ExarotonClient;
use crate::error::Error;
use crate::models::{CreditPool, CreditPoolMember, Server};

impl ExarotonClient {
    /// `GET billing/pools`
    pub async fn get_credit_pools(&self) -> Result<Vec<CreditPool>, Error> {
        debug!("listing credit pools");
        self.get_data(self.url(&["billing", "pools"])?).await
    }

    /// `GET billing/pools/{id}`
    pub async fn get_credit_pool(&self, id: &str) -> Result<CreditPool, Error> {
        debug!(pool_id = id, "fetching credit pool");
        self.get_data(self.url(&["billing", "pools", id])?).await
    }

    /// `GET billing/pools/{id}/members`
    pub async fn get_credit_pool_members(&self, id: &str) -> Result<Vec<CreditPoolMember>, Error> {
        debug!(pool_id = id, "listing credit pool members");
        self.get_data(self.url(&["billing", "pools", id, "members"])?).await
    }

    /// Servers billed to the pool.
    ///
    /// `GET billing/pools/{id}/servers`
    pub async fn get_credit_pool_servers(&self, id: &str) -> Result<Vec<Server>, Error> {
        debug!(pool_id = id, "listing credit pool servers");
        self.get_data(self.url(&["billing", "pools", id, "servers"])?).await
    }
}
