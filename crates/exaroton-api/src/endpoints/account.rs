// Account endpoint

use tracing::debug;

use crate::client::ExarotonClient;
use crate::error::Error;
use crate::models::Account;

impl ExarotonClient {
    /// Get the account that owns the API token.
    ///
    /// `GET account`
    pub async fn get_account(&self) -> Result<Account, Error> {
        debug!("fetching account");
        self.get_data(self.url(&["account"])?).await
    }
}
