// Server endpoints
//
// Listing, details, logs, the RAM option, and lifecycle control. Lifecycle
// and command replies are not a documented structure, so they are returned
// as the decoded `Payload` without unwrapping.

use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::{ExarotonClient, from_data, take_field};
use crate::error::Error;
use crate::models::{Logs, Server};
use crate::payload::Payload;

impl ExarotonClient {
    /// List all servers on the account, in API order.
    ///
    /// `GET servers`
    pub async fn get_servers(&self) -> Result<Vec<Server>, Error> {
        debug!("listing servers");
        self.get_data(self.url(&["servers"])?).await
    }

    /// Get a single server.
    ///
    /// `GET servers/{id}`
    pub async fn get_server(&self, id: &str) -> Result<Server, Error> {
        debug!(server_id = id, "fetching server");
        self.get_data(self.url(&["servers", id])?).await
    }

    /// The current log file in its entirety.
    ///
    /// `GET servers/{id}/logs`, returns `data.content`.
    pub async fn get_server_logs(&self, id: &str) -> Result<String, Error> {
        debug!(server_id = id, "fetching server logs");
        let data: Value = self.get_data(self.url(&["servers", id, "logs"])?).await?;
        from_data(take_field(data, "content")?)
    }

    /// Upload the current log to mclo.gs.
    ///
    /// `GET servers/{id}/logs/share`
    pub async fn upload_logs(&self, id: &str) -> Result<Logs, Error> {
        debug!(server_id = id, "sharing server logs");
        self.get_data(self.url(&["servers", id, "logs", "share"])?).await
    }

    /// Currently assigned RAM in gigabytes.
    ///
    /// `GET servers/{id}/options/ram`
    pub async fn get_server_ram(&self, id: &str) -> Result<u32, Error> {
        debug!(server_id = id, "fetching RAM option");
        let data: Value = self.get_data(self.url(&["servers", id, "options", "ram"])?).await?;
        from_data(take_field(data, "ram")?)
    }

    /// Assign RAM in gigabytes. Returns the value the API applied.
    ///
    /// `POST servers/{id}/options/ram` with `{"ram": n}`
    pub async fn set_server_ram(&self, id: &str, gigabytes: u32) -> Result<u32, Error> {
        debug!(server_id = id, gigabytes, "setting RAM option");
        let data: Value = self
            .send_data(
                Method::POST,
                self.url(&["servers", id, "options", "ram"])?,
                Some(&json!({ "ram": gigabytes })),
            )
            .await?;
        from_data(take_field(data, "ram")?)
    }

    /// Start the server.
    ///
    /// `POST servers/{id}/start`
    pub async fn start(&self, id: &str) -> Result<Payload, Error> {
        debug!(server_id = id, "starting server");
        self.send_raw(Method::POST, self.url(&["servers", id, "start"])?).await
    }

    /// Stop the server.
    ///
    /// `POST servers/{id}/stop`
    pub async fn stop(&self, id: &str) -> Result<Payload, Error> {
        debug!(server_id = id, "stopping server");
        self.send_raw(Method::POST, self.url(&["servers", id, "stop"])?).await
    }

    /// Restart the server.
    ///
    /// `POST servers/{id}/restart`
    pub async fn restart(&self, id: &str) -> Result<Payload, Error> {
        debug!(server_id = id, "restarting server");
        self.send_raw(Method::POST, self.url(&["servers", id, "restart"])?).await
    }

    /// Run a console command, e.g. `say Hello World`.
    ///
    /// `POST servers/{id}/command` with `{"command": "..."}`
    pub async fn command(&self, id: &str, command: &str) -> Result<Payload, Error> {
        debug!(server_id = id, command, "executing command");
        self.request(
            Method::POST,
            self.url(&["servers", id, "command"])?,
            Some(&json!({ "command": command })),
        )
        .await
    }
}
