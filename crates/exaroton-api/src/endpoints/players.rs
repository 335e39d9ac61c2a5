// Player list endpoints
//
// Playerlists are named per server (whitelist, ops, banned-players, ...).
// Mutations send `{"entries": [...]}` and return the list after the change.

use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::client::ExarotonClient;
use crate::error::Error;

#[derive(Serialize)]
struct Entries<'a> {
    entries: &'a [String],
}

impl ExarotonClient {
    /// Names of the playerlists available on the server.
    ///
    /// `GET servers/{id}/playerlists`
    pub async fn get_player_lists(&self, id: &str) -> Result<Vec<String>, Error> {
        debug!(server_id = id, "listing playerlists");
        self.get_data(self.url(&["servers", id, "playerlists"])?).await
    }

    /// Usernames on one playerlist.
    ///
    /// `GET servers/{id}/playerlists/{list}`
    pub async fn get_player_list(&self, id: &str, list: &str) -> Result<Vec<String>, Error> {
        debug!(server_id = id, list, "fetching playerlist");
        self.get_data(self.url(&["servers", id, "playerlists", list])?).await
    }

    /// Add usernames to a playerlist. Returns the resulting list.
    ///
    /// `PUT servers/{id}/playerlists/{list}`
    pub async fn add_players_to_list(
        &self,
        id: &str,
        list: &str,
        usernames: &[String],
    ) -> Result<Vec<String>, Error> {
        debug!(server_id = id, list, count = usernames.len(), "adding players to list");
        self.send_data(
            Method::PUT,
            self.url(&["servers", id, "playerlists", list])?,
            Some(&Entries { entries: usernames }),
        )
        .await
    }

    /// Remove usernames from a playerlist. Returns the resulting list.
    ///
    /// `DELETE servers/{id}/playerlists/{list}`
    pub async fn remove_players_from_list(
        &self,
        id: &str,
        list: &str,
        usernames: &[String],
    ) -> Result<Vec<String>, Error> {
        debug!(server_id = id, list, count = usernames.len(), "removing players from list");
        self.send_data(
            Method::DELETE,
            self.url(&["servers", id, "playerlists", list])?,
            Some(&Entries { entries: usernames }),
        )
        .await
    }
}
