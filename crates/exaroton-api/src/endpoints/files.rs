// File endpoints
//
// File contents come back as whatever the API declares: text for configs and
// logs, JSON for some structured files, bytes for binaries, PNG for icons.
// Writing files is not supported by this client.

use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::client::ExarotonClient;
use crate::error::Error;
use crate::models::FileInfo;
use crate::payload::Payload;

impl ExarotonClient {
    /// `servers/{id}/files/{kind}/{path...}` with the file path split on `/`.
    ///
    /// Repeated and surrounding slashes are ignored. A path with no name in it,
    /// or with `.`/`..` components, is an `Error::InvalidPath`.
    fn file_url(&self, id: &str, kind: &str, path: &str) -> Result<Url, Error> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.is_empty() {
            return Err(Error::InvalidPath {
                segment: path.to_owned(),
                reason: "file path is empty",
            });
        }
        let mut segments = vec!["servers", id, "files", kind];
        segments.extend(parts);
        self.url(&segments)
    }

    /// Read a file. The payload variant follows the response content type.
    ///
    /// `GET servers/{id}/files/data/{path}`
    pub async fn get_file_data(&self, id: &str, path: &str) -> Result<Payload, Error> {
        debug!(server_id = id, path, "reading file");
        self.send_raw(Method::GET, self.file_url(id, "data", path)?).await
    }

    /// Delete a file or directory.
    ///
    /// `DELETE servers/{id}/files/data/{path}`
    pub async fn delete_file_data(&self, id: &str, path: &str) -> Result<Payload, Error> {
        debug!(server_id = id, path, "deleting file");
        self.send_raw(Method::DELETE, self.file_url(id, "data", path)?).await
    }

    /// Not supported: always fails with `Error::UnsupportedOperation` and
    /// never sends a request.
    #[allow(clippy::unused_async)]
    pub async fn write_file_data(
        &self,
        _id: &str,
        _path: &str,
        _contents: &[u8],
    ) -> Result<Payload, Error> {
        Err(Error::UnsupportedOperation("write file data"))
    }

    /// File or directory metadata; directories include their children.
    ///
    /// `GET servers/{id}/files/info/{path}`
    pub async fn get_file_info(&self, id: &str, path: &str) -> Result<FileInfo, Error> {
        debug!(server_id = id, path, "fetching file info");
        self.get_data(self.file_url(id, "info", path)?).await
    }
}
