use url::{Host, Url};

use crate::database::error::{invalid_argument, DatabaseResult};

/// Connection coordinates parsed from a database URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoInfo {
    secure: bool,
    host: String,
    namespace: String,
    emulator: bool,
}

impl RepoInfo {
    /// Parses `https://<namespace>.firebaseio.com`-style URLs.
    ///
    /// The namespace comes from the `ns` query parameter when present, otherwise from the first
    /// label of the host name. The URL must address the database root.
    pub fn parse(raw: &str) -> DatabaseResult<Self> {
        let url = Url::parse(raw.trim())
            .map_err(|err| invalid_argument(format!("Invalid database URL '{raw}': {err}")))?;

        let secure = match url.scheme() {
            "https" | "wss" => true,
            "http" | "ws" => false,
            other => {
                return Err(invalid_argument(format!(
                    "Database URL '{raw}' uses unsupported scheme '{other}'"
                )))
            }
        };

        if !matches!(url.path(), "" | "/") {
            return Err(invalid_argument(format!(
                "Database URL '{raw}' must point to root of a Firebase Database (not including a child path)"
            )));
        }

        let host_name = url
            .host_str()
            .ok_or_else(|| invalid_argument(format!("Database URL '{raw}' has no host")))?;
        let host = match url.port() {
            Some(port) => format!("{host_name}:{port}"),
            None => host_name.to_string(),
        };

        let from_query = url
            .query_pairs()
            .find(|(key, _)| key == "ns")
            .map(|(_, value)| value.into_owned())
            .filter(|ns| !ns.is_empty());
        let namespace = match (from_query, url.host()) {
            (Some(ns), _) => ns,
            (None, Some(Host::Domain(domain))) if domain.contains('.') => domain
                .split('.')
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase(),
            _ => {
                return Err(invalid_argument(format!(
                    "Can't determine the database namespace from '{raw}'; add an 'ns' query parameter"
                )))
            }
        };

        Ok(Self {
            secure,
            host,
            namespace,
            emulator: false,
        })
    }

    /// Redirects the connection to a local emulator at `host` (`host:port`), keeping the namespace.
    pub fn with_emulator_host(self, host: impl Into<String>) -> Self {
        Self {
            secure: false,
            host: host.into(),
            emulator: true,
            ..self
        }
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_emulator(&self) -> bool {
        self.emulator
    }

    /// Base URL requests should be sent to, including the `ns` parameter when the host alone
    /// does not identify the namespace.
    pub fn connection_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        let implied = self
            .host
            .split('.')
            .next()
            .is_some_and(|label| label.eq_ignore_ascii_case(&self.namespace));
        if implied && !self.emulator {
            format!("{scheme}://{}", self.host)
        } else {
            format!("{scheme}://{}/?ns={}", self.host, self.namespace)
        }
    }
}
