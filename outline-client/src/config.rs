use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How response status codes are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every non-2xx response is an error
    #[default]
    Strict,

    /// Rename, delete and the limit calls ignore the status; create returns
    /// an empty `Key` on failure. Matches older tooling against this API.
    Lenient,
}

/// Transport options for `AccessKeyClient`
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Skip certificate verification. Management servers normally present a
    /// self-signed certificate.
    pub accept_invalid_certs: bool,

    /// Deadline for each request, connect through body
    pub timeout: Duration,

    pub status_policy: StatusPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            timeout: DEFAULT_TIMEOUT,
            status_policy: StatusPolicy::Strict,
        }
    }
}

impl ClientConfig {
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.status_policy == StatusPolicy::Strict
    }
}
