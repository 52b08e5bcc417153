use serde::{Deserialize, Serialize};

/// Access key as returned by the management API
///
/// The server sends more fields than these (password, port, method); they
/// are ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// Opaque server-assigned identifier
    pub id: String,

    /// Display name, empty until renamed
    pub name: String,

    /// `ss://` URL handed to VPN clients
    pub access_url: String,
}

/// Envelope returned by `GET /access-keys/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyCollection {
    pub access_keys: Vec<Key>,
}

impl KeyCollection {
    pub fn len(&self) -> usize {
        self.access_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.access_keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.access_keys.iter()
    }

    /// Look up a key by id
    pub fn find(&self, id: &str) -> Option<&Key> {
        self.access_keys.iter().find(|k| k.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl IntoIterator for KeyCollection {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.access_keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyCollection {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.access_keys.iter()
    }
}

/// Transfer cap in bytes, server-wide or per key
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataLimit {
    pub bytes: u64,
}

impl DataLimit {
    pub fn new(bytes: u64) -> Self {
        Self { bytes }
    }
}

/// Request body for the set-limit endpoints: `{"limit":{"bytes":N}}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataLimitRequest {
    pub limit: DataLimit,
}

impl From<DataLimit> for DataLimitRequest {
    fn from(limit: DataLimit) -> Self {
        Self { limit }
    }
}
