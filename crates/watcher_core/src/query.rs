/// Query key naming the watched task.
pub const TASK_ID_PARAM: &str = "task_id";

/// Raw query parameters of a page URL, in document order.
///
/// This mirrors the page-side parser it replaces: values are never
/// percent-decoded, and a duplicated key resolves to its last occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses the query component of `url`.
    ///
    /// Everything after the first `?` is taken as the query. A URL without
    /// any `?` degrades to parsing the whole URL as one garbage pair; no
    /// real key can match it, so lookups stay inert. Never fails.
    pub fn from_url(url: &str) -> Self {
        let query = match url.find('?') {
            Some(idx) => &url[idx + 1..],
            None => url,
        };
        let pairs = query
            .split('&')
            .map(|raw| match raw.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (raw.to_string(), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Returns the raw (still percent-encoded) value for `key`.
    ///
    /// Last occurrence wins when the key is repeated.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    /// The task identifier, if present and non-empty.
    pub fn task_id(&self) -> Option<&str> {
        self.get(TASK_ID_PARAM).filter(|value| !value.is_empty())
    }
}
