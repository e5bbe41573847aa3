/// A `/{resource_type}/{id}` pair extracted from a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    pub resource_type: String,
    pub id: String,
}

impl ResourcePath {
    /// Split a request path into its resource type and id.
    ///
    /// The resource type is the first segment and stops at the first `/`.
    /// Everything after that separator is the id, further slashes included,
    /// so `/a/b/c` yields type `a` and id `b/c`. Both parts must be non-empty
    /// and free of whitespace.
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let (resource_type, id) = rest.split_once('/')?;

        if !is_segment(resource_type) || !is_segment(id) {
            return None;
        }

        Some(Self {
            resource_type: resource_type.to_string(),
            id: id.to_string(),
        })
    }
}

fn is_segment(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}
