use relay_common::prelude::*;

/// The structured records submitted with a work order, one per form section, in submission
/// order.
#[derive(Clone, Debug, Default)]
pub struct FormData {
    blobs: Vec<HashMap<InlineStr, Object>>,
}

impl FormData {
    pub fn new(blobs: Vec<HashMap<InlineStr, Object>>) -> Self {
        Self { blobs }
    }

    /// Each blob must be a JSON object.
    pub fn parse(raw_blobs: &[String]) -> RelayResult<Self> {
        let mut blobs = Vec::with_capacity(raw_blobs.len());
        for raw in raw_blobs {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            let map = value.as_object().ok_or_else(|| {
                ErrorCode::Deserialization(format!("form data is not a object: {}", raw))
            })?;
            blobs.push(Object::convert_jsonmap_to_hashmap(map));
        }
        Ok(Self { blobs })
    }

    /// Value of `key` in the first blob declaring it; later blobs are not consulted.
    pub fn lookup(&self, key: &str) -> Option<&Object> {
        self.blobs.iter().find_map(|blob| blob.get(key))
    }
}
