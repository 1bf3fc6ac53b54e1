//! Legacy-shape migrations applied during normalization.
//!
//! Old documents in the wild carry shapes earlier releases wrote. Each
//! migration rewrites one such shape into the canonical one; none of them
//! touches input that is already canonical.

use serde_json::{Map, Value};

use resume_model::DEFAULT_IMAGE_SIZE;

/// Resolve the portrait image size from a basics object.
///
/// The canonical shape is one scalar pixel value. The legacy shape was a
/// `{width, height}` pair; it is rewritten preferring width, then height,
/// then the fixed default, but only when no usable scalar is already
/// present.
pub(crate) fn image_size(basics: &Map<String, Value>) -> u32 {
    match basics.get("imageSize") {
        Some(Value::Number(size)) => size
            .as_u64()
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(DEFAULT_IMAGE_SIZE),
        Some(Value::Object(dimensions)) => dimension(dimensions.get("width"))
            .or_else(|| dimension(dimensions.get("height")))
            .unwrap_or(DEFAULT_IMAGE_SIZE),
        _ => DEFAULT_IMAGE_SIZE,
    }
}

fn dimension(value: Option<&Value>) -> Option<u32> {
    value
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
}

/// Resolve a link field, accepting the legacy `website` key.
///
/// Early portable-schema revisions named the link field `website`; it was
/// later renamed `url`. A non-empty `url` always wins.
pub(crate) fn url_field(object: &Map<String, Value>) -> String {
    let url = object.get("url").and_then(Value::as_str).unwrap_or_default();
    if !url.is_empty() {
        return url.to_string();
    }
    object
        .get("website")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn basics(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn scalar_image_size_is_kept() {
        assert_eq!(image_size(&basics(json!({"imageSize": 96}))), 96);
    }

    #[test]
    fn dimension_pair_prefers_width_then_height() {
        assert_eq!(
            image_size(&basics(json!({"imageSize": {"width": 64, "height": 80}}))),
            64
        );
        assert_eq!(
            image_size(&basics(json!({"imageSize": {"height": 80}}))),
            80
        );
        assert_eq!(
            image_size(&basics(json!({"imageSize": {}}))),
            DEFAULT_IMAGE_SIZE
        );
    }

    #[test]
    fn missing_or_unusable_size_falls_back_to_default() {
        assert_eq!(image_size(&basics(json!({}))), DEFAULT_IMAGE_SIZE);
        assert_eq!(
            image_size(&basics(json!({"imageSize": "big"}))),
            DEFAULT_IMAGE_SIZE
        );
        assert_eq!(
            image_size(&basics(json!({"imageSize": -4}))),
            DEFAULT_IMAGE_SIZE
        );
    }

    #[test]
    fn website_fills_missing_url() {
        assert_eq!(
            url_field(&basics(json!({"website": "https://a.example"}))),
            "https://a.example"
        );
        assert_eq!(
            url_field(&basics(
                json!({"url": "https://b.example", "website": "https://a.example"})
            )),
            "https://b.example"
        );
        assert_eq!(url_field(&basics(json!({}))), "");
    }
}
