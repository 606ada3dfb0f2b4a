//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the descriptor exactly as templates see it.

use crate::model::ApiDescriptor;
use crate::render::{RenderError, Renderer};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, descriptor: &ApiDescriptor) -> Result<String, RenderError> {
        let mut out = serde_json::to_string_pretty(descriptor)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;

    #[test]
    fn output_parses_back() {
        let catalogue = Catalogue::build().unwrap();
        let out = JsonRenderer.render(catalogue.get("companies").unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["endpointPath"], "companies");
        assert_eq!(value["endpoints"][0]["method"], "GET");
        assert_eq!(value["endpoints"][0]["pageable"], true);
        assert_eq!(value["links"][0]["type"], "addresses");
    }

    #[test]
    fn request_body_stays_separate_from_parameters() {
        let catalogue = Catalogue::build().unwrap();
        let out = JsonRenderer.render(catalogue.get("companies").unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let create = value["endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["path"] == "/createWithAddress")
            .unwrap();
        assert_eq!(create["parameters"], serde_json::json!([]));
        assert!(create["requestBody"].as_str().unwrap().contains("addresses.html"));
    }
}
