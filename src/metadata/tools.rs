//! Tool catalog
//!
//! The platform's PDF tools all run in the browser. This catalog only
//! describes them so the front end can render its tool grid.

use serde::Serialize;

/// Tool category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Operations on existing PDF documents
    Pdf,
    /// Conversions to or from PDF
    Convert,
    /// AI-assisted document features
    Ai,
}

/// Descriptor for one client-side tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Stable identifier, also the front-end route slug
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    /// Whether the tool runs entirely in the browser
    pub client_side: bool,
}

static CATALOG: [ToolDescriptor; 6] = [
    ToolDescriptor {
        id: "merge-pdf",
        name: "Merge PDF",
        description: "Combine multiple PDFs into a single document",
        category: ToolCategory::Pdf,
        client_side: true,
    },
    ToolDescriptor {
        id: "split-pdf",
        name: "Split PDF",
        description: "Extract specific pages from a PDF",
        category: ToolCategory::Pdf,
        client_side: true,
    },
    ToolDescriptor {
        id: "compress-pdf",
        name: "Compress PDF",
        description: "Reduce PDF file size while maintaining quality",
        category: ToolCategory::Pdf,
        client_side: true,
    },
    ToolDescriptor {
        id: "pdf-to-image",
        name: "PDF to Image",
        description: "Convert PDF pages to JPG or PNG images",
        category: ToolCategory::Convert,
        client_side: true,
    },
    ToolDescriptor {
        id: "image-to-pdf",
        name: "Image to PDF",
        description: "Create PDF documents from images",
        category: ToolCategory::Convert,
        client_side: true,
    },
    ToolDescriptor {
        id: "chat-pdf",
        name: "Chat with PDF",
        description: "AI-powered document analysis and Q&A",
        category: ToolCategory::Ai,
        client_side: true,
    },
];

/// All tools, in display order
pub fn catalog() -> &'static [ToolDescriptor] {
    &CATALOG
}

/// Response body for the tool listing
#[derive(Debug, Serialize)]
pub struct ToolList {
    pub tools: &'static [ToolDescriptor],
}

impl ToolList {
    pub fn all() -> Self {
        Self { tools: catalog() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<&str> = catalog().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "merge-pdf",
                "split-pdf",
                "compress-pdf",
                "pdf-to-image",
                "image-to-pdf",
                "chat-pdf",
            ]
        );
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = catalog().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_all_tools_client_side() {
        assert!(catalog().iter().all(|t| t.client_side));
    }

    #[test]
    fn test_categories() {
        let categories: Vec<ToolCategory> = catalog().iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![
                ToolCategory::Pdf,
                ToolCategory::Pdf,
                ToolCategory::Pdf,
                ToolCategory::Convert,
                ToolCategory::Convert,
                ToolCategory::Ai,
            ]
        );
    }

    #[test]
    fn test_category_serialization() {
        for (category, name) in [
            (ToolCategory::Pdf, "pdf"),
            (ToolCategory::Convert, "convert"),
            (ToolCategory::Ai, "ai"),
        ] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(name.into()));
        }
    }

    #[test]
    fn test_descriptor_uses_camel_case() {
        let json = serde_json::to_value(&catalog()[0]).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.get("clientSide"), Some(&serde_json::Value::Bool(true)));
        assert!(!obj.contains_key("client_side"));
        assert_eq!(obj.len(), 5);
    }
}
