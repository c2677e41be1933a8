//! Filer file integration.

use std::sync::Arc;

use linkable_registry::{ItemDisplay, ModelCollection, ModelItemType, ModelMeta};

pub const IDENTIFIER: &str = "filer_file";

pub fn file_meta() -> ModelMeta {
    ModelMeta::new("filer.models", "File", "file")
}

/// Item type searching files by name, description, original filename and
/// checksum.
pub fn file_item_type(collection: Arc<dyn ModelCollection>) -> ModelItemType {
    ModelItemType::new(collection)
        .with_search_fields(["name", "description", "original_filename", "sha1"])
        .with_name("Filer File")
        .with_identifier(IDENTIFIER)
        .with_display(
            ItemDisplay::titled("name")
                .with_description("description")
                .with_thumbnail("thumbnail"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkable_registry::{ItemType, MemoryCollection, Record, SearchRequest, Thumbnail};

    fn collection() -> Arc<MemoryCollection> {
        Arc::new(MemoryCollection::with_records(
            file_meta(),
            vec![
                Record::new("1")
                    .with_field("name", "Annual report")
                    .with_field("original_filename", "report-2016.pdf")
                    .with_field("sha1", "da39a3ee5e6b4b0d3255bfef95601890afd80709")
                    .with_field("thumbnail", "/media/thumbs/report.png")
                    .with_absolute_url("/media/report-2016.pdf".to_string()),
                Record::new("2")
                    .with_field("name", "Logo")
                    .with_field("description", "Company logo, dark variant")
                    .with_absolute_url("/media/logo.svg".to_string()),
            ],
        ))
    }

    #[tokio::test]
    async fn test_files_match_checksum_and_original_filename() {
        let item_type = file_item_type(collection());

        let page = item_type
            .search(&SearchRequest::new("DA39A3EE"))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(
            page.results[0].get_thumbnail(),
            Some(Thumbnail::url("/media/thumbs/report.png"))
        );

        let page = item_type
            .search(&SearchRequest::new("2016 variant"))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.results[1].get_description(), "Company logo, dark variant");
    }

    #[test]
    fn test_file_item_type_names() {
        let item_type = file_item_type(collection());

        assert_eq!(item_type.get_identifier().unwrap(), "filer_file");
        assert_eq!(item_type.get_name().unwrap(), "Filer File");
        assert_eq!(item_type.get_verbose_name().unwrap(), "File");
    }
}
