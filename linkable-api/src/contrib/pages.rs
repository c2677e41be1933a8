//! CMS page integration.

use std::sync::Arc;

use linkable_registry::{ItemDisplay, ModelCollection, ModelItemType, ModelMeta, Thumbnail};

pub const IDENTIFIER: &str = "cms_page";

/// Shown for pages, which carry no image of their own.
pub const PAGE_THUMBNAIL: &str = "/static/linkable/page.svg";

/// Metadata of the CMS page model.
pub fn page_meta() -> ModelMeta {
    ModelMeta::new("cms.models", "Page", "page")
}

/// Item type searching pages by title.
pub fn page_item_type(collection: Arc<dyn ModelCollection>) -> ModelItemType {
    ModelItemType::new(collection)
        .with_search_fields(["title"])
        .with_order_by("title")
        .with_name("cms Page")
        .with_identifier(IDENTIFIER)
        .with_display(ItemDisplay::titled("title"))
        .with_default_item_thumbnail(Thumbnail::url(PAGE_THUMBNAIL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkable_registry::{ItemType, MemoryCollection, Record, SearchRequest};

    #[tokio::test]
    async fn test_pages_are_searched_by_title_in_title_order() {
        let collection = Arc::new(MemoryCollection::with_records(
            page_meta(),
            vec![
                Record::new("1")
                    .with_field("title", "Contact")
                    .with_absolute_url("/en/contact/".to_string()),
                Record::new("2")
                    .with_field("title", "About contacts")
                    .with_absolute_url("/en/about/".to_string()),
                Record::new("3")
                    .with_field("title", "Blog")
                    .with_absolute_url("/en/blog/".to_string()),
            ],
        ));
        let item_type = page_item_type(collection);

        let page = item_type
            .search(&SearchRequest::new("contact"))
            .await
            .unwrap();
        let names: Vec<String> = page
            .results
            .iter()
            .map(|item| item.get_verbose_name().unwrap())
            .collect();

        assert_eq!(names, vec!["About contacts", "Contact"]);
        assert_eq!(page.results[0].get_urls().unwrap()[0].url, "/en/about/");
    }

    #[test]
    fn test_page_item_type_names() {
        let item_type = page_item_type(Arc::new(MemoryCollection::new(page_meta())));

        assert_eq!(item_type.get_identifier().unwrap(), "cms_page");
        assert_eq!(item_type.get_name().unwrap(), "cms Page");
        assert_eq!(item_type.get_verbose_name().unwrap(), "Page");
        assert_eq!(
            item_type.get_default_item_thumbnail(),
            Some(Thumbnail::url(PAGE_THUMBNAIL))
        );
    }
}
