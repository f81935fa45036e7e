//! Integration tests for the resource capability traits, exercised through
//! the content resources: books, chapters, pages, and shelves.

use bookstack_api::rest::resources::{
    BookCreate, BookUpdate, ChapterCreate, PageCreate, PageUpdate, ShelfCreate, Tag,
};
use bookstack_api::rest::{
    Creatable, Deletable, ExportFormat, Exportable, Filters, ListParams, Listable, Readable,
    ResourceError, Updatable,
};
use bookstack_api::{BaseUrl, BookStackConfig, Credentials, FileUpload, RestClient, TokenId, TokenSecret};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> RestClient {
    let config = BookStackConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .credentials(Credentials::token(
            TokenId::new("id").unwrap(),
            TokenSecret::new("secret").unwrap(),
        ))
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

// ============================================================================
// Sparse Payloads
// ============================================================================

#[tokio::test]
async fn test_update_sends_only_supplied_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/books/7"))
        .and(body_json(json!({"name": "X"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "X"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let update = BookUpdate {
        name: Some("X".to_string()),
        ..Default::default()
    };
    let book = client.books().update(7, &update).await.unwrap();

    assert_eq!(book["name"], "X");
}

#[tokio::test]
async fn test_empty_update_sends_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/pages/2"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert_ok!(client.pages().update(2, &PageUpdate::default()).await);
}

#[tokio::test]
async fn test_create_always_includes_required_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chapters"))
        .and(body_json(json!({"book_id": 1, "name": "Setup"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let chapter = client
        .chapters()
        .create(&ChapterCreate::new(1, "Setup"))
        .await
        .unwrap();
    assert_eq!(chapter["id"], 10);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_page_is_rejected_without_request() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let orphan = PageCreate {
        name: "Orphan".to_string(),
        ..Default::default()
    };
    let result = client.pages().create(&orphan).await;

    assert!(matches!(
        result,
        Err(ResourceError::Validation { resource: "Page", .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_page_create_with_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pages"))
        .and(body_json(json!({
            "name": "Install",
            "book_id": 1,
            "markdown": "# Install",
            "tags": [{"name": "os", "value": "linux"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 99})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let payload = PageCreate::in_book(1, "Install")
        .with_markdown("# Install")
        .with_tags(vec![Tag::new("os", "linux")]);
    assert_ok!(client.pages().create(&payload).await);
}

// ============================================================================
// Reads and Lists
// ============================================================================

#[tokio::test]
async fn test_read_with_binary_response_is_empty_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages/5"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"<html/>".to_vec(), "text/html"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let page = client.pages().read(5).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_read_not_found_propagates_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "Book not found"}
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = assert_err!(client.books().read(404).await);
    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("Book not found"));
}

#[tokio::test]
async fn test_list_single_page_with_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shelves"))
        .and(query_param("count", "5"))
        .and(query_param("offset", "10"))
        .and(query_param("sort", "-created_at"))
        .and(query_param("filter[name]", "Ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Ops"}],
            "total": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = ListParams::new()
        .count(5)
        .offset(10)
        .sort("-created_at")
        .filter("name", "Ops");
    let page = client.shelves().list(params).await.unwrap();

    assert_eq!(page.total, 11);
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_list_by_book_uses_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chapters"))
        .and(query_param("filter[book_id]", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "book_id": 3}, {"id": 2, "book_id": 3}],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let chapters = client.chapters().list_by_book(3).await.unwrap();
    assert_eq!(chapters.len(), 2);
}

#[tokio::test]
async fn test_list_all_with_sort_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(query_param("sort", "+name"))
        .and(query_param("filter[slug]", "handbook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let books = client
        .books()
        .list_all(Some("+name"), &Filters::new().with("slug", "handbook"))
        .await
        .unwrap();
    assert_eq!(books.len(), 1);
}

#[tokio::test]
async fn test_delete_no_content_is_empty_record() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/shelves/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert!(client.shelves().delete(4).await.unwrap().is_empty());
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn test_book_with_cover_is_sent_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_string_contains("name=\"image\"; filename=\"cover.jpg\""))
        .and(body_string_contains("image/jpeg"))
        .and(body_string_contains("Handbook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let payload = BookCreate::new("Handbook")
        .with_tags(vec![Tag::name_only("internal")])
        .with_image(FileUpload::from_bytes("cover", "cover.jpg", vec![0xFF, 0xD8, 0xFF]));
    client.books().create(&payload).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"tags[0][name]\""));
}

#[tokio::test]
async fn test_shelf_books_are_flattened_in_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shelves"))
        .and(body_string_contains("name=\"books[1]\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let payload = ShelfCreate::new("Ops")
        .with_books(vec![4, 5])
        .with_image(FileUpload::from_bytes("image", "shelf.png", vec![1]));
    client.shelves().create(&payload).await.unwrap();
}

// ============================================================================
// Exports
// ============================================================================

#[tokio::test]
async fn test_export_returns_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages/5/export/markdown"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"# Title".to_vec(), "text/markdown"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let bytes = client.pages().export_markdown(5).await.unwrap();
    assert_eq!(bytes, b"# Title");
}

#[tokio::test]
async fn test_export_structured_reply_is_empty_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chapters/1/export/html"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert!(client.chapters().export_html(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_export_to_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books/2/export/pdf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("book.pdf");

    let client = create_client(&server);
    let format: ExportFormat = "pdf".parse().unwrap();
    let written = client
        .books()
        .export_to_file(2, format, &target)
        .await
        .unwrap();

    assert_eq!(written, target);
    assert_eq!(tokio::fs::read(&target).await.unwrap(), b"%PDF-1.7");
}

#[test]
fn test_unknown_export_format_is_rejected() {
    let result: Result<ExportFormat, _> = "docx".parse();
    assert!(matches!(
        result,
        Err(ResourceError::InvalidExportFormat { ref format }) if format == "docx"
    ));
}
