//! Integration tests for the resource service over a seeded sandbox.

use mcp_resources_core::SandboxRoot;
use mcp_resources_files::{FsResourceProvider, seed_sample_resources};
use mcp_resources_server::ResourceService;
use rmcp::model::{ErrorCode, ResourceContents};
use std::sync::Arc;
use tempfile::TempDir;

fn seeded_service() -> (TempDir, ResourceService) {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("sample-resources");
    seed_sample_resources(&dir).unwrap();
    let root = SandboxRoot::new(&dir).unwrap();
    (temp, ResourceService::new(Arc::new(FsResourceProvider::new(root))))
}

#[tokio::test]
async fn test_every_listed_resource_is_readable() {
    let (_temp, service) = seeded_service();
    let listing = service.list().await.unwrap();
    assert_eq!(listing.resources.len(), 4);

    for resource in &listing.resources {
        let read = service.read(resource.raw.uri.clone()).await.unwrap();
        assert_eq!(read.contents.len(), 1);

        let (uri, mime_type, is_blob) = match &read.contents[0] {
            ResourceContents::TextResourceContents { uri, mime_type, .. } => {
                (uri, mime_type, false)
            }
            ResourceContents::BlobResourceContents { uri, mime_type, .. } => {
                (uri, mime_type, true)
            }
        };
        assert_eq!(uri, &resource.raw.uri);
        assert_eq!(mime_type, &resource.raw.mime_type);
        assert_eq!(is_blob, resource.raw.uri.ends_with(".png"));
    }
}

#[tokio::test]
async fn test_listing_reflects_new_files() {
    let (temp, service) = seeded_service();
    std::fs::write(temp.path().join("sample-resources/added.md"), "# new").unwrap();

    let listing = service.list().await.unwrap();
    assert!(
        listing
            .resources
            .iter()
            .any(|r| r.raw.uri == "file://resources/added.md")
    );
}

#[tokio::test]
async fn test_escape_attempts_are_not_found() {
    let (_temp, service) = seeded_service();

    for uri in [
        "file://resources/../../etc/passwd",
        "file://resources//etc/passwd",
        "file://resources/nested/../../outside.txt",
        "file://resources/missing.txt",
    ] {
        let err = service.read(uri.to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND, "{uri}");
        assert!(err.message.starts_with("Resource not found"), "{uri}");
    }
}

#[tokio::test]
async fn test_concurrent_requests() {
    let (_temp, service) = seeded_service();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .read("file://resources/notes.txt".to_string())
                    .await
                    .unwrap()
            })
        })
        .collect();

    for task in tasks {
        let result = task.await.unwrap();
        assert!(matches!(
            &result.contents[0],
            ResourceContents::TextResourceContents { text, .. } if text.starts_with("Development Notes")
        ));
    }
}
