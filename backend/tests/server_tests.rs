mod common;

use std::sync::Arc;

use bucket_service::{
    bucket::{mock::MockBucketStore, BucketStore},
    server,
    types::Environment,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Sends a bare HTTP/1.1 GET and returns the raw response
async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr)
        .await
        .expect("Failed to connect");
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("Failed to read response");
    response
}

#[tokio::test]
async fn test_serves_routes_over_tcp() {
    common::setup_test_env();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");

    let bucket_store: Arc<dyn BucketStore> = Arc::new(MockBucketStore::new(vec![
        "bucket-a".to_string(),
        "bucket-b".to_string(),
    ]));
    let router = server::router(Environment::Development, bucket_store);
    let server_handle = tokio::spawn(server::serve(listener, router));

    let hello = raw_get(addr, "/").await;
    assert!(hello.starts_with("HTTP/1.1 200 OK"));
    assert!(hello.ends_with("\r\n\r\nHello, World!"));

    let buckets = raw_get(addr, "/buckets").await;
    assert!(buckets.starts_with("HTTP/1.1 200 OK"));
    assert!(buckets.ends_with(r#"["bucket-a","bucket-b"]"#));

    server_handle.abort();
}

#[tokio::test]
async fn test_storage_failure_over_tcp_is_500() {
    common::setup_test_env();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");

    let bucket_store: Arc<dyn BucketStore> = Arc::new(MockBucketStore::failing());
    let router = server::router(Environment::Development, bucket_store);
    let server_handle = tokio::spawn(server::serve(listener, router));

    let response = raw_get(addr, "/buckets").await;
    assert!(response.starts_with("HTTP/1.1 500 Internal Server Error"));

    server_handle.abort();
}
