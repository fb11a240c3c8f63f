/// Static greeting, independent of the storage service
#[allow(clippy::unused_async)]
pub async fn handler() -> &'static str {
    "Hello, World!"
}
