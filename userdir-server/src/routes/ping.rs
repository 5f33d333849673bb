/// `GET /ping` - health check, independent of the store
pub async fn ping() -> &'static str {
    "pong"
}
