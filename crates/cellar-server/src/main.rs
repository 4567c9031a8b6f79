#[tokio::main]
async fn main() -> std::io::Result<()> {
    cellar_server::start_server().await
}
