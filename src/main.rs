#[tokio::main]
async fn main() {
    if let Err(e) = concorda::run().await {
        eprintln!("concorda failed to start: {e}");
        std::process::exit(1);
    }
}
