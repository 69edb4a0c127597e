#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    gym_backend::run().await;
}
