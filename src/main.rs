use sheetform::{Config, app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command-line arguments, skipping the program name
    let config = Config::from_args(std::env::args().skip(1));

    // Start the web application
    app::run(config).await?;

    Ok(())
}
