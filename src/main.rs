mod rocket;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

#[tokio::main]
async fn main() -> ::anyhow::Result<()>{
    // This will load the environment variables located at `./.env`, relative to
    // the CWD. See `./.env.example` for an example on how to structure this.
    let dotenv = dotenvy::dotenv();

    let stdout = tracing_subscriber::fmt::Layer::default();

    let subscriber = registry::Registry::default() // provide underlying span data store
        .with(tracing_subscriber::EnvFilter::from_default_env()) // filter spans based on env var
        .with(stdout); // log to stdout

    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(err) = dotenv {
        tracing::info!("Not loading .env file: {err}");
    }

    let zoho = rocket::zoho::ZohoDesk::from_env()?;
    let rocket = rocket::launch(zoho);
    rocket.launch().await?;

    Ok(())
}
