use ads_backend_rs::{
    app::App,
    types::{AppEnvironment, Config, StartupError, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing(environment: &AppEnvironment) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(environment.log_with_ansi()))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    init_tracing(&config.app.environment);

    let ctx = Arc::new(config.to_context().await?);

    App::new(ctx).serve().await
}
