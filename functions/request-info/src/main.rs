use lambda_runtime::{service_fn, Error};
use requestinfofunction::function_handler;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let func = service_fn(function_handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

// JSON lines for CloudWatch; level from RUST_LOG, default info.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true)
        .with_span_list(false)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
