use anyhow::Result;
use surveyprep::{config::Config, pipeline};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let cfg = Config::from_env();
    let out = pipeline::run(&cfg)?;
    println!("Cleaned data written to: {}", out.display());
    Ok(())
}
