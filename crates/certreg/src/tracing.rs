use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn verbose_to_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        4..=u8::MAX => Level::TRACE,
    }
}

pub(crate) fn setup_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if verbose > 0 {
        EnvFilter::try_new(format!("warn,certreg={}", verbose_to_level(verbose).as_str()))?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,certreg=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
