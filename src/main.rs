use cidr_compress::compress_lines;
use cidr_compress::config::Config;
use cidr_compress::logging;
use cidr_compress::output::emit;
use std::error::Error;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let (config, config_error) = match Config::from_env() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("Error initializing logging: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring configuration, using defaults: {e}");
    }
    log::debug!("#Start main() {config:?}");

    // undecodable bytes become U+FFFD and the line is rejected by validation
    let mut raw = Vec::new();
    io::stdin().read_to_end(&mut raw)?;
    let input = String::from_utf8_lossy(&raw);

    let report = compress_lines(input.lines(), config.max_passes);
    emit(&report, config.format, &mut io::stdout().lock())?;

    Ok(())
}
