use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use raibot::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = Options::parse();

    // Logs go to stderr so they never land between the prompts.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .start()?;

    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = Game::new(options, stdin.lock(), stdout.lock())?;

    match game.run()
    {
        | Ok(outcome) => log::debug!("game over: {:?}", outcome),
        | Err(err) => log::error!("fatal error: {}", err),
    }

    Ok(())
}
