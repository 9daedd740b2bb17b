use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let format = config.format(cli.format);

    match cli.command {
        Commands::Render {
            file,
            now,
            mode,
            limit,
            color,
        } => handlers::render::handle(
            file.as_deref(),
            handlers::render::RenderOptions {
                now,
                format,
                mode: config.mode(mode),
                color: config.color(color),
                limit,
            },
        ),

        Commands::Config => handlers::config::handle(cli.config.as_deref(), &config),
    }
}
