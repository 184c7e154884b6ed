mod commands;
mod terminal;

use commands::{CommandLine, probe};
use ns_common::config::{Config, SOCKET_TIMEOUT};
use ns_common::network::target::Target;
use terminal::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        connect: commands.connect,
        timeout: SOCKET_TIMEOUT,
    };
    let target = Target::new(commands.host, commands.port);

    probe::probe(target, &cfg).await
}
