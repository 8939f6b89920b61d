use eyre::{Context, Result};
use taskboard::cli::{self, Command};
use taskboard::config::init_logger;
use taskboard::remote::new_remote;
use taskboard::store::TaskStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    let config = cmd.get_config()?;
    init_logger(&config.log)?;
    log::debug!("starting {}", taskboard::config::user_agent());

    let remote = new_remote(&config.remote)?;
    let mut store = TaskStore::new(remote);
    store.load().await.wrap_err("loading tasks")?;

    cli::run(cmd.action(), &mut store).await
}
