use anyhow::Context;
use medstrat_core::config::{Config, WarnLevel};
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    open: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(config_path).context("failed to load config")?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.server.open_browser |= open;

    for w in config.validate() {
        match w.level {
            WarnLevel::Warning => tracing::warn!("{}", w.message),
            WarnLevel::Error => anyhow::bail!("invalid config: {}", w.message),
        }
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(config.server.bind_addr())
            .await
            .with_context(|| format!("failed to bind {}", config.server.bind_addr()))?;
        let url = format!("http://{}", listener.local_addr()?);
        println!("medstrat wizard → {url}");

        tokio::select! {
            res = medstrat_server::serve_on(config, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
