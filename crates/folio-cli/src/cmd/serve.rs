use anyhow::Result;
use std::path::Path;

pub fn run(config_path: Option<&Path>, port: Option<u16>, no_open: bool) -> Result<()> {
    let config = crate::settings::load_valid(config_path)?;
    let port = port.unwrap_or(config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("folio → http://localhost:{actual_port}  (Ctrl-C to stop)");

        tokio::select! {
            res = folio_server::serve_on(config, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
