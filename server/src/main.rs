use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use todo_server::{logging, Config};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();
    logging::init(config.log_json);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await.inspect_err(|err| {
        error!(%addr, %err, "failed to bind listener");
    })?;

    let base_url = config.base_url();
    info!(%addr, %base_url, "HATEOAS todo API listening");
    info!("try: curl {base_url}");
    info!("try: curl {base_url}/todos");

    todo_server::run(listener, todo_server::app(&config)).await
}
