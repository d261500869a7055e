//! The accept loop: one `Connection` and one reader task per client.

use crate::connection::Connection;
use crate::packets::PacketHandler;
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

pub struct Listener {
    host: String,
    port: u16,
}

impl Listener {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Binds the socket, then spawns the accept loop. The factory builds one
    /// packet handler per connection, bound to it for its whole life. A bind
    /// failure is returned to the caller; later accept errors end the loop.
    pub async fn start<H, F>(&self, factory: F) -> anyhow::Result<SocketAddr>
    where
        H: PacketHandler + 'static,
        F: Fn(Arc<Connection>) -> H + Send + 'static,
    {
        let address = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        let local = listener.local_addr()?;

        tokio::spawn(async move {
            info!("accepting connections on {}", local);
            loop {
                let (socket, _) = match listener.accept().await {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        error!("failed to accept connection: {}", err);
                        break;
                    }
                };
                let _ = socket.set_nodelay(true);

                let connection = match Connection::new(socket) {
                    Ok(connection) => Arc::new(connection),
                    Err(err) => {
                        error!("failed to accept connection: {}", err);
                        continue;
                    }
                };

                let mut handler = factory(connection.clone());
                tokio::spawn(async move {
                    // errors are logged within the connection itself
                    let _ = connection.start_listening(&mut handler).await;
                    handler.on_disconnect().await;
                });
            }
        });

        Ok(local)
    }
}
