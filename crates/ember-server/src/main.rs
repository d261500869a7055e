mod commands;
mod config;
mod console;
mod events;
mod session;
mod state;

use commands::CommandRegistry;
use config::ServerConfig;
use console::Console;
use ember_events::Priority;
use ember_protocol::Listener;
use ember_types::ChunkPos;
use ember_world::{FlatGenerator, World};
use session::Session;
use state::ServerState;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Messages to the supervisor loop.
#[derive(Debug)]
pub enum Control {
    /// Graceful shutdown.
    Stop,
    /// An unrecoverable internal error; the server exits nonzero.
    Fail(String),
}

/// How far out from spawn the initial view is preloaded, in chunks.
const SPAWN_RADIUS: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("starting ember server...");

    let config = ServerConfig::load(Path::new("config/server.toml"))?;
    info!("config loaded: bind={}:{}", config.bind, config.port);

    let (control_tx, mut control_rx) = mpsc::unbounded_channel::<Control>();

    let mut world = World::new(Box::new(FlatGenerator::standard()));
    for x in -SPAWN_RADIUS..=SPAWN_RADIUS {
        for z in -SPAWN_RADIUS..=SPAWN_RADIUS {
            world.load_chunk(ChunkPos::new(x, z))?;
        }
    }
    info!("world generated (flat, {} chunks around spawn)", world.chunk_count());

    let state = Arc::new(ServerState::new(world, control_tx.clone()));
    {
        let mut bus = state.events.lock().expect("event bus lock poisoned");
        bus.subscribe(events::PLAYER_JOIN, Priority::Monitor, |event| {
            info!("{} joined the game", event.detail());
        });
        bus.subscribe(events::PLAYER_QUIT, Priority::Monitor, |event| {
            info!("{} left the game", event.detail());
        });
    }

    let mut registry = CommandRegistry::new();
    commands::register_builtins(&mut registry, control_tx.clone());
    let console = Console::start(registry);

    let listener = Listener::new(config.bind.clone(), config.port);
    let session_state = state.clone();
    let address = listener
        .start(move |connection| Session::new(session_state.clone(), connection))
        .await;
    match address {
        Ok(address) => info!("server is running on {}", address),
        Err(err) => {
            console.stop();
            return Err(err);
        }
    }
    state.fire_event(events::SERVER_START, "");

    while let Some(message) = control_rx.recv().await {
        match message {
            Control::Stop => {
                info!("stopping server");
                state.fire_event(events::SERVER_STOP, "");
                console.stop();
                return Ok(());
            }
            Control::Fail(reason) => {
                error!("internal server error: {}", reason);
                info!("stopping server");
                state.fire_event(events::SERVER_STOP, "");
                console.stop();
                anyhow::bail!(reason);
            }
        }
    }

    Ok(())
}
