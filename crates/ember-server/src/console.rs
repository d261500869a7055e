//! The terminal console: a line-based stdin reader feeding the command
//! registry. The console owner holds every permission and cannot be kicked.

use crate::commands::{CommandRegistry, CommandSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

pub struct Console {
    input: mpsc::UnboundedSender<String>,
    dispatcher: JoinHandle<()>,
}

impl Console {
    /// Spawns the stdin reader and the dispatcher that runs each line
    /// through the registry.
    pub fn start(registry: CommandRegistry) -> Self {
        let (input, mut lines_rx) = mpsc::unbounded_channel::<String>();

        let stdin_tx = input.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if stdin_tx.send(line).is_err() {
                    break;
                }
            }
        });

        let dispatcher = tokio::spawn(async move {
            let sender = ConsoleSender;
            while let Some(line) = lines_rx.recv().await {
                registry.execute(&sender, &line);
            }
        });

        Self { input, dispatcher }
    }

    /// Feeds a command line as if it had been typed.
    pub fn submit(&self, line: impl Into<String>) {
        let _ = self.input.send(line.into());
    }

    pub fn stop(&self) {
        self.dispatcher.abort();
    }
}

/// The console as a command sender.
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "server"
    }

    fn send_message(&self, message: &str) {
        info!("{}", message);
    }

    fn has_permission(&self, _permission: &str) -> bool {
        true
    }
}
