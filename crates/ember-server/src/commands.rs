//! The command registry and its built-ins.

use crate::Control;
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Something that can run commands and receive their feedback.
pub trait CommandSender {
    fn name(&self) -> &str;
    fn send_message(&self, message: &str);
    fn has_permission(&self, permission: &str) -> bool;
}

pub type CommandHandler = Box<dyn Fn(&dyn CommandSender, &[&str]) -> bool + Send + Sync>;

pub struct Command {
    pub label: String,
    pub usage: String,
    pub permission: String,
    pub handler: CommandHandler,
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses duplicate labels.
    pub fn register(&mut self, command: Command) -> bool {
        if self.commands.contains_key(&command.label) {
            return false;
        }
        self.commands.insert(command.label.clone(), command);
        true
    }

    /// Parses and runs one command line. A leading `/` is accepted and
    /// ignored so console input and chat commands read the same.
    pub fn execute(&self, sender: &dyn CommandSender, buffer: &str) -> bool {
        let buffer = buffer.trim();
        let buffer = buffer.strip_prefix('/').unwrap_or(buffer);
        if buffer.is_empty() {
            return false;
        }

        let mut parts = buffer.split_whitespace();
        let label = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let Some(command) = self.commands.get(label) else {
            sender.send_message(&format!("unknown command: {label}"));
            return false;
        };

        if !sender.has_permission(&command.permission) {
            sender.send_message("you do not have permission to execute this command");
            return false;
        }

        let result = (command.handler)(sender, &args);
        if !result {
            sender.send_message(&format!("incorrect usage: {}", command.usage));
        }
        result
    }
}

/// Registers the built-in commands; the only one in this core is `/stop`.
pub fn register_builtins(registry: &mut CommandRegistry, control: mpsc::UnboundedSender<Control>) {
    registry.register(Command {
        label: "stop".into(),
        usage: "/stop".into(),
        permission: "server.stop".into(),
        handler: Box::new(move |_sender, args| {
            if !args.is_empty() {
                return false;
            }
            let _ = control.send(Control::Stop);
            true
        }),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct TestSender {
        permitted: bool,
        messages: Mutex<Vec<String>>,
    }

    impl TestSender {
        fn new(permitted: bool) -> Self {
            Self {
                permitted,
                messages: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandSender for TestSender {
        fn name(&self) -> &str {
            "test"
        }

        fn send_message(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }

        fn has_permission(&self, _permission: &str) -> bool {
            self.permitted
        }
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let mut registry = CommandRegistry::new();
        let make = || Command {
            label: "stop".into(),
            usage: "/stop".into(),
            permission: String::new(),
            handler: Box::new(|_, _| true),
        };
        assert!(registry.register(make()));
        assert!(!registry.register(make()));
    }

    #[tokio::test]
    async fn stop_requests_shutdown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, tx);

        let sender = TestSender::new(true);
        assert!(registry.execute(&sender, "/stop"));
        assert!(matches!(rx.recv().await, Some(Control::Stop)));
    }

    #[tokio::test]
    async fn stop_with_arguments_is_a_usage_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, tx);

        let sender = TestSender::new(true);
        assert!(!registry.execute(&sender, "stop now"));
        assert!(rx.try_recv().is_err());
        assert_eq!(
            sender.messages.lock().unwrap().as_slice(),
            &["incorrect usage: /stop".to_string()]
        );
    }

    #[test]
    fn unknown_command_reports_back() {
        let registry = CommandRegistry::new();
        let sender = TestSender::new(true);
        assert!(!registry.execute(&sender, "fly"));
        assert_eq!(
            sender.messages.lock().unwrap().as_slice(),
            &["unknown command: fly".to_string()]
        );
    }

    #[test]
    fn missing_permission_blocks_execution() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, tx);

        let sender = TestSender::new(false);
        assert!(!registry.execute(&sender, "stop"));
        assert_eq!(
            sender.messages.lock().unwrap().as_slice(),
            &["you do not have permission to execute this command".to_string()]
        );
    }
}
