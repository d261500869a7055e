//! Event names fired by the server lifecycle.

pub const SERVER_START: &str = "server.start";
pub const SERVER_STOP: &str = "server.stop";
pub const PLAYER_JOIN: &str = "player.join";
pub const PLAYER_QUIT: &str = "player.quit";
