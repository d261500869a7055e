//! One TCP socket: a reader loop that feeds a packet handler, and a
//! mutex-serialised writer so outbound packets never interleave.

use crate::codec::{ProtocolError, ProtocolResult};
use crate::packets::{ClientboundPacket, PacketHandler, ServerboundPacket};
use ember_types::chat;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex as StdMutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{error, info, trace};

struct Writer {
    stream: BufWriter<OwnedWriteHalf>,
    closed: bool,
}

/// A live client connection. `Fresh → Listening → Closed`; once closed,
/// every write fails.
pub struct Connection {
    peer: SocketAddr,
    reader: StdMutex<Option<BufReader<OwnedReadHalf>>>,
    writer: Mutex<Writer>,
    listening: AtomicBool,
}

impl Connection {
    pub fn new(stream: TcpStream) -> std::io::Result<Self> {
        let peer = stream.peer_addr()?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            peer,
            reader: StdMutex::new(Some(BufReader::new(read_half))),
            writer: Mutex::new(Writer {
                stream: BufWriter::new(write_half),
                closed: false,
            }),
            listening: AtomicBool::new(false),
        })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    pub async fn is_closed(&self) -> bool {
        self.writer.lock().await.closed
    }

    /// Drives the reader loop until the peer disconnects or an error closes
    /// the connection: one id byte, one packet body, one handler call at a
    /// time, in wire order.
    pub async fn start_listening<H: PacketHandler>(
        &self,
        handler: &mut H,
    ) -> anyhow::Result<()> {
        if self.listening.swap(true, Ordering::AcqRel) {
            return Err(ProtocolError::AlreadyListening.into());
        }
        let mut reader = self
            .reader
            .lock()
            .expect("reader mutex poisoned")
            .take()
            .ok_or(ProtocolError::AlreadyListening)?;

        info!("handling new connection from {}", self.peer);

        loop {
            let packet_id = match reader.read_u8().await {
                Ok(id) => id,
                Err(err) => {
                    if self.is_closed().await {
                        // closed somewhere else, the read failure is expected
                        return Ok(());
                    }
                    if err.kind() == ErrorKind::UnexpectedEof {
                        info!("connection closed by {}", self.peer);
                        self.close().await;
                        return Ok(());
                    }
                    error!("error reading packet ID from {}: {}", self.peer, err);
                    self.close().await;
                    return Err(err.into());
                }
            };

            let packet = match ServerboundPacket::read(packet_id, &mut reader).await {
                Ok(packet) => packet,
                Err(ProtocolError::Io(err)) => {
                    // the peer is gone; a kick has nowhere to go
                    error!("error reading packet from {}: {}", self.peer, err);
                    self.close().await;
                    return Err(err.into());
                }
                Err(err) => {
                    error!("error reading packet from {}: {}", self.peer, err);
                    self.close_with(&err.to_string()).await;
                    return Err(err.into());
                }
            };
            trace!("received packet {:?} from {}", packet, self.peer);

            if let Err(err) = self.dispatch(packet, handler).await {
                error!("error handling packet from {}: {}", self.peer, err);
                self.close_with(&err.to_string()).await;
                return Err(err);
            }
        }
    }

    async fn dispatch<H: PacketHandler>(
        &self,
        packet: ServerboundPacket,
        handler: &mut H,
    ) -> anyhow::Result<()> {
        match packet {
            ServerboundPacket::KeepAlive => handler.on_keep_alive().await,
            ServerboundPacket::Handshake(p) => handler.on_handshake(p).await,
            ServerboundPacket::Login(p) => handler.on_login(p).await,
            ServerboundPacket::PlayerPosition(p) => handler.on_player_position(p).await,
            ServerboundPacket::PlayerPositionLook(p) => handler.on_player_position_look(p).await,
        }
    }

    /// Serialised with every other writer; packets from concurrent tasks
    /// never interleave on the stream.
    pub async fn write_packet(
        &self,
        packet: &ClientboundPacket,
        flush: bool,
    ) -> ProtocolResult<()> {
        let mut writer = self.writer.lock().await;
        if writer.closed {
            return Err(ProtocolError::ConnectionClosed);
        }
        trace!("send packet {:?} to {}", packet, self.peer);
        let frame = packet.encode()?;
        writer.stream.write_all(&frame).await?;
        if flush {
            writer.stream.flush().await?;
        }
        Ok(())
    }

    pub async fn flush(&self) -> ProtocolResult<()> {
        let mut writer = self.writer.lock().await;
        if writer.closed {
            return Err(ProtocolError::ConnectionClosed);
        }
        writer.stream.flush().await?;
        Ok(())
    }

    /// Closes without a kick message.
    pub async fn close(&self) {
        self.shutdown(None).await;
    }

    /// Tries to deliver a Kick with the reason before the socket goes down.
    pub async fn close_with(&self, reason: &str) {
        self.shutdown(Some(reason)).await;
    }

    async fn shutdown(&self, reason: Option<&str>) {
        let mut writer = self.writer.lock().await;
        if writer.closed {
            return;
        }
        writer.closed = true;

        match reason {
            Some(reason) if !reason.is_empty() => {
                // best effort: write straight through the writer we already
                // hold so the kick cannot deadlock against a concurrent send
                if let Ok(frame) = (ClientboundPacket::Kick {
                    reason: reason.to_string(),
                })
                .encode()
                {
                    let _ = writer.stream.write_all(&frame).await;
                    let _ = writer.stream.flush().await;
                }
                info!(
                    "closed connection {}: {}",
                    self.peer,
                    chat::strip_color_codes(reason)
                );
            }
            _ => info!("closed connection {}", self.peer),
        }

        if let Err(err) = writer.stream.shutdown().await {
            error!("failed to close connection {}: {}", self.peer, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn pair() -> (Connection, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).await.unwrap();
        let (server_side, _) = listener.accept().await.unwrap();
        (Connection::new(server_side).unwrap(), client)
    }

    #[tokio::test]
    async fn kick_is_the_last_thing_on_the_wire() {
        let (conn, mut client) = pair().await;
        conn.close_with("bye").await;

        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        assert_eq!(
            received,
            vec![0xFF, 0x00, 0x03, 0x00, 0x62, 0x00, 0x79, 0x00, 0x65]
        );
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let (conn, mut client) = pair().await;
        conn.close_with("bye").await;
        conn.close_with("again").await;
        conn.close().await;

        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        // only the first kick made it out
        assert_eq!(received.len(), 9);
    }

    #[tokio::test]
    async fn writes_fail_after_close() {
        let (conn, _client) = pair().await;
        assert!(!conn.is_listening());
        assert!(!conn.is_closed().await);
        conn.close().await;
        assert!(conn.is_closed().await);
        let err = conn
            .write_packet(&ClientboundPacket::KeepAlive, true)
            .await
            .unwrap_err();
        assert!(matches!(err, ProtocolError::ConnectionClosed));
    }

    #[tokio::test]
    async fn unflushed_writes_are_buffered() {
        let (conn, mut client) = pair().await;
        conn.write_packet(&ClientboundPacket::TimeUpdate { time: 7 }, false)
            .await
            .unwrap();
        conn.write_packet(&ClientboundPacket::KeepAlive, true)
            .await
            .unwrap();

        let mut received = vec![0u8; 10];
        client.read_exact(&mut received).await.unwrap();
        assert_eq!(received[0], 0x04);
        assert_eq!(&received[1..9], &7i64.to_be_bytes());
        assert_eq!(received[9], 0x00);
    }
}
