//! Fixed bootstrap peers
//!
//! Hardcoded seed nodes are stamped with a last-seen time between one and
//! two weeks in the past, so a fresh node replaces them with live addresses
//! learned from the network instead of preferring the same static set.

use std::net::{Ipv4Addr, SocketAddrV4};

use serde::Serialize;

use crate::ports::{RandomSource, TimeSource};

/// Seconds in one week.
pub const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// A bootstrap peer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeerAddress {
    /// IPv4 address.
    pub ip: Ipv4Addr,
    /// Peer port.
    pub port: u16,
    /// Synthetic last-seen time (Unix seconds).
    pub last_seen: u64,
}

impl PeerAddress {
    /// Socket address of the peer.
    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.ip, self.port)
    }
}

/// Decode a compact seed entry. The value holds the address octets in
/// little-endian order, so `0x0100007f` is `127.0.0.1`.
pub fn decode_seed_ip(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_le_bytes())
}

/// Produces peer records for a network's fixed seed list.
pub struct SeedAddressGenerator<'a> {
    time: &'a dyn TimeSource,
    random: &'a dyn RandomSource,
}

impl<'a> SeedAddressGenerator<'a> {
    /// Create a generator over the given time and random sources.
    pub fn new(time: &'a dyn TimeSource, random: &'a dyn RandomSource) -> Self {
        Self { time, random }
    }

    /// Convert `seeds` into peer records on `port`, preserving order. Each
    /// `last_seen` lies in `[now - 2 weeks, now - 1 week]`.
    pub fn generate(&self, seeds: &[u32], port: u16) -> Vec<PeerAddress> {
        let now = self.time.now();
        seeds
            .iter()
            .map(|&raw| PeerAddress {
                ip: decode_seed_ip(raw),
                port,
                last_seen: now
                    .saturating_sub(ONE_WEEK_SECS)
                    .saturating_sub(self.random.below(ONE_WEEK_SECS)),
            })
            .collect()
    }
}
