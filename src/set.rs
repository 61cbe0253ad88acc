use std::net::IpAddr;

use crate::node::Node;

const V4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Membership set for IP addresses backed by a layered bitmap trie.
///
/// Addresses are keyed by their canonical 16-byte form (IPv4 maps to
/// `::ffff:a.b.c.d`), one trie level per octet. Memory grows with the number
/// of distinct octet prefixes stored, not with the size of the address
/// space, and removal prunes subtrees as soon as they empty.
#[derive(Clone)]
pub struct IpSet {
    root: Node,
    start: usize,
    levels: usize,
}

impl IpSet {
    /// Creates an empty set.
    ///
    /// With `ipv4_only` the trie walks only the four IPv4 octets (bytes
    /// 12-15 of the canonical form), shortening every operation from 16
    /// levels to 4. An IPv4-only set must only be given IPv4 or IPv4-mapped
    /// IPv6 addresses; anything else is a caller bug caught by a debug
    /// assertion.
    pub fn new(ipv4_only: bool) -> Self {
        let (start, levels) = if ipv4_only { (12, 4) } else { (0, 16) };
        Self {
            root: Node::new(),
            start,
            levels,
        }
    }

    /// Inserts an address into the set. Inserting an address that is already
    /// present leaves the set unchanged.
    pub fn insert(&mut self, addr: impl Into<IpAddr>) {
        let octets = self.octets(addr.into());
        self.root.insert(&octets, self.start, self.levels - 1);
    }

    /// Returns `true` if the address is present in the set.
    pub fn contains(&self, addr: impl Into<IpAddr>) -> bool {
        let octets = self.octets(addr.into());
        self.root.contains(&octets, self.start, self.levels - 1)
    }

    /// Removes an address from the set.
    ///
    /// Returns `true` if the address was present, `false` otherwise. Emptied
    /// subtrees are pruned on the way back up; the root itself always stays
    /// allocated.
    pub fn remove(&mut self, addr: impl Into<IpAddr>) -> bool {
        let octets = self.octets(addr.into());
        self.root.remove(&octets, self.start, self.levels - 1).0
    }

    fn octets(&self, addr: IpAddr) -> [u8; 16] {
        let octets = canonical(addr);
        debug_assert!(
            self.start == 0 || octets[..12] == V4_MAPPED_PREFIX,
            "IPv4-only set given a non-IPv4 address: {addr}"
        );
        octets
    }
}

impl Default for IpSet {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Canonical 16-byte form shared by both address families.
pub(crate) fn canonical(addr: IpAddr) -> [u8; 16] {
    match addr {
        IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
        IpAddr::V6(v6) => v6.octets(),
    }
}
