//! Compact membership set for IPv4 and IPv6 addresses.
//!
//! Addresses are stored in a layered bitmap trie: every level holds a
//! 256-bit presence bitmap plus a lazily grown child array, one level per
//! octet of the address. Lookups touch at most one node per octet, and
//! removal prunes branches as soon as they empty, so memory tracks the
//! number of distinct prefixes actually stored.
//!
//! ```
//! use std::net::Ipv4Addr;
//!
//! use ipset::IpSet;
//!
//! let mut set = IpSet::new(false);
//! set.insert(Ipv4Addr::new(192, 0, 2, 1));
//! assert!(set.contains(Ipv4Addr::new(192, 0, 2, 1)));
//! assert!(set.remove(Ipv4Addr::new(192, 0, 2, 1)));
//! assert!(!set.contains(Ipv4Addr::new(192, 0, 2, 1)));
//! ```

pub mod bitmap;
pub use bitmap::Bitmap;

mod node;

pub mod set;
pub use set::IpSet;
