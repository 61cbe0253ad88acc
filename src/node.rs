use crate::bitmap::Bitmap;

/// One level of the address trie.
///
/// `bitmap` records the byte value consumed at this level; `children` holds
/// the next level, keyed by the following byte of the address. The child
/// array grows lazily to the highest index in use and only ever shrinks from
/// the end, so surviving children keep their index.
#[derive(Clone, Default)]
pub struct Node {
    pub bitmap: Bitmap,
    pub children: Vec<Option<Box<Node>>>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, octets: &[u8; 16], offset: usize, depth: usize) {
        self.bitmap.set(octets[offset], true);
        if depth == 0 {
            return;
        }
        let idx = usize::from(octets[offset + 1]);
        if idx >= self.children.len() {
            self.children.resize_with(idx + 1, || None);
        }
        self.children[idx]
            .get_or_insert_with(|| Box::new(Node::new()))
            .insert(octets, offset + 1, depth - 1);
    }

    pub fn contains(&self, octets: &[u8; 16], offset: usize, depth: usize) -> bool {
        if !self.bitmap.is_set(octets[offset]) {
            return false;
        }
        if depth == 0 {
            return true;
        }
        let idx = usize::from(octets[offset + 1]);
        match self.children.get(idx) {
            Some(Some(child)) => child.contains(octets, offset + 1, depth - 1),
            _ => false,
        }
    }

    /// Removes the address path below this node.
    ///
    /// Returns `(removed, now_empty)`: whether the address was present, and
    /// whether this node's subtree became empty so the parent must detach it.
    /// Nothing is mutated unless the full path down to the terminal level was
    /// present.
    pub fn remove(&mut self, octets: &[u8; 16], offset: usize, depth: usize) -> (bool, bool) {
        let value = octets[offset];
        if !self.bitmap.is_set(value) {
            return (false, false);
        }
        if depth == 0 {
            // Terminal level: the bit is the address marker itself and a
            // terminal node never has children.
            self.bitmap.set(value, false);
            return (true, true);
        }
        let idx = usize::from(octets[offset + 1]);
        let Some(Some(child)) = self.children.get_mut(idx) else {
            return (false, false);
        };
        let (removed, child_empty) = child.remove(octets, offset + 1, depth - 1);
        if !removed {
            return (false, false);
        }
        if child_empty {
            self.children[idx] = None;
            if idx + 1 == self.children.len() {
                // Shrink only from the end; interior holes must stay
                // addressable for surviving higher children.
                match self.children.iter().rposition(|c| c.is_some()) {
                    Some(last) => self.children.truncate(last + 1),
                    None => self.children.clear(),
                }
            }
        }
        let now_empty = self.children.is_empty();
        if now_empty {
            self.bitmap.set(value, false);
        }
        (true, now_empty)
    }
}
