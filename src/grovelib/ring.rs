use crate::error::DecryptError;

pub type Value = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: Value,
    pub original_index: usize,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    element: Element,
    prev: usize,
    next: usize,
}

/// A circular, doubly-linked sequence stored in a fixed arena.
///
/// Slot `i` of the arena always holds the element that was `i`th in the input, so
/// elements are addressed by their original index no matter where mixing has moved them.
#[derive(Debug, Clone)]
pub struct Ring {
    nodes: Vec<Node>,
}

impl Ring {
    pub fn new(values: &[Value]) -> Result<Self, DecryptError> {
        let len = values.len();
        if len < 2 {
            return Err(DecryptError::DegenerateSequence { len });
        }
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, value)| Node {
                element: Element {
                    value: *value,
                    original_index: i,
                },
                prev: (i + len - 1) % len,
                next: (i + 1) % len,
            })
            .collect();
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get an element by original index. Returns None if the index is out-of-bounds.
    pub fn get(&self, original_index: usize) -> Option<&Element> {
        self.nodes.get(original_index).map(|n| &n.element)
    }

    /// Move an element `offset` places around the ring. A full lap is `len() - 1` places,
    /// since the element does not count itself, so offsets that are a multiple of that
    /// leave the ring untouched.
    pub fn move_by(&mut self, original_index: usize, offset: Value) {
        let span = self.nodes.len() - 1;
        // truncating remainder: keeps the sign of offset
        let displacement = offset % span as Value;
        if displacement == 0 {
            return;
        }
        let Node { prev, next, .. } = self.nodes[original_index];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;

        // the remaining ring has `span` nodes, so either direction reaches the same anchor
        let steps = displacement.unsigned_abs() as usize;
        let forward = displacement > 0;
        let (steps, forward) = if steps * 2 > span {
            (span - steps, !forward)
        } else {
            (steps, forward)
        };
        let mut anchor = prev;
        for _ in 0..steps {
            anchor = if forward {
                self.nodes[anchor].next
            } else {
                self.nodes[anchor].prev
            };
        }

        let after = self.nodes[anchor].next;
        self.nodes[original_index].prev = anchor;
        self.nodes[original_index].next = after;
        self.nodes[anchor].next = original_index;
        self.nodes[after].prev = original_index;
        log::trace!(
            "moved {} by {} to sit after {}",
            original_index,
            displacement,
            anchor
        );
    }

    pub fn find_by_value(&self, value: Value) -> Option<&Element> {
        self.nodes
            .iter()
            .map(|n| &n.element)
            .find(|e| e.value == value)
    }

    /// The element `offset` places forward of `start`, wrapping around as often as needed.
    pub fn element_at(&self, start: usize, offset: usize) -> &Element {
        let mut current = start;
        for _ in 0..offset % self.nodes.len() {
            current = self.nodes[current].next;
        }
        &self.nodes[current].element
    }

    /// Every element in current ring order, beginning at `start`.
    pub fn iter_from(&self, start: usize) -> RingIter<'_> {
        RingIter {
            ring: self,
            current: start,
            remaining: self.nodes.len(),
        }
    }

    pub fn values_from(&self, start: usize) -> Vec<Value> {
        self.iter_from(start).map(|e| e.value).collect()
    }

    /// Check that `next` forms a single cycle through every node and that `prev` mirrors it.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.nodes.len()];
        let mut current = 0;
        for _ in 0..self.nodes.len() {
            if seen[current] {
                return false;
            }
            seen[current] = true;
            let next = self.nodes[current].next;
            if self.nodes[next].prev != current {
                return false;
            }
            current = next;
        }
        current == 0 && seen.into_iter().all(|s| s)
    }
}

impl std::ops::Index<usize> for Ring {
    type Output = Element;

    fn index(&self, original_index: usize) -> &Self::Output {
        &self.nodes[original_index].element
    }
}

#[derive(Debug)]
pub struct RingIter<'a> {
    ring: &'a Ring,
    current: usize,
    remaining: usize,
}

impl<'a> Iterator for RingIter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = &self.ring.nodes[self.current];
        self.current = node.next;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
