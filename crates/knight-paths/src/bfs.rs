use std::collections::HashSet;

use knight_core::Square;
use log::{debug, trace};

use crate::KnightPathFinder;
use crate::error::SearchError;
use crate::finder::SearchNode;
use crate::queue::Queue;
use crate::traits::Pather;

/// Per-query search state: the FIFO frontier and the set of expanded squares.
struct Frontier<'a, P> {
    pather: &'a P,
    queue: Queue<SearchNode>,
    visited: HashSet<Square>,
    nbuf: Vec<Square>,
}

impl<'a, P: Pather> Frontier<'a, P> {
    fn new(pather: &'a P, source: Square) -> Self {
        let mut queue = Queue::new();
        queue.enqueue(SearchNode::source(source));
        Self {
            pather,
            queue,
            visited: HashSet::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Mark `node` visited and enqueue all of its neighbours one move
    /// further out. Returns `false` without doing anything if the square was
    /// already expanded.
    ///
    /// Neighbours are not checked against `visited` here; stale duplicates
    /// are dropped when they reach the front of the queue.
    fn expand(&mut self, node: SearchNode) -> bool {
        if !self.visited.insert(node.square) {
            return false;
        }
        self.nbuf.clear();
        self.pather.neighbors(node.square, &mut self.nbuf);
        trace!(
            "expand {} at distance {} ({} successors)",
            node.square,
            node.distance,
            self.nbuf.len()
        );
        let next = node.distance + 1;
        for &n in &self.nbuf {
            self.queue.enqueue(SearchNode::new(n, next));
        }
        true
    }
}

impl KnightPathFinder {
    /// Minimum number of knight moves from `source` to `destination`.
    ///
    /// Returns `Ok(0)` when the squares coincide. Fails with
    /// [`SearchError::InvalidSquare`] before searching if either square is
    /// off the board (source is checked first), and with
    /// [`SearchError::PathNotFound`] once every square reachable from
    /// `source` has been expanded without meeting `destination`.
    pub fn find(&self, source: Square, destination: Square) -> Result<u32, SearchError> {
        self.check(source)?;
        self.check(destination)?;
        debug!("knight search {source} -> {destination} on {} board", self.board());

        let mut frontier = Frontier::new(&self.pather, source);
        while let Some(node) = frontier.queue.dequeue() {
            // First dequeue of the destination carries its minimum distance.
            if node.square == destination {
                debug!(
                    "reached {destination} in {} moves after expanding {} squares",
                    node.distance,
                    frontier.visited.len()
                );
                return Ok(node.distance);
            }
            frontier.expand(node);
        }

        debug!(
            "frontier exhausted after expanding {} squares, {destination} unreachable",
            frontier.visited.len()
        );
        Err(SearchError::PathNotFound {
            source,
            destination,
        })
    }

    /// Every square reachable from `source`, each with its minimum move
    /// count, in non-decreasing distance order. The first entry is always
    /// `source` at distance 0.
    pub fn reachable(&self, source: Square) -> Result<Vec<SearchNode>, SearchError> {
        self.check(source)?;

        let mut frontier = Frontier::new(&self.pather, source);
        let mut reached = Vec::new();
        while let Some(node) = frontier.queue.dequeue() {
            if frontier.expand(node) {
                reached.push(node);
            }
        }

        debug!(
            "{} of {} squares reachable from {source}",
            reached.len(),
            self.board().len()
        );
        Ok(reached)
    }
}
