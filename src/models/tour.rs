//! Closed tour over a set of points.
//!
//! # Representation
//!
//! Nodes live in an arena (`Vec`) owned by the tour and link to their
//! successor by index. The chain starting at the entry node is open: the
//! last node has no successor, and the closing edge `last → entry` is
//! reconstructed by the operations that need whole-cycle semantics
//! ([`Tour::distance`], [`Tour::edges`]). Nodes are never removed.
//!
//! # Complexity
//!
//! Both insertion heuristics are O(n) per point (one scan, O(1) splice),
//! so building an n-point tour is O(n²).

use std::fmt;
use std::iter;

use crate::error::{Result, TourError};

use super::{Location, Point};

#[derive(Debug, Clone)]
struct Node<P> {
    point: P,
    next: Option<usize>,
}

/// An ordered, logically closed sequence of points.
///
/// Points join the tour through one of two greedy insertion heuristics:
///
/// - [`insert_nearest`](Tour::insert_nearest) — after the closest existing point
/// - [`insert_smallest`](Tour::insert_smallest) — into the edge that grows the
///   tour length the least
///
/// Traversal order is tour order, not insertion order.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
///
/// let mut tour = Tour::new();
/// tour.insert_smallest(Point::new(0.0, 0.0)).unwrap();
/// tour.insert_smallest(Point::new(0.0, 100.0)).unwrap();
/// tour.insert_smallest(Point::new(100.0, 100.0)).unwrap();
///
/// assert_eq!(tour.size(), 3);
/// assert!((tour.distance() - 341.42).abs() < 0.01);
/// // The third point splits the only chain edge, right after the entry.
/// assert_eq!(tour.to_string(), "(0.0, 0.0)\n(100.0, 100.0)\n(0.0, 100.0)\nend");
/// ```
#[derive(Debug, Clone)]
pub struct Tour<P = Point> {
    nodes: Vec<Node<P>>,
    entry: Option<usize>,
}

impl<P> Tour<P> {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            entry: None,
        }
    }

    /// Number of points in the tour.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The point traversal starts from, or `None` for an empty tour.
    pub fn entry(&self) -> Option<&P> {
        self.entry.map(|idx| &self.nodes[idx].point)
    }

    /// Iterates over the points in traversal order, starting at the entry.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            nodes: &self.nodes,
            cursor: self.entry,
            remaining: self.nodes.len(),
        }
    }

    /// Iterates over the edges of the closed cycle.
    ///
    /// Yields each consecutive pair in traversal order followed by the
    /// closing edge from the last point back to the entry. A tour with
    /// fewer than two points has no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::models::{Point, Tour};
    ///
    /// let mut tour = Tour::new();
    /// tour.insert_nearest(Point::new(0.0, 0.0)).unwrap();
    /// tour.insert_nearest(Point::new(1.0, 0.0)).unwrap();
    ///
    /// let edges: Vec<_> = tour.edges().collect();
    /// assert_eq!(edges.len(), 2);
    /// assert_eq!(edges[1], (&Point::new(1.0, 0.0), &Point::new(0.0, 0.0)));
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (&P, &P)> + '_ {
        let closing = match (self.iter().last(), self.entry()) {
            (Some(last), Some(first)) if self.size() >= 2 => Some((last, first)),
            _ => None,
        };
        self.iter().zip(self.iter().skip(1)).chain(closing)
    }

    /// Node indices in traversal order.
    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.entry, move |&idx| self.nodes[idx].next)
    }

    /// Index of the last node in the chain.
    fn last_index(&self) -> Option<usize> {
        self.indices().last()
    }

    /// Links a new node holding `point` directly after node `after`.
    ///
    /// Returns the new node's index.
    fn splice_after(&mut self, after: usize, point: P) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            point,
            next: self.nodes[after].next,
        });
        self.nodes[after].next = Some(idx);
        idx
    }

    /// Makes `point` the sole node of an empty tour.
    fn push_entry(&mut self, point: P) -> usize {
        debug_assert!(self.entry.is_none(), "tour already has an entry");
        let idx = self.nodes.len();
        self.nodes.push(Node { point, next: None });
        self.entry = Some(idx);
        idx
    }

    /// Inserts `point` after `position`, or as the entry when `None`.
    fn place(&mut self, position: Option<usize>, point: P) -> usize {
        match position {
            Some(after) => self.splice_after(after, point),
            None => self.push_entry(point),
        }
    }
}

impl<P: Location> Tour<P> {
    /// Total length of the closed cycle, including the closing edge.
    ///
    /// Zero for tours with fewer than two points.
    pub fn distance(&self) -> f64 {
        if self.size() < 2 {
            return 0.0;
        }
        self.edges()
            .fold(0.0, |total, (from, to)| total + from.distance_to(to))
    }

    /// Nearest-neighbor insertion.
    ///
    /// Scans every point in the tour and inserts `point` immediately after
    /// the one closest to it. On equal distances the point met first in
    /// traversal order wins. An empty tour simply takes `point` as its entry.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidPoint`] if `point` fails [`Location::is_valid`];
    /// the tour is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::models::{Point, Tour};
    ///
    /// let mut tour = Tour::new();
    /// for (x, y) in [(0.0, 0.0), (10.0, 0.0), (1.0, 1.0)] {
    ///     tour.insert_nearest(Point::new(x, y)).unwrap();
    /// }
    /// // (1, 1) lands right after its nearest point (0, 0)
    /// let order: Vec<_> = tour.iter().map(|p| (p.x(), p.y())).collect();
    /// assert_eq!(order, vec![(0.0, 0.0), (1.0, 1.0), (10.0, 0.0)]);
    /// ```
    pub fn insert_nearest(&mut self, point: P) -> Result<()> {
        if !point.is_valid() {
            return Err(TourError::InvalidPoint);
        }

        let nearest = self
            .indices()
            .map(|idx| (idx, point.distance_to(&self.nodes[idx].point)))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let position = nearest.map(|(idx, _)| idx);
        let idx = self.place(position, point);
        tracing::trace!(
            node = idx,
            after = ?position,
            distance = ?nearest.map(|(_, d)| d),
            size = self.size(),
            "nearest insertion"
        );
        Ok(())
    }

    /// Cheapest (smallest total length) insertion.
    ///
    /// With fewer than two points, `point` is appended to the chain. With
    /// exactly two, the chain has a single edge, so the third point always
    /// lands right after the entry. Otherwise every edge `(t, t.next)` of the open chain is scored by the tour
    /// length that splicing `point` into it would produce,
    /// `distance() − d(t, t.next) + d(t, point) + d(point, t.next)`, and
    /// `point` is inserted into the lowest-scoring edge (first in traversal
    /// order on ties).
    ///
    /// The closing edge `last → entry` is never a candidate, so the new
    /// point is never placed after the last node by this method once the
    /// tour holds two or more points.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidPoint`] if `point` fails [`Location::is_valid`];
    /// the tour is not modified.
    pub fn insert_smallest(&mut self, point: P) -> Result<()> {
        if !point.is_valid() {
            return Err(TourError::InvalidPoint);
        }

        let (position, total) = match self.cheapest_edge(&point) {
            Some((idx, total)) => (Some(idx), Some(total)),
            None => (self.last_index(), None),
        };

        let idx = self.place(position, point);
        tracing::trace!(
            node = idx,
            after = ?position,
            distance = ?total,
            size = self.size(),
            "smallest insertion"
        );
        Ok(())
    }

    /// Finds the chain edge whose split by `point` yields the shortest tour.
    ///
    /// Returns the edge's start node and the resulting tour length, or `None`
    /// when the chain has no edges (fewer than two points).
    fn cheapest_edge(&self, point: &P) -> Option<(usize, f64)> {
        let current = self.distance();
        self.indices()
            .filter_map(|idx| {
                let next = self.nodes[idx].next?;
                let from = &self.nodes[idx].point;
                let to = &self.nodes[next].point;
                let total = current - from.distance_to(to)
                    + from.distance_to(point)
                    + point.distance_to(to);
                Some((idx, total))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl<P> Default for Tour<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one point per line in traversal order, followed by `end`.
impl<P: fmt::Display> fmt::Display for Tour<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in self.iter() {
            writeln!(f, "{point}")?;
        }
        write!(f, "end")
    }
}

/// Iterator over a tour's points in traversal order.
///
/// Created by [`Tour::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, P> {
    nodes: &'a [Node<P>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<&'a P> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Tour<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::{Location, Point, Tour};
    use proptest::prelude::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point::new(x, y))
    }

    fn cyclic_length(points: &[Point]) -> f64 {
        if points.len() < 2 {
            return 0.0;
        }
        (0..points.len())
            .map(|i| points[i].distance_to(&points[(i + 1) % points.len()]))
            .sum()
    }

    proptest! {
        /// Property: size equals the number of insertions, whatever the heuristic mix.
        #[test]
        fn prop_size_counts_insertions(
            inserts in prop::collection::vec((point_strategy(), any::<bool>()), 0..40)
        ) {
            let mut tour = Tour::new();
            for (k, (p, nearest)) in inserts.iter().enumerate() {
                if *nearest {
                    tour.insert_nearest(*p).expect("valid point");
                } else {
                    tour.insert_smallest(*p).expect("valid point");
                }
                prop_assert_eq!(tour.size(), k + 1);
                prop_assert_eq!(tour.iter().count(), k + 1);
            }
        }

        /// Property: distance is non-negative and independent of the entry point.
        #[test]
        fn prop_distance_rotation_invariant(
            points in prop::collection::vec(point_strategy(), 0..30),
            shift in 0usize..30
        ) {
            let mut tour = Tour::new();
            for p in &points {
                tour.insert_smallest(*p).expect("valid point");
            }
            let d = tour.distance();
            prop_assert!(d >= 0.0);

            let mut order: Vec<Point> = tour.iter().copied().collect();
            prop_assert!((cyclic_length(&order) - d).abs() < 1e-6);
            if !order.is_empty() {
                let k = shift % order.len();
                order.rotate_left(k);
            }
            prop_assert!((cyclic_length(&order) - d).abs() < 1e-6);
        }

        /// Property: cheapest insertion lands in the best chain edge.
        #[test]
        fn prop_smallest_is_minimal_over_chain_edges(
            points in prop::collection::vec(point_strategy(), 2..20),
            p in point_strategy()
        ) {
            let mut tour = Tour::new();
            for q in &points {
                tour.insert_smallest(*q).expect("valid point");
            }
            let before = tour.distance();
            let order: Vec<Point> = tour.iter().copied().collect();
            let best = order
                .windows(2)
                .map(|w| before - w[0].distance_to(&w[1]) + w[0].distance_to(&p) + p.distance_to(&w[1]))
                .fold(f64::INFINITY, f64::min);

            tour.insert_smallest(p).expect("valid point");
            prop_assert!((tour.distance() - best).abs() < 1e-6);
            // Never spliced after the last node.
            prop_assert_ne!(tour.iter().last().copied(), Some(p));
        }

        /// Property: nearest insertion places the point after a closest node.
        #[test]
        fn prop_nearest_follows_closest(
            points in prop::collection::vec(point_strategy(), 1..20),
            p in point_strategy()
        ) {
            let mut tour = Tour::new();
            for q in &points {
                tour.insert_nearest(*q).expect("valid point");
            }
            let closest = tour
                .iter()
                .map(|q| p.distance_to(q))
                .fold(f64::INFINITY, f64::min);

            tour.insert_nearest(p).expect("valid point");
            let order: Vec<Point> = tour.iter().copied().collect();
            let pos = order.iter().rposition(|q| *q == p).expect("inserted");
            prop_assert!(pos > 0);
            prop_assert_eq!(p.distance_to(&order[pos - 1]), closest);
        }

        /// Property: queries are pure.
        #[test]
        fn prop_queries_idempotent(points in prop::collection::vec(point_strategy(), 0..20)) {
            let mut tour = Tour::new();
            for q in &points {
                tour.insert_nearest(*q).expect("valid point");
            }
            prop_assert_eq!(tour.to_string(), tour.to_string());
            prop_assert_eq!(tour.distance().to_bits(), tour.distance().to_bits());
        }
    }
}
