//! Random-key decoding and tour cost.
//!
//! A position vector is mapped to a permutation by ranking: city `i`
//! is visited in the order of ascending `position[i]`. Only the relative
//! order of the keys matters, so the decoder is insensitive to the scale
//! and drift of positions.
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"

use crate::matrix::DistanceMatrix;

/// Decodes random keys into a closed tour.
///
/// Returns `n + 1` city indices: a permutation of `0..n` sorted by
/// ascending key, followed by the first index again. Equal keys keep
/// index order (stable sort). Keys are compared with [`f64::total_cmp`],
/// so any input, NaN included, yields a valid permutation.
///
/// # Examples
///
/// ```
/// use tsp_pso::pso::decode_tour;
///
/// assert_eq!(decode_tour(&[0.7, 0.1, 0.4]), vec![1, 2, 0, 1]);
/// assert_eq!(decode_tour(&[0.5, 0.5, 0.5]), vec![0, 1, 2, 0]);
/// ```
pub fn decode_tour(position: &[f64]) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..position.len()).collect();
    tour.sort_by(|&a, &b| position[a].total_cmp(&position[b]));
    if let Some(&first) = tour.first() {
        tour.push(first);
    }
    tour
}

/// Sums the edge costs along a closed tour, including the return edge.
///
/// # Panics
/// Panics if the tour names a city outside the matrix.
pub fn tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|edge| matrix.get(edge[0], edge[1])).sum()
}

/// Decodes a position and returns the cost of its tour.
pub fn position_cost(position: &[f64], matrix: &DistanceMatrix) -> f64 {
    tour_cost(&decode_tour(position), matrix)
}
