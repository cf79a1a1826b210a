//! Dense symmetric cost matrix.

use crate::error::{Error, Result};
use crate::models::Location;

use super::haversine_km;

/// A dense k×k symmetric cost matrix stored in row-major order.
///
/// One row/column per selected event, in selection order. The diagonal is
/// always zero; an edge exists between distinct vertices `i` and `j` iff
/// `get(i, j) > 0`. Because zero doubles as "no edge", building from
/// locations rejects coincident distinct points rather than silently
/// disconnecting them.
///
/// # Examples
///
/// ```
/// use hamiltour::models::Location;
/// use hamiltour::distance::CostMatrix;
///
/// let events = vec![
///     Location::new(0, "a", 0.0, 0.0).unwrap(),
///     Location::new(1, "b", 0.0, 1.0).unwrap(),
///     Location::new(2, "c", 1.0, 0.0).unwrap(),
/// ];
/// let m = CostMatrix::from_locations(&events).unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.get(1, 1), 0.0);
/// assert!(m.has_edge(0, 2));
/// assert!((m.get(0, 1) - m.get(1, 0)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Computes the haversine cost matrix for a selection of events.
    ///
    /// Fails with [`Error::InvalidInput`] for an empty selection and with
    /// [`Error::CoincidentLocations`] if two distinct events share exact
    /// coordinates.
    pub fn from_locations(events: &[Location]) -> Result<Self> {
        if events.is_empty() {
            return Err(Error::invalid_input("cannot build a cost matrix for zero events"));
        }
        let k = events.len();
        let mut matrix = Self {
            data: vec![0.0; k * k],
            size: k,
        };
        for i in 0..k {
            for j in (i + 1)..k {
                let d = haversine_km(&events[i], &events[j]);
                if d == 0.0 {
                    return Err(Error::CoincidentLocations { a: i, b: j });
                }
                matrix.set(i, j, d);
                matrix.set(j, i, d);
            }
        }
        Ok(matrix)
    }

    /// Creates a cost matrix from an explicit k×k grid.
    ///
    /// Intended for tests and pre-computed adjacency graphs (weight 1 for
    /// edge, 0 for no edge). Returns `None` if the data length doesn't
    /// match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost of travelling from vertex `from` to vertex `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if vertices `from` and `to` are joined by an edge.
    ///
    /// The diagonal never carries an edge; a zero off-diagonal weight
    /// means "not adjacent".
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to && self.get(from, to) != 0.0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
