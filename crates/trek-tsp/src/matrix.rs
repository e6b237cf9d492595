use std::collections::BTreeMap;

use trek_core::{Cost, InputError};

/// Nested city-to-neighbour costs, the shape requests carry.
pub type NestedCosts = BTreeMap<String, BTreeMap<String, Cost>>;

/// A complete, possibly asymmetric, cost matrix over named cities.
///
/// Cities are indexed in ascending identifier order, which fixes the order
/// in which every strategy visits them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NestedCosts", into = "NestedCosts"))]
pub struct CostMatrix {
    cities: Vec<String>,
    // row-major, `cities.len()` squared
    costs: Vec<Cost>,
}

impl CostMatrix {
    /// Build a matrix from nested costs.
    ///
    /// Every neighbour must itself be a city, and every ordered pair of
    /// distinct cities must have an edge. Self edges are ignored.
    pub fn from_nested(nested: &NestedCosts) -> Result<Self, InputError> {
        if nested.is_empty() {
            return Err(InputError::EmptyMatrix);
        }
        let cities: Vec<String> = nested.keys().cloned().collect();
        let n = cities.len();

        for neighbours in nested.values() {
            if let Some(unknown) = neighbours.keys().find(|c| !nested.contains_key(*c)) {
                return Err(InputError::UnknownCity(unknown.clone()));
            }
        }

        let mut costs = vec![0; n * n];
        for (i, (from, neighbours)) in nested.iter().enumerate() {
            for (j, to) in cities.iter().enumerate() {
                if i == j {
                    continue;
                }
                let Some(&c) = neighbours.get(to) else {
                    return Err(InputError::MissingEdge {
                        from: from.clone(),
                        to: to.clone(),
                    });
                };
                costs[i * n + j] = c;
            }
        }
        Ok(Self { cities, costs })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always false: a matrix holds at least one city.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City identifiers in index order.
    #[inline]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Index of `city`.
    pub fn index(&self, city: &str) -> Result<usize, InputError> {
        self.cities
            .binary_search_by(|c| c.as_str().cmp(city))
            .map_err(|_| InputError::UnknownCity(city.to_string()))
    }

    /// Cost of the edge `from -> to`; zero on the diagonal.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> Cost {
        self.costs[from * self.len() + to]
    }

    /// Total cost of walking `tour` in order.
    pub fn walk_cost(&self, tour: &[usize]) -> Cost {
        tour.windows(2)
            .map(|w| self.cost(w[0], w[1]))
            .fold(0, Cost::saturating_add)
    }

    /// The nested form.
    pub fn to_nested(&self) -> NestedCosts {
        let n = self.len();
        self.cities
            .iter()
            .enumerate()
            .map(|(i, from)| {
                let row = self
                    .cities
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, to)| (to.clone(), self.costs[i * n + j]))
                    .collect();
                (from.clone(), row)
            })
            .collect()
    }
}

impl TryFrom<NestedCosts> for CostMatrix {
    type Error = InputError;

    fn try_from(nested: NestedCosts) -> Result<Self, Self::Error> {
        CostMatrix::from_nested(&nested)
    }
}

impl From<CostMatrix> for NestedCosts {
    fn from(m: CostMatrix) -> Self {
        m.to_nested()
    }
}
