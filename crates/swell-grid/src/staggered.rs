//! The [`StaggeredGrid`] and its neighbor operators.

use crate::error::GridError;

/// Index geometry of a staggered grid on a 2D torus.
///
/// Cells, x-edges, and y-edges all share the index space
/// `(i, j) ∈ [0, nx) × [0, ny)`; an x-edge `(i, j)` carries the U
/// velocity between the cells to its west and east, a y-edge the V
/// velocity between the cells to its south and north. The staggering
/// is expressed entirely through the neighbor operators below, each a
/// pure offset wrapped modulo the extent. There is no boundary
/// special-casing: the topology is always periodic.
///
/// Operators come in the families the scheme needs:
///
/// - edge → adjacent cells (`east_cell`, ..., `south_cell`), used by
///   the flux and pressure-gradient terms;
/// - cell → adjacent edges (`east_edge`, ..., `south_edge`), the
///   inverse mapping, used by the height tendency;
/// - same-orientation edge neighbors (`edge_east`, `edge_west`,
///   `edge_north`, `edge_south`), used by the self-advection terms;
/// - cross-orientation corner edges ([`x_edge_corners`](Self::x_edge_corners),
///   [`y_edge_corners`](Self::y_edge_corners)), used to interpolate
///   the perpendicular velocity at an edge;
/// - cross-orientation straight neighbors (`vnorth`/`vsouth` on the U
///   grid, `heast`/`hwest` on the V grid), used by the transverse
///   advection derivatives.
///
/// All operators return flat row-major ranks (`i * ny + j`) so kernels
/// can index field buffers directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredGrid {
    nx: u32,
    ny: u32,
}

impl StaggeredGrid {
    /// Maximum extent per axis: offsets are computed in `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with extents `nx × ny`.
    ///
    /// Returns [`GridError::EmptyGrid`] if either extent is zero, or
    /// [`GridError::DimensionTooLarge`] if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    ///
    /// # Examples
    ///
    /// ```
    /// use swell_grid::StaggeredGrid;
    ///
    /// let grid = StaggeredGrid::new(16, 8).unwrap();
    /// assert_eq!(grid.cell_count(), 128);
    ///
    /// // Periodic wrap: the west neighbor of column 0 is column 15.
    /// assert_eq!(grid.west_cell(0, 3), grid.rank(15, 3));
    /// ```
    pub fn new(nx: u32, ny: u32) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::EmptyGrid);
        }
        if nx > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "nx",
                value: nx,
                max: Self::MAX_DIM,
            });
        }
        if ny > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "ny",
                value: ny,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { nx, ny })
    }

    /// Extent in the i (x) direction.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Extent in the j (y) direction.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Total number of positions per field (`nx * ny`).
    pub fn cell_count(&self) -> usize {
        (self.nx as usize) * (self.ny as usize)
    }

    /// Wrap an i offset onto `[0, nx)`.
    pub fn wrap_i(&self, i: i32) -> i32 {
        let n = self.nx as i32;
        ((i % n) + n) % n
    }

    /// Wrap a j offset onto `[0, ny)`.
    pub fn wrap_j(&self, j: i32) -> i32 {
        let n = self.ny as i32;
        ((j % n) + n) % n
    }

    /// Flat row-major rank of an in-bounds position.
    pub fn rank(&self, i: i32, j: i32) -> usize {
        debug_assert!(i >= 0 && (i as u32) < self.nx);
        debug_assert!(j >= 0 && (j as u32) < self.ny);
        (i as usize) * (self.ny as usize) + (j as usize)
    }

    /// Position of a flat rank.
    pub fn coord(&self, rank: usize) -> (i32, i32) {
        debug_assert!(rank < self.cell_count());
        let ny = self.ny as usize;
        ((rank / ny) as i32, (rank % ny) as i32)
    }

    /// Wrapped rank of the position offset by `(di, dj)`.
    fn at(&self, i: i32, j: i32, di: i32, dj: i32) -> usize {
        self.rank(self.wrap_i(i + di), self.wrap_j(j + dj))
    }

    // ── Edge → cell ─────────────────────────────────────────────

    /// Cell east of the x-edge `(i, j)`.
    pub fn east_cell(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 1, 0)
    }

    /// Cell west of the x-edge `(i, j)`.
    pub fn west_cell(&self, i: i32, j: i32) -> usize {
        self.at(i, j, -1, 0)
    }

    /// Cell north of the y-edge `(i, j)`.
    pub fn north_cell(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, 1)
    }

    /// Cell south of the y-edge `(i, j)`.
    pub fn south_cell(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, -1)
    }

    // ── Cell → edge (inverse of the above) ──────────────────────

    /// x-edge on the east side of the cell `(i, j)`.
    pub fn east_edge(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 1, 0)
    }

    /// x-edge on the west side of the cell `(i, j)`.
    pub fn west_edge(&self, i: i32, j: i32) -> usize {
        self.at(i, j, -1, 0)
    }

    /// y-edge on the north side of the cell `(i, j)`.
    pub fn north_edge(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, 1)
    }

    /// y-edge on the south side of the cell `(i, j)`.
    pub fn south_edge(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, -1)
    }

    // ── Same-orientation edge neighbors ─────────────────────────

    /// Next x-edge to the east of the x-edge `(i, j)`.
    pub fn edge_east(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 1, 0)
    }

    /// Next x-edge to the west of the x-edge `(i, j)`.
    pub fn edge_west(&self, i: i32, j: i32) -> usize {
        self.at(i, j, -1, 0)
    }

    /// Next y-edge to the north of the y-edge `(i, j)`.
    pub fn edge_north(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, 1)
    }

    /// Next y-edge to the south of the y-edge `(i, j)`.
    pub fn edge_south(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, -1)
    }

    // ── Cross-orientation corner edges ──────────────────────────

    /// The four y-edges at the corners of the x-edge `(i, j)`, in
    /// `[ne, nw, se, sw]` order.
    ///
    /// Corner offsets are `i ± 1` (east/west) and `j + {1, 0}`
    /// (north/south) — the convention of the reference scheme, not the
    /// symmetric half-index convention of textbook C-grids.
    pub fn x_edge_corners(&self, i: i32, j: i32) -> [usize; 4] {
        [
            self.at(i, j, 1, 1),  // ne
            self.at(i, j, -1, 1), // nw
            self.at(i, j, 1, 0),  // se
            self.at(i, j, -1, 0), // sw
        ]
    }

    /// The four x-edges at the corners of the y-edge `(i, j)`, in
    /// `[en, es, wn, ws]` order.
    ///
    /// Corner offsets are `i + {1, 0}` (east/west) and `j ± 1`
    /// (north/south), mirroring [`x_edge_corners`](Self::x_edge_corners).
    pub fn y_edge_corners(&self, i: i32, j: i32) -> [usize; 4] {
        [
            self.at(i, j, 1, 1),  // en
            self.at(i, j, 1, -1), // es
            self.at(i, j, 0, 1),  // wn
            self.at(i, j, 0, -1), // ws
        ]
    }

    // ── Cross-orientation straight neighbors ────────────────────

    /// x-edge one step north on the V grid (transverse advection of U).
    pub fn vnorth(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, 1)
    }

    /// x-edge one step south on the V grid (transverse advection of U).
    pub fn vsouth(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 0, -1)
    }

    /// y-edge one step east on the U grid (transverse advection of V).
    pub fn heast(&self, i: i32, j: i32) -> usize {
        self.at(i, j, 1, 0)
    }

    /// y-edge one step west on the U grid (transverse advection of V).
    pub fn hwest(&self, i: i32, j: i32) -> usize {
        self.at(i, j, -1, 0)
    }

    /// Iterate over every position as `(i, j, rank)` in rank order.
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32, usize)> + '_ {
        let ny = self.ny as usize;
        (0..self.cell_count()).map(move |rank| ((rank / ny) as i32, (rank % ny) as i32, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_zero_extent() {
        assert_eq!(StaggeredGrid::new(0, 4), Err(GridError::EmptyGrid));
        assert_eq!(StaggeredGrid::new(4, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_extent_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            StaggeredGrid::new(big, 4),
            Err(GridError::DimensionTooLarge { name: "nx", .. })
        ));
        assert!(matches!(
            StaggeredGrid::new(4, big),
            Err(GridError::DimensionTooLarge { name: "ny", .. })
        ));
    }

    #[test]
    fn rank_is_row_major() {
        let g = StaggeredGrid::new(3, 4).unwrap();
        assert_eq!(g.rank(0, 0), 0);
        assert_eq!(g.rank(0, 3), 3);
        assert_eq!(g.rank(1, 0), 4);
        assert_eq!(g.rank(2, 3), 11);
    }

    #[test]
    fn coord_inverts_rank() {
        let g = StaggeredGrid::new(3, 4).unwrap();
        for rank in 0..g.cell_count() {
            let (i, j) = g.coord(rank);
            assert_eq!(g.rank(i, j), rank);
        }
    }

    #[test]
    fn periodicity_in_i() {
        let g = StaggeredGrid::new(5, 3).unwrap();
        assert_eq!(g.west_cell(0, 1), g.rank(4, 1));
        assert_eq!(g.east_cell(4, 1), g.rank(0, 1));
        assert_eq!(g.west_edge(0, 2), g.rank(4, 2));
        assert_eq!(g.east_edge(4, 2), g.rank(0, 2));
    }

    #[test]
    fn periodicity_in_j() {
        let g = StaggeredGrid::new(3, 5).unwrap();
        assert_eq!(g.south_cell(1, 0), g.rank(1, 4));
        assert_eq!(g.north_cell(1, 4), g.rank(1, 0));
        assert_eq!(g.south_edge(2, 0), g.rank(2, 4));
        assert_eq!(g.north_edge(2, 4), g.rank(2, 0));
    }

    #[test]
    fn x_edge_corners_interior() {
        let g = StaggeredGrid::new(5, 5).unwrap();
        let [ne, nw, se, sw] = g.x_edge_corners(2, 2);
        assert_eq!(ne, g.rank(3, 3));
        assert_eq!(nw, g.rank(1, 3));
        assert_eq!(se, g.rank(3, 2));
        assert_eq!(sw, g.rank(1, 2));
    }

    #[test]
    fn y_edge_corners_interior() {
        let g = StaggeredGrid::new(5, 5).unwrap();
        let [en, es, wn, ws] = g.y_edge_corners(2, 2);
        assert_eq!(en, g.rank(3, 3));
        assert_eq!(es, g.rank(3, 1));
        assert_eq!(wn, g.rank(2, 3));
        assert_eq!(ws, g.rank(2, 1));
    }

    #[test]
    fn corners_wrap_at_origin() {
        let g = StaggeredGrid::new(4, 4).unwrap();
        let [ne, nw, se, sw] = g.x_edge_corners(0, 0);
        assert_eq!(ne, g.rank(1, 1));
        assert_eq!(nw, g.rank(3, 1));
        assert_eq!(se, g.rank(1, 0));
        assert_eq!(sw, g.rank(3, 0));
    }

    #[test]
    fn transverse_neighbors() {
        let g = StaggeredGrid::new(4, 4).unwrap();
        assert_eq!(g.vnorth(1, 3), g.rank(1, 0));
        assert_eq!(g.vsouth(1, 0), g.rank(1, 3));
        assert_eq!(g.heast(3, 1), g.rank(0, 1));
        assert_eq!(g.hwest(0, 1), g.rank(3, 1));
    }

    #[test]
    fn positions_visit_every_rank_once() {
        let g = StaggeredGrid::new(3, 3).unwrap();
        let ranks: Vec<usize> = g.positions().map(|(_, _, r)| r).collect();
        assert_eq!(ranks, (0..9).collect::<Vec<_>>());
        for (i, j, r) in g.positions() {
            assert_eq!(g.rank(i, j), r);
        }
    }

    #[test]
    fn single_cell_wraps_to_self() {
        let g = StaggeredGrid::new(1, 1).unwrap();
        assert_eq!(g.east_cell(0, 0), 0);
        assert_eq!(g.west_cell(0, 0), 0);
        assert_eq!(g.x_edge_corners(0, 0), [0, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn wrap_lands_in_range(nx in 1u32..64, ny in 1u32..64, i in -200i32..200, j in -200i32..200) {
            let g = StaggeredGrid::new(nx, ny).unwrap();
            let wi = g.wrap_i(i);
            let wj = g.wrap_j(j);
            prop_assert!(wi >= 0 && (wi as u32) < nx);
            prop_assert!(wj >= 0 && (wj as u32) < ny);
        }

        #[test]
        fn east_then_west_is_identity(nx in 1u32..32, ny in 1u32..32, i in 0i32..32, j in 0i32..32) {
            let g = StaggeredGrid::new(nx, ny).unwrap();
            let i = i % nx as i32;
            let j = j % ny as i32;
            let east = g.coord(g.east_cell(i, j));
            prop_assert_eq!(g.west_cell(east.0, east.1), g.rank(i, j));
        }

        #[test]
        fn north_then_south_is_identity(nx in 1u32..32, ny in 1u32..32, i in 0i32..32, j in 0i32..32) {
            let g = StaggeredGrid::new(nx, ny).unwrap();
            let i = i % nx as i32;
            let j = j % ny as i32;
            let north = g.coord(g.north_cell(i, j));
            prop_assert_eq!(g.south_cell(north.0, north.1), g.rank(i, j));
        }

        #[test]
        fn edge_and_cell_operators_agree(nx in 1u32..32, ny in 1u32..32, i in 0i32..32, j in 0i32..32) {
            // The cell→edge family is the same offset map as edge→cell.
            let g = StaggeredGrid::new(nx, ny).unwrap();
            let i = i % nx as i32;
            let j = j % ny as i32;
            prop_assert_eq!(g.east_edge(i, j), g.east_cell(i, j));
            prop_assert_eq!(g.west_edge(i, j), g.west_cell(i, j));
            prop_assert_eq!(g.north_edge(i, j), g.north_cell(i, j));
            prop_assert_eq!(g.south_edge(i, j), g.south_cell(i, j));
        }
    }
}
