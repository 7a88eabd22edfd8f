//! Field identifiers, staggering, and the [`FieldSet`] bitmask.

use std::fmt;

/// Where a field lives on the staggered grid.
///
/// All fields share the same `(nx, ny)` index space; the centering
/// determines which neighbor operators are meaningful for the field,
/// not its storage shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Centering {
    /// One value per grid cell (surface height, bathymetry).
    Cell,
    /// One value per x-edge, staggered in the i direction (U velocity, F flux).
    XEdge,
    /// One value per y-edge, staggered in the j direction (V velocity, G flux).
    YEdge,
}

/// The nine named fields of the shallow water system.
///
/// The discriminant doubles as the field's bit position in [`FieldSet`]
/// and its slot index in the field store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Field {
    /// Surface height (cell-centered, prognostic).
    H = 0,
    /// Surface height tendency (cell-centered, diagnostic).
    Ht = 1,
    /// Bathymetry (cell-centered, time-invariant after initialization).
    B = 2,
    /// Velocity, x component (x-edge, prognostic).
    U = 3,
    /// U tendency (x-edge, diagnostic).
    Ut = 4,
    /// Velocity, y component (y-edge, prognostic).
    V = 5,
    /// V tendency (y-edge, diagnostic).
    Vt = 6,
    /// Mass flux, x component (x-edge, diagnostic).
    F = 7,
    /// Mass flux, y component (y-edge, diagnostic).
    G = 8,
}

impl Field {
    /// All fields, in slot order.
    pub const ALL: [Field; 9] = [
        Field::H,
        Field::Ht,
        Field::B,
        Field::U,
        Field::Ut,
        Field::V,
        Field::Vt,
        Field::F,
        Field::G,
    ];

    /// Number of distinct fields.
    pub const COUNT: usize = Self::ALL.len();

    /// The field's staggering on the grid.
    pub fn centering(self) -> Centering {
        match self {
            Field::H | Field::Ht | Field::B => Centering::Cell,
            Field::U | Field::Ut | Field::F => Centering::XEdge,
            Field::V | Field::Vt | Field::G => Centering::YEdge,
        }
    }

    /// Short lowercase name used in metrics and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::H => "h",
            Field::Ht => "ht",
            Field::B => "b",
            Field::U => "u",
            Field::Ut => "ut",
            Field::V => "v",
            Field::Vt => "vt",
            Field::F => "f",
            Field::G => "g",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Field`]s implemented as a 9-bit mask.
///
/// Used by kernels to declare which fields they read and write,
/// enabling the pipeline validator to reject write-write conflicts
/// and undeclared accesses at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FieldSet(u16);

impl FieldSet {
    /// Create an empty field set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing every field.
    pub fn all() -> Self {
        Field::ALL.into_iter().collect()
    }

    /// Insert a field into the set.
    pub fn insert(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    /// Check whether the set contains a field.
    pub fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Return the intersection of two sets (`self & other`).
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Check whether `self` is a subset of `other`.
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if the set contains no fields.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of fields in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the fields in the set, in slot order.
    pub fn iter(self) -> FieldSetIter {
        FieldSetIter { set: self, next: 0 }
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut set = Self::empty();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = FieldSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the fields in a [`FieldSet`], in slot order.
pub struct FieldSetIter {
    set: FieldSet,
    next: usize,
}

impl Iterator for FieldSetIter {
    type Item = Field;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < Field::COUNT {
            let field = Field::ALL[self.next];
            self.next += 1;
            if self.set.contains(field) {
                return Some(field);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn centering_partitions_fields() {
        let cells: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| f.centering() == Centering::Cell)
            .collect();
        let x_edges: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| f.centering() == Centering::XEdge)
            .collect();
        let y_edges: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| f.centering() == Centering::YEdge)
            .collect();
        assert_eq!(cells, vec![Field::H, Field::Ht, Field::B]);
        assert_eq!(x_edges, vec![Field::U, Field::Ut, Field::F]);
        assert_eq!(y_edges, vec![Field::V, Field::Vt, Field::G]);
    }

    #[test]
    fn all_set_contains_every_field() {
        let all = FieldSet::all();
        assert_eq!(all.len(), Field::COUNT);
        for field in Field::ALL {
            assert!(all.contains(field));
        }
    }

    #[test]
    fn iter_yields_slot_order() {
        let set: FieldSet = [Field::G, Field::H, Field::U].into_iter().collect();
        let fields: Vec<_> = set.iter().collect();
        assert_eq!(fields, vec![Field::H, Field::U, Field::G]);
    }

    fn arb_field() -> impl Strategy<Value = Field> {
        (0..Field::COUNT).prop_map(|i| Field::ALL[i])
    }

    fn arb_field_set() -> impl Strategy<Value = FieldSet> {
        prop::collection::vec(arb_field(), 0..9)
            .prop_map(|fields| fields.into_iter().collect::<FieldSet>())
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_field_set(), b in arb_field_set()) {
            prop_assert_eq!(a.union(b), b.union(a));
        }

        #[test]
        fn intersection_with_empty(a in arb_field_set()) {
            prop_assert_eq!(a.intersection(FieldSet::empty()), FieldSet::empty());
        }

        #[test]
        fn subset_reflexive(a in arb_field_set()) {
            prop_assert!(a.is_subset(a));
        }

        #[test]
        fn insert_contains(field in arb_field()) {
            let mut set = FieldSet::empty();
            set.insert(field);
            prop_assert!(set.contains(field));
            prop_assert_eq!(set.len(), 1);
        }

        #[test]
        fn len_matches_iter_count(a in arb_field_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }
    }
}
