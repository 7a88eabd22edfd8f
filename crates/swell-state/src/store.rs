//! The [`FieldStore`] and its borrow discipline.

use std::mem;

use swell_core::{Field, KernelError};

/// Owns the nine field buffers of a simulation.
///
/// Every buffer has the same length (the grid's cell count); the
/// staggering of a field is purely an interpretation of its indices,
/// so storage is uniform. Buffers are zero-initialized.
///
/// Kernels read several fields while writing exactly one. Rust's
/// aliasing rules forbid holding `&mut` into one slot and `&` into the
/// others through the same struct borrow, so the write buffer is moved
/// out with [`take`](Self::take), filled, and moved back with
/// [`put`](Self::put):
///
/// ```
/// use swell_core::Field;
/// use swell_state::FieldStore;
///
/// let mut store = FieldStore::new(16);
/// let mut f = store.take(Field::F);
/// {
///     let u = store.field(Field::U);
///     let h = store.field(Field::H);
///     for r in 0..16 {
///         f[r] = u[r] * h[r];
///     }
/// }
/// store.put(Field::F, f);
/// ```
#[derive(Clone, Debug)]
pub struct FieldStore {
    len: usize,
    slots: [Vec<f32>; Field::COUNT],
}

impl FieldStore {
    /// Allocate a store with `len` values per field, all zero.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            slots: std::array::from_fn(|_| vec![0.0; len]),
        }
    }

    /// Length of every field buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffers are zero-length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow a field's buffer.
    ///
    /// # Panics
    ///
    /// Panics if the field is currently taken.
    pub fn field(&self, field: Field) -> &[f32] {
        let slot = &self.slots[field as usize];
        assert!(
            !slot.is_empty() || self.len == 0,
            "field {field} is taken"
        );
        slot
    }

    /// Borrow a field's buffer mutably.
    ///
    /// For in-place initialization and the prognostic updates, where a
    /// single field is both read and written.
    ///
    /// # Panics
    ///
    /// Panics if the field is currently taken.
    pub fn field_mut(&mut self, field: Field) -> &mut [f32] {
        let len = self.len;
        let slot = &mut self.slots[field as usize];
        assert!(!slot.is_empty() || len == 0, "field {field} is taken");
        slot
    }

    /// Move a field's buffer out of the store.
    ///
    /// The slot is left empty until [`put`](Self::put) returns the
    /// buffer. While taken, the remaining fields stay borrowable
    /// through [`field`](Self::field).
    pub fn take(&mut self, field: Field) -> Vec<f32> {
        mem::take(&mut self.slots[field as usize])
    }

    /// Return a buffer previously moved out with [`take`](Self::take).
    ///
    /// # Panics
    ///
    /// Panics if the buffer's length does not match the store.
    pub fn put(&mut self, field: Field, buffer: Vec<f32>) {
        assert_eq!(
            buffer.len(),
            self.len,
            "field {field} returned with wrong length"
        );
        self.slots[field as usize] = buffer;
    }

    /// Check a field's buffer length against an expected cell count.
    pub fn ensure_shape(&self, field: Field, expected: usize) -> Result<(), KernelError> {
        let actual = self.slots[field as usize].len();
        if actual != expected {
            return Err(KernelError::ShapeMismatch {
                field,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Fill a field's buffer with a constant.
    pub fn fill(&mut self, field: Field, value: f32) {
        self.field_mut(field).fill(value);
    }
}
