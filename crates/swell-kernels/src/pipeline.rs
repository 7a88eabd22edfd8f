//! Pipeline validation.
//!
//! [`validate_pipeline`] runs once before a simulation starts to check
//! the kernel list for structural errors and build the [`WritePlan`],
//! the map from each field to the kernel that produces it.

use indexmap::IndexMap;
use swell_core::Field;

use crate::kernel::Kernel;

use std::error::Error;
use std::fmt;

/// Which kernel writes each field, in pipeline order.
///
/// Built once by [`validate_pipeline`]. The driver uses it for error
/// attribution; tests use it to assert dataflow structure.
#[derive(Debug)]
#[must_use]
pub struct WritePlan {
    writers: IndexMap<Field, usize>,
    kernel_count: usize,
}

impl WritePlan {
    /// Number of kernels covered by the plan.
    pub fn len(&self) -> usize {
        self.kernel_count
    }

    /// Whether the plan covers zero kernels.
    pub fn is_empty(&self) -> bool {
        self.kernel_count == 0
    }

    /// Index of the kernel that writes `field`, if any does.
    pub fn writer_of(&self, field: Field) -> Option<usize> {
        self.writers.get(&field).copied()
    }

    /// All written fields with their writer indices, in first-write order.
    pub fn writers(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.writers.iter().map(|(&field, &index)| (field, index))
    }
}

/// A detected write-write conflict between two kernels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConflict {
    /// The contested field.
    pub field: Field,
    /// Name of the first writer (earlier in pipeline order).
    pub first_writer: String,
    /// Name of the second writer (later in pipeline order).
    pub second_writer: String,
}

/// Errors from pipeline validation (startup-time, not per-step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No kernels registered.
    EmptyPipeline,

    /// Two or more kernels write the same field.
    WriteConflict(Vec<WriteConflict>),

    /// A kernel declares no written field.
    NoWrites {
        /// Which kernel.
        kernel: String,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no kernels"),
            Self::WriteConflict(conflicts) => {
                write!(f, "write-write conflicts: ")?;
                for (i, c) in conflicts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(
                        f,
                        "field {} written by '{}' and '{}'",
                        c.field, c.first_writer, c.second_writer,
                    )?;
                }
                Ok(())
            }
            Self::NoWrites { kernel } => {
                write!(f, "kernel '{kernel}' declares no written field")
            }
        }
    }
}

impl Error for PipelineError {}

/// Validate a kernel pipeline and build the [`WritePlan`].
///
/// Checks performed:
///
/// 1. Pipeline is non-empty.
/// 2. Every kernel writes at least one field.
/// 3. No two kernels write the same field. In-place updates own their
///    field outright; a second writer would make the step order
///    ambiguous.
pub fn validate_pipeline(kernels: &[Box<dyn Kernel>]) -> Result<WritePlan, PipelineError> {
    if kernels.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }

    let mut writers: IndexMap<Field, usize> = IndexMap::new();
    let mut conflicts: Vec<WriteConflict> = Vec::new();

    for (i, kernel) in kernels.iter().enumerate() {
        if kernel.writes().is_empty() {
            return Err(PipelineError::NoWrites {
                kernel: kernel.name().to_string(),
            });
        }
        for field in kernel.writes() {
            if let Some(&j) = writers.get(&field) {
                conflicts.push(WriteConflict {
                    field,
                    first_writer: kernels[j].name().to_string(),
                    second_writer: kernel.name().to_string(),
                });
            }
            writers.insert(field, i);
        }
    }
    if !conflicts.is_empty() {
        return Err(PipelineError::WriteConflict(conflicts));
    }

    Ok(WritePlan {
        writers,
        kernel_count: kernels.len(),
    })
}
