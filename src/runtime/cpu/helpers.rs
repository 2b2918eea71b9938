//! Helper macros and functions for CPU tensor operations

// ============================================================================
// DType Dispatch Macro
// ============================================================================

/// Macro for dtype dispatch to typed kernel calls
///
/// This macro matches on dtype and executes the code block with the appropriate type.
/// Usage: `dispatch_dtype!(dtype, T => { code using T }, "op_name")`
///
/// F16 and BF16 are supported when the "f16" feature is enabled.
/// Without it, these types return `UnsupportedDType` error.
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            DType::F64 => {
                type $T = f64;
                $body
            }
            DType::F32 => {
                type $T = f32;
                $body
            }
            DType::F16 => {
                #[cfg(feature = "f16")]
                {
                    type $T = half::f16;
                    $body
                }
                #[cfg(not(feature = "f16"))]
                {
                    return Err(Error::unsupported_dtype($dtype, $error_op));
                }
            }
            DType::BF16 => {
                #[cfg(feature = "f16")]
                {
                    type $T = half::bf16;
                    $body
                }
                #[cfg(not(feature = "f16"))]
                {
                    return Err(Error::unsupported_dtype($dtype, $error_op));
                }
            }
            DType::I64 => {
                type $T = i64;
                $body
            }
            DType::I32 => {
                type $T = i32;
                $body
            }
            DType::I16 => {
                type $T = i16;
                $body
            }
            DType::I8 => {
                type $T = i8;
                $body
            }
            DType::U64 => {
                type $T = u64;
                $body
            }
            DType::U32 => {
                type $T = u32;
                $body
            }
            DType::U16 => {
                type $T = u16;
                $body
            }
            DType::U8 => {
                type $T = u8;
                $body
            }
        }
    };
}

pub(crate) use dispatch_dtype;

// ============================================================================
// Helper Functions
// ============================================================================

/// A raw pointer wrapper that is `Send` + `Sync`.
///
/// # Safety
/// The caller must guarantee that the pointed-to data outlives every task
/// holding the pointer and that tasks write to disjoint regions.
pub(crate) struct SendPtr<T>(pub(crate) *mut T);

impl<T> Clone for SendPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SendPtr<T> {}

unsafe impl<T> Send for SendPtr<T> {}
unsafe impl<T> Sync for SendPtr<T> {}

impl<T> SendPtr<T> {
    pub(crate) fn as_ptr(self) -> *mut T {
        self.0
    }
}
