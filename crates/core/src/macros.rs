// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the bulkrun crates.
//!
//! - [`simple_display!`]: `Display` for enums whose variants print as fixed words
//! - [`setters!`]: chained setters for builder-style structs

/// Implement `Display` by mapping each variant to a string literal.
///
/// ```ignore
/// crate::simple_display! {
///     ResultStatus {
///         Success => "SUCCESS",
///         Failure => "FAILURE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Expand to `fn field(mut self, v) -> Self` setters inside an `impl` block.
///
/// `set` fields take `T`; `option` fields are `Option<T>` set to
/// `Some(v.into())`.
///
/// ```ignore
/// impl FakeEnvironment {
///     bulkrun_core::setters! {
///         set { production_host: bool }
///         option { working_jobs_dir: PathBuf }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(set {
            $( $set_field:ident : $set_ty:ty ),* $(,)?
        })?
        $(option {
            $( $opt_field:ident : $opt_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $set_field(mut self, v: $set_ty) -> Self {
                self.$set_field = v;
                self
            }
        )*)?

        $($(
            pub fn $opt_field(mut self, v: impl Into<$opt_ty>) -> Self {
                self.$opt_field = Some(v.into());
                self
            }
        )*)?
    };
}
