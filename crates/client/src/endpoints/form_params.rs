//! Form parameter building for endpoint modules.
//!
//! [`form_params!`] pushes `(&'static str, String)` pairs onto a vector,
//! skipping optional strings that are absent or blank.
//!
//! ```ignore
//! let mut form: Vec<(&str, String)> = vec![];
//! form_params! { form =>
//!     "name" => required alert.name,
//!     "is_scheduled" => required 1,
//!     "cron_schedule" => nonempty alert.cron_schedule,
//! }
//! ```

/// Build form parameters with `&'static str` keys.
///
/// # Syntax Patterns
///
/// - `key => required expr` - always includes `expr.to_string()`
/// - `key => nonempty expr` - for `Option<String>`, includes if Some and not blank
#[macro_export]
macro_rules! form_params {
    // Base case: no more parameters
    ($vec:ident =>) => {};

    // Required field
    ($vec:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $vec.push(($key, $val.to_string()));
        $crate::form_params!($vec => $($rest)*);
    };

    // Option<String> that is dropped when empty or whitespace
    ($vec:ident => $key:literal => nonempty $val:expr, $($rest:tt)*) => {
        if let Some(v) = $val.as_deref() {
            if !v.trim().is_empty() {
                $vec.push(($key, v.to_string()));
            }
        }
        $crate::form_params!($vec => $($rest)*);
    };
}
