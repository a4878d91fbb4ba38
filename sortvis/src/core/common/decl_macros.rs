// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each function.
///
/// ```
/// use sortvis::{CommonResult, throws};
///
/// fn greet() -> CommonResult<()> {
///     throws!({
///         println!("hello");
///     });
/// }
///
/// assert!(greet().is_ok());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
