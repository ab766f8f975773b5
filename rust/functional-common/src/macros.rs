/// Macro for unwrapping a required `Option` argument.
///
/// - If `$arg` is `Some(v)`, the macro yields `v`.
/// - If `$arg` is `None`, the enclosing function returns an `InvalidArgument`
///   error named after the argument expression, converted with `?` into the
///   function's error type.
///
/// The enclosing function *must* return a `Result` whose error type implements
/// `From<functional_common::Error>`.
#[macro_export]
macro_rules! require_arg {
    ($arg:expr) => {
        $crate::result::require_arg($arg, stringify!($arg))?
    };
}
