/// Like the `panic!` macro, but used to indicate corrupted allocator
/// metadata or a foreign pointer passed where one of ours was expected.
#[macro_export]
macro_rules! bug {
    ($($arg:tt)*) => (panic!("{}", format_args!($($arg)*)));
}
