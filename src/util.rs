/// Log the message at error level and terminate the process.
///
/// Only for unrecoverable startup failures in the binaries.
#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        ::log::error!($($arg)*);
        ::std::process::exit(1)
    }};
}
