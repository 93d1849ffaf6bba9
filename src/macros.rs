// Logging shims. These forward to the `log` crate when the `logging` feature
// is enabled and compile to nothing otherwise, so the rest of the crate never
// needs to sprinkle `cfg` attributes around its log statements.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
