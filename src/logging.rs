// trace!/warn! forward to defmt or log, or vanish when neither feature is enabled.

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        pub(crate) use defmt::{trace, warn};
    } else if #[cfg(feature = "log")] {
        pub(crate) use log::{trace, warn};
    } else {
        macro_rules! trace {
            ($($arg:tt)*) => {{ let _ = ($($arg)*); }};
        }
        // `warn` can't be a local macro_rules name, it collides with the builtin attribute
        macro_rules! warn_noop {
            ($($arg:tt)*) => {{ let _ = ($($arg)*); }};
        }
        pub(crate) use trace;
        pub(crate) use warn_noop as warn;
    }
}
