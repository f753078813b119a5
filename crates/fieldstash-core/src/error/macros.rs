//! Error macros for fieldstash

/// Macro for returning a corrupt payload error
#[macro_export]
macro_rules! bail_corrupt {
    ($reason:expr) => {
        return Err($crate::error::StashError::corrupt($reason))
    };
}

/// Macro for returning an unsupported schema error
#[macro_export]
macro_rules! bail_unsupported {
    ($schema:expr, $enabled:expr) => {
        return Err($crate::error::StashError::unsupported_schema(
            $schema, $enabled,
        ))
    };
}
