//! Module for small helpers shared by the derivation entities
pub mod test_helper;

use crate::error::{OptResult, OptransError};

/// Render a resolved quantity for display. Quantities which cannot be resolved are shown as `undefined`.
pub(crate) fn format_quantity(value: &OptResult<f64>) -> String {
    value
        .as_ref()
        .map_or_else(|_| String::from("undefined"), ToString::to_string)
}

/// Map an [`OptransError::UnresolvedQuantity`] to `None` while passing through all other errors.
pub(crate) fn optional<T>(value: OptResult<T>) -> OptResult<Option<T>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(OptransError::UnresolvedQuantity(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn format() {
        assert_eq!(format_quantity(&Ok(0.25)), "0.25");
        assert_eq!(
            format_quantity(&Err(OptransError::UnresolvedQuantity("x".into()))),
            "undefined"
        );
    }
    #[test]
    fn optional_value() {
        assert_eq!(optional(Ok(1.0)), Ok(Some(1.0)));
        assert_eq!(
            optional::<f64>(Err(OptransError::UnresolvedQuantity("x".into()))),
            Ok(None)
        );
        assert_eq!(
            optional::<f64>(Err(OptransError::InvalidParameter("x".into()))),
            Err(OptransError::InvalidParameter("x".into()))
        );
    }
}
