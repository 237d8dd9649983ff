//! Collection guards
//!
//! Shape checks over slices: emptiness, element count, and absent elements.

use crate::core::error::{CollectionKind, GuardError, GuardResult};

/// Fails with [`Collection(Empty)`] when the slice has zero elements.
///
/// [`Collection(Empty)`]: crate::core::error::CollectionKind::Empty
///
/// # Examples
///
/// ```
/// use orion_guard::guards::collection::not_empty;
///
/// assert!(not_empty(&[1, 2, 3], "ids").is_ok());
/// assert!(not_empty::<i32>(&[], "ids").is_err());
/// ```
pub fn not_empty<T>(items: &[T], parameter: &str) -> GuardResult<()> {
    if items.is_empty() {
        return Err(GuardError::collection(
            CollectionKind::Empty,
            parameter,
            format!("`{parameter}` must not be empty"),
        ));
    }
    Ok(())
}

/// Fails with [`Collection(ExceedsCount)`] when the element count exceeds
/// `max`.
///
/// [`Collection(ExceedsCount)`]: crate::core::error::CollectionKind::ExceedsCount
pub fn max_count<T>(items: &[T], max: usize, parameter: &str) -> GuardResult<()> {
    if items.len() > max {
        return Err(GuardError::collection(
            CollectionKind::ExceedsCount,
            parameter,
            format!("`{parameter}` must not contain more than {max} items"),
        ));
    }
    Ok(())
}

/// Fails with [`Collection(ContainsNone)`] when any element is absent.
///
/// [`Collection(ContainsNone)`]: crate::core::error::CollectionKind::ContainsNone
pub fn all_present<T>(items: &[Option<T>], parameter: &str) -> GuardResult<()> {
    if items.iter().any(Option::is_none) {
        return Err(GuardError::collection(
            CollectionKind::ContainsNone,
            parameter,
            format!("`{parameter}` must not contain absent items"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GuardErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_empty() {
        assert!(not_empty(&[1], "items").is_ok());
        let error = not_empty::<i32>(&[], "items").unwrap_err();
        assert_eq!(
            error.kind(),
            &GuardErrorKind::Collection(CollectionKind::Empty)
        );
    }

    #[test]
    fn test_max_count_boundary() {
        let items = [1, 2, 3];
        assert!(max_count(&items, 3, "items").is_ok());
        assert!(max_count(&items, 2, "items").is_err());
    }

    #[test]
    fn test_five_items_with_max_three_exceeds_count() {
        let items = [1, 2, 3, 4, 5];
        let error = max_count(&items, 3, "items").unwrap_err();
        assert_eq!(
            error.kind(),
            &GuardErrorKind::Collection(CollectionKind::ExceedsCount)
        );
        assert_eq!(error.parameter(), "items");
    }

    #[test]
    fn test_all_present() {
        assert!(all_present(&[Some(1), Some(2)], "items").is_ok());
        let error = all_present(&[Some(1), None, Some(3)], "items").unwrap_err();
        assert_eq!(
            error.kind(),
            &GuardErrorKind::Collection(CollectionKind::ContainsNone)
        );
    }
}
