// tests/resolve_properties.rs

use gitter::paths::{resolve, HOME_MARKER};
use proptest::prelude::*;

proptest! {
    #[test]
    fn paths_without_leading_marker_are_unchanged(
        path in "[^~][a-zA-Z0-9_./~-]{0,40}",
        home in "/[a-z]{1,12}(/[a-z]{1,12}){0,2}",
    ) {
        prop_assert_eq!(resolve(&path, &home), path);
    }

    #[test]
    fn leading_marker_becomes_home(
        rest in "(/[a-zA-Z0-9_.~-]{1,12}){0,4}",
        home in "/[a-z]{1,12}(/[a-z]{1,12}){0,2}",
    ) {
        let path = format!("{HOME_MARKER}{rest}");
        let resolved = resolve(&path, &home);

        prop_assert!(resolved.starts_with(&home));
        prop_assert_eq!(&resolved[home.len()..], rest.as_str());
    }
}
