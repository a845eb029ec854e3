//! Property tests for path resolution.

#![cfg(unix)]

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use idlc::infrastructure::PathResolver;

fn relative_path() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        4 => proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ];
    proptest::collection::vec(segment, 1..=6).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolving never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,128}") {
        let _ = PathResolver::with_working_dir("/work").resolve(Path::new(&s));
    }

    /// PROPERTY: Resolving an already resolved path returns it unchanged.
    #[test]
    fn property_resolution_is_idempotent(reference in relative_path()) {
        let resolver = PathResolver::with_working_dir("/work/project");

        let once = resolver.resolve(Path::new(&reference)).unwrap();
        let twice = resolver.resolve(once.path()).unwrap();

        prop_assert_eq!(once.path(), twice.path());
        prop_assert_eq!(once.url(), twice.url());
    }

    /// PROPERTY: A path and its file URL resolve to the same location.
    #[test]
    fn property_url_and_path_agree(reference in relative_path()) {
        let resolver = PathResolver::with_working_dir("/work/project");

        let by_path = resolver.resolve(Path::new(&reference)).unwrap();
        let url = PathBuf::from(by_path.url().as_str());
        let by_url = resolver.resolve(&url).unwrap();

        prop_assert_eq!(by_path.path(), by_url.path());
        prop_assert_eq!(by_path.url(), by_url.url());
    }

    /// PROPERTY: Resolved paths are absolute and free of `.`/`..` segments.
    #[test]
    fn property_resolved_paths_are_normal(reference in relative_path()) {
        let location = PathResolver::with_working_dir("/work/project")
            .resolve(Path::new(&reference))
            .unwrap();

        prop_assert!(location.path().is_absolute());
        for component in location.path().components() {
            prop_assert!(!matches!(
                component,
                std::path::Component::CurDir | std::path::Component::ParentDir
            ));
        }
    }
}
