//! Integration tests for the route table.

use vistas_client::router::{self, View, ROUTES};

#[test]
fn home_resolves_to_home_view() {
    let route = router::resolve("/").unwrap();
    assert_eq!(route.name, "HomeView");
    assert_eq!(route.view, View::Home);
}

#[test]
fn vista1_resolves_to_first_view() {
    let route = router::resolve("/vista1").unwrap();
    assert_eq!(route.name, "FirstView");
    assert_eq!(route.view, View::First);
}

#[test]
fn vista2_resolves_to_second_view() {
    let route = router::resolve("/vista2").unwrap();
    assert_eq!(route.name, "SecondView");
    assert_eq!(route.view, View::Second);
}

#[test]
fn unknown_paths_resolve_to_none() {
    for path in ["/vista3", "/home", "/vista1/extra", "/VISTA1", " /", ""] {
        assert!(router::resolve(path).is_none(), "{path:?} should not match");
    }
}

#[test]
fn resolution_is_exact_match_not_prefix_match() {
    // "/" is a prefix of every path; only the exact path may hit it.
    assert!(router::resolve("/anything").is_none());
}

#[test]
fn every_table_entry_resolves_to_itself() {
    for entry in &ROUTES {
        let resolved = router::resolve(entry.path).unwrap();
        assert_eq!(resolved, entry);
        let by_name = router::find_by_name(entry.name).unwrap();
        assert_eq!(by_name, entry);
    }
}
