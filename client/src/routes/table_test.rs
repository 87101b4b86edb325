use super::*;

// =============================================================
// Declared table
// =============================================================

#[test]
fn declared_table_is_valid() {
    assert_eq!(validate(&ROUTES), Ok(()));
}

#[test]
fn paths_are_pairwise_distinct() {
    for (i, a) in ROUTES.iter().enumerate() {
        for (j, b) in ROUTES.iter().enumerate() {
            if i != j {
                assert_ne!(a.path, b.path);
            }
        }
    }
}

#[test]
fn names_are_pairwise_distinct() {
    for (i, a) in ROUTES.iter().enumerate() {
        for (j, b) in ROUTES.iter().enumerate() {
            if i != j {
                assert_ne!(a.name, b.name);
            }
        }
    }
}

#[test]
fn table_order_matches_name_order() {
    let names: Vec<RouteName> = ROUTES.iter().map(|r| r.name).collect();
    assert_eq!(names, RouteName::ALL.to_vec());
}

#[test]
fn declared_paths_and_names() {
    let pairs: Vec<(&str, &str)> = ROUTES.iter().map(|r| (r.path, r.name.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            ("/", "Home"),
            ("/svg-animations", "SvgAnimations"),
            ("/gsap", "GsapExamples"),
            ("/canvas", "CanvasExamples"),
            ("/threejs", "ThreeJsExamples"),
        ]
    );
}

#[test]
fn base_segment_matches_base_path() {
    assert_eq!(BASE_PATH, format!("/{BASE_SEGMENT}"));
}

#[test]
fn segment_matches_path() {
    for route in &ROUTES {
        assert_eq!(format!("/{}", route.name.segment()), route.path);
    }
}

// =============================================================
// validate
// =============================================================

fn descriptor(path: &'static str, name: RouteName) -> RouteDescriptor {
    RouteDescriptor { path, name, label: "x", component: crate::views::home }
}

#[test]
fn validate_rejects_duplicate_path() {
    let table = [descriptor("/a", RouteName::Home), descriptor("/a", RouteName::GsapExamples)];
    assert_eq!(validate(&table), Err(RouteTableError::DuplicatePath("/a")));
}

#[test]
fn validate_rejects_duplicate_name() {
    let table = [descriptor("/a", RouteName::Home), descriptor("/b", RouteName::Home)];
    assert_eq!(validate(&table), Err(RouteTableError::DuplicateName(RouteName::Home)));
}

#[test]
fn validate_rejects_relative_path() {
    let table = [descriptor("gsap", RouteName::GsapExamples)];
    assert_eq!(validate(&table), Err(RouteTableError::RelativePath("gsap")));
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_path_finds_every_declared_route() {
    for route in &ROUTES {
        let found = resolve_path(route.path).map(|r| r.name);
        assert_eq!(found, Some(route.name));
    }
}

#[test]
fn resolve_path_tolerates_trailing_slash_query_and_fragment() {
    assert_eq!(resolve_path("/gsap/").map(|r| r.name), Some(RouteName::GsapExamples));
    assert_eq!(resolve_path("/canvas?demo=1").map(|r| r.name), Some(RouteName::CanvasExamples));
    assert_eq!(resolve_path("/threejs#scene").map(|r| r.name), Some(RouteName::ThreeJsExamples));
    assert_eq!(resolve_path("").map(|r| r.name), Some(RouteName::Home));
}

#[test]
fn resolve_path_is_case_sensitive() {
    assert!(resolve_path("/GSAP").is_none());
}

#[test]
fn resolve_path_rejects_undeclared_path() {
    assert!(resolve_path("/missing").is_none());
    assert!(resolve_path("/gsap/extra").is_none());
}

#[test]
fn strip_base_requires_segment_boundary() {
    assert_eq!(strip_base("/motion-gallery"), Some("/"));
    assert_eq!(strip_base("/motion-gallery/gsap"), Some("/gsap"));
    assert_eq!(strip_base("/motion-gallery?x=1"), Some("?x=1"));
    assert_eq!(strip_base("/motion-galleryx"), None);
    assert_eq!(strip_base("/gsap"), None);
}

#[test]
fn resolve_href_uses_base_prefix() {
    assert_eq!(resolve_href("/motion-gallery/").map(|r| r.name), Some(RouteName::Home));
    assert_eq!(
        resolve_href("/motion-gallery/svg-animations").map(|r| r.name),
        Some(RouteName::SvgAnimations)
    );
    assert!(resolve_href("/svg-animations").is_none());
}

#[test]
fn href_for_prefixes_base() {
    assert_eq!(href_for(RouteName::Home), "/motion-gallery");
    assert_eq!(href_for(RouteName::GsapExamples), "/motion-gallery/gsap");
}

#[test]
fn join_base_prefixes_app_relative_paths() {
    assert_eq!(join_base("/"), "/motion-gallery");
    assert_eq!(join_base(""), "/motion-gallery");
    assert_eq!(join_base("/gsap"), "/motion-gallery/gsap");
    assert_eq!(join_base("/canvas?demo=1"), "/motion-gallery/canvas?demo=1");
}

#[test]
fn href_for_round_trips_through_resolve_href() {
    for name in RouteName::ALL {
        assert_eq!(resolve_href(&href_for(name)).map(|r| r.name), Some(name));
    }
}

// =============================================================
// RouteName
// =============================================================

#[test]
fn route_name_parses_exact_names() {
    assert_eq!("ThreeJsExamples".parse::<RouteName>(), Ok(RouteName::ThreeJsExamples));
    assert_eq!(
        "threejs".parse::<RouteName>(),
        Err(RouteTableError::UnknownName("threejs".to_owned()))
    );
}

#[test]
fn route_name_serializes_as_plain_string() {
    let json = serde_json::to_string(&RouteName::SvgAnimations).unwrap();
    assert_eq!(json, "\"SvgAnimations\"");
    let back: RouteName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RouteName::SvgAnimations);
}
