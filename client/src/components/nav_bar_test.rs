use super::*;

#[test]
fn exactly_one_link_is_active_on_a_declared_route() {
    for current in RouteName::ALL {
        let href = table::href_for(current);
        let active: Vec<RouteName> = RouteName::ALL.into_iter().filter(|n| is_active(&href, *n)).collect();
        assert_eq!(active, vec![current]);
    }
}

#[test]
fn home_link_is_active_with_trailing_slash() {
    assert!(is_active("/motion-gallery/", RouteName::Home));
    assert!(!is_active("/motion-gallery/", RouteName::GsapExamples));
}

#[test]
fn no_link_is_active_off_the_table() {
    for name in RouteName::ALL {
        assert!(!is_active("/motion-gallery/missing", name));
        assert!(!is_active("/", name));
    }
}

#[test]
fn link_class_marks_active_link() {
    assert_eq!(link_class(true), "nav-bar__link nav-bar__link--active");
    assert_eq!(link_class(false), "nav-bar__link");
}
