//! Tests for bidirectional route definitions and the fallback router.

use typed_route::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
enum Route {
    Home,
    About,
    User(i64),
    UserPost(i64, String),
    Document(Uuid),
    Files(Vec<String>),
    NotFound,
}

fn routes() -> RouteDefinition<Route> {
    RouteDefinition::one_of(vec![
        build(segment::end(), |()| Route::Home, |route| {
            matches!(route, Route::Home).then_some(())
        }),
        build(segment::literal("about"), |()| Route::About, |route| {
            matches!(route, Route::About).then_some(())
        }),
        build(
            segment::literal("user").then(segment::int()),
            Route::User,
            |route| match route {
                Route::User(id) => Some(*id),
                _ => None,
            },
        ),
        build(
            segment::literal("user")
                .then(segment::int())
                .skip(segment::literal("posts"))
                .and(segment::slug()),
            |(id, slug)| Route::UserPost(id, slug),
            |route| match route {
                Route::UserPost(id, slug) => Some((*id, slug.clone())),
                _ => None,
            },
        ),
        build(
            segment::literal("docs").then(segment::uuid()),
            Route::Document,
            |route| match route {
                Route::Document(id) => Some(*id),
                _ => None,
            },
        ),
        build(
            segment::literal("files").then(Segment::new(parser::rest(), |segments: &Vec<String>| {
                segments.clone()
            })),
            Route::Files,
            |route| match route {
                Route::Files(segments) => Some(segments.clone()),
                _ => None,
            },
        ),
    ])
}

#[test]
fn test_user_round_trip() {
    let routes = routes();
    let url = routes.serialize(&Route::User(42)).unwrap();
    assert_eq!(url, "/user/42");
    assert_eq!(routes.parse(&Url::parse(&url)), Some(Route::User(42)));
}

#[test]
fn test_round_trip_for_every_route_kind() {
    let routes = routes();
    let test_cases = vec![
        (Route::Home, "/"),
        (Route::About, "/about"),
        (Route::User(-5), "/user/-5"),
        (Route::User(0), "/user/0"),
        (Route::UserPost(7, "hello-world".to_string()), "/user/7/posts/hello-world"),
        (
            Route::Document(Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap()),
            "/docs/67e55044-10b1-426f-9247-bb680e5fe0c8",
        ),
        (
            Route::Files(vec!["a".to_string(), "b.txt".to_string()]),
            "/files/a/b.txt",
        ),
    ];

    for (route, expected) in test_cases {
        let url = routes.serialize(&route).unwrap();
        assert_eq!(url, expected, "Serialization failed for: {:?}", route);
        assert_eq!(routes.parse_str(&url), Some(route.clone()), "Round trip failed for: {:?}", route);
    }
}

#[test]
fn test_unserializable_route() {
    assert_eq!(routes().serialize(&Route::NotFound), None);
}

#[test]
fn test_non_matching_urls() {
    let routes = routes();
    let inputs = vec![
        "/user",
        "/user/abc",
        "/user/42/extra",
        "/user/42/posts",
        "/user/42/posts/Not_A_Slug",
        "/docs/123",
        "/About",
        "/nowhere",
    ];

    for input in inputs {
        assert_eq!(routes.parse_str(input), None, "Unexpected match for: {}", input);
    }
}

#[test]
fn test_normalized_inputs_match() {
    let routes = routes();
    assert_eq!(routes.parse_str("//user//42//"), Some(Route::User(42)));
    assert_eq!(routes.parse_str("/about?ref=nav#team"), Some(Route::About));
    assert_eq!(routes.parse_str(""), Some(Route::Home));
}

#[test]
fn test_serialization_first_match_wins() {
    let legacy_first = RouteDefinition::one_of(vec![
        build(segment::literal("old-about"), |()| Route::About, |route| {
            matches!(route, Route::About).then_some(())
        }),
        routes(),
    ]);

    assert_eq!(legacy_first.serialize(&Route::About).as_deref(), Some("/old-about"));
    assert_eq!(legacy_first.parse_str("/about"), Some(Route::About));
    assert_eq!(legacy_first.parse_str("/old-about"), Some(Route::About));
}

#[test]
fn test_router_fallbacks() {
    let router = Router::new(RouterConfig {
        definition: routes(),
        not_found: Route::NotFound,
    });

    assert_eq!(router.parse_str("/user/3"), Route::User(3));
    assert_eq!(router.parse_str("/user/3/extra"), Route::NotFound);
    assert_eq!(router.serialize(&Route::User(3)), "/user/3");
    assert_eq!(router.serialize(&Route::NotFound), "/");
}

#[test]
fn test_router_shared_across_threads() {
    let router = Router::new(RouterConfig {
        definition: routes(),
        not_found: Route::NotFound,
    });

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let router = router.clone();
            std::thread::spawn(move || {
                let route = router.parse_str(&format!("/user/{}", id));
                router.serialize(&route)
            })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("/user/{}", id));
    }
}
