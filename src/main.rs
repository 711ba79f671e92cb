//! `typed-route` demo: routes URLs given on the command line through a
//! sample application grammar and prints the matched route along with its
//! canonical URL.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use typed_route::{build, segment, RouteDefinition, Router, RouterConfig, Url};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "typed-route")]
#[command(about = "Parse URLs into typed routes and print their canonical form", long_about = None)]
struct Cli {
    /// URLs to route: paths like `/user/42?tab=posts` or absolute URLs
    #[arg(required = true)]
    urls: Vec<String>,

    /// Log parse decisions (`-v` for debug, `-vv` for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, PartialEq)]
enum AppRoute {
    Home,
    User(i64),
    UserPosts(i64),
    Article(String),
    Document(Uuid),
    NotFound,
}

fn app_router() -> Router<AppRoute> {
    let definition = RouteDefinition::one_of(vec![
        build(segment::end(), |()| AppRoute::Home, |route| {
            matches!(route, AppRoute::Home).then_some(())
        }),
        build(
            segment::literal("user").then(segment::int()),
            AppRoute::User,
            |route| match route {
                AppRoute::User(id) => Some(*id),
                _ => None,
            },
        ),
        build(
            segment::literal("user")
                .then(segment::int())
                .skip(segment::literal("posts")),
            AppRoute::UserPosts,
            |route| match route {
                AppRoute::UserPosts(id) => Some(*id),
                _ => None,
            },
        ),
        build(
            segment::literal("articles").then(segment::slug()),
            AppRoute::Article,
            |route| match route {
                AppRoute::Article(slug) => Some(slug.clone()),
                _ => None,
            },
        ),
        build(
            segment::literal("docs").then(segment::uuid()),
            AppRoute::Document,
            |route| match route {
                AppRoute::Document(id) => Some(*id),
                _ => None,
            },
        ),
    ]);

    Router::new(RouterConfig {
        definition,
        not_found: AppRoute::NotFound,
    })
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        1 => "typed_route=debug".into(),
        _ => "typed_route=trace".into(),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let router = app_router();
    tracing::debug!(count = cli.urls.len(), "routing urls");

    for raw in &cli.urls {
        let url = if raw.contains("://") {
            Url::from_absolute(raw)?
        } else {
            Url::parse(raw)
        };
        let route = router.parse(&url);
        println!("{} -> {:?} (canonical: {})", raw, route, router.serialize(&route));
    }

    Ok(())
}
