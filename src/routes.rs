//! The site's pages and where they are written.
//!
//! | Route | URL | Output file |
//! |-------|-----|-------------|
//! | `Home` | `/` | `index.html` |
//! | `About` | `/about/` | `about/index.html` |
//! | `Work` | `/work/` | `work/index.html` |
//! | `Project(slug)` | `/work/{slug}/` | `work/{slug}/index.html` |
//! | `Contact` | `/contact/` | `contact/index.html` |
//! | `NotFound` | any other path | `404.html` |
//!
//! The route list is derived from the catalog, so adding a project to
//! `projects.toml` is enough to publish its page.

use crate::catalog::Catalog;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Work,
    Project(String),
    Contact,
    NotFound,
}

impl Route {
    /// Parse a URL path without consulting the catalog.
    ///
    /// Trailing slashes, a trailing `index.html`, a query, and a fragment
    /// are ignored. Anything unrecognized is [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["work"] => Route::Work,
            ["work", slug] => Route::Project((*slug).to_string()),
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Parse a URL path and check project slugs against the catalog. An
    /// unknown slug resolves to the not-found page.
    pub fn resolve(path: &str, catalog: &Catalog) -> Route {
        match Route::parse(path) {
            Route::Project(slug) if catalog.by_slug(&slug).is_none() => Route::NotFound,
            route => route,
        }
    }

    /// Path without trailing slash, as used for active-link matching.
    pub fn pathname(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Work => "/work".to_string(),
            Route::Project(slug) => format!("/work/{}", slug),
            Route::Contact => "/contact".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Link target for this page.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::NotFound => "/404.html".to_string(),
            other => format!("{}/", other.pathname()),
        }
    }

    /// File path relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            Route::About => PathBuf::from("about/index.html"),
            Route::Work => PathBuf::from("work/index.html"),
            Route::Project(slug) => PathBuf::from("work").join(slug).join("index.html"),
            Route::Contact => PathBuf::from("contact/index.html"),
            Route::NotFound => PathBuf::from("404.html"),
        }
    }
}

/// Every page of the site, in build order.
pub fn site_routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes = vec![Route::Home, Route::About, Route::Work];
    routes.extend(catalog.iter().map(|p| Route::Project(p.slug.clone())));
    routes.push(Route::Contact);
    routes.push(Route::NotFound);
    routes
}

/// An entry of the main navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub pathname: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        if self.pathname == "/" {
            "/".to_string()
        } else {
            format!("{}/", self.pathname)
        }
    }

    /// Active when the current page is this link, or any page under
    /// `/work` for the Work link.
    pub fn is_active(&self, current: &Route) -> bool {
        let pathname = current.pathname();
        pathname == self.pathname
            || (self.pathname == "/work" && pathname.starts_with("/work"))
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        pathname: "/",
        label: "Home",
    },
    NavLink {
        pathname: "/work",
        label: "Work",
    },
    NavLink {
        pathname: "/about",
        label: "About",
    },
    NavLink {
        pathname: "/contact",
        label: "Contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_catalog;

    #[test]
    fn parse_static_pages() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/index.html"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/work/index.html"), Route::Work);
        assert_eq!(Route::parse("/contact?from=nav"), Route::Contact);
    }

    #[test]
    fn parse_project_page() {
        assert_eq!(
            Route::parse("/work/raanana-jazz-festival/"),
            Route::Project("raanana-jazz-festival".into())
        );
        assert_eq!(
            Route::parse("/work/raanana-jazz-festival#lb-x-1"),
            Route::Project("raanana-jazz-festival".into())
        );
    }

    #[test]
    fn parse_unknown_is_not_found() {
        assert_eq!(Route::parse("/blog"), Route::NotFound);
        assert_eq!(Route::parse("/work/a/b"), Route::NotFound);
    }

    #[test]
    fn resolve_unknown_slug_is_not_found() {
        let catalog = sample_catalog();
        assert_eq!(
            Route::resolve("/work/no-such-project/", &catalog),
            Route::NotFound
        );
        assert_eq!(
            Route::resolve("/work/posters-for-jazz-performances/", &catalog),
            Route::Project("posters-for-jazz-performances".into())
        );
    }

    #[test]
    fn output_paths() {
        assert_eq!(Route::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(
            Route::Project("x".into()).output_path(),
            PathBuf::from("work/x/index.html")
        );
        assert_eq!(Route::NotFound.output_path(), PathBuf::from("404.html"));
    }

    #[test]
    fn href_parses_back_to_route() {
        for route in site_routes(&sample_catalog()) {
            if route != Route::NotFound {
                assert_eq!(Route::parse(&route.href()), route);
            }
        }
    }

    #[test]
    fn site_routes_cover_every_project() {
        let catalog = sample_catalog();
        let routes = site_routes(&catalog);
        assert_eq!(routes.len(), 5 + catalog.len());
        for project in catalog.iter() {
            assert!(routes.contains(&Route::Project(project.slug.clone())));
        }
        assert_eq!(routes.last(), Some(&Route::NotFound));
    }

    #[test]
    fn work_link_active_on_project_pages() {
        let work = NAV_LINKS[1];
        assert!(work.is_active(&Route::Work));
        assert!(work.is_active(&Route::Project("x".into())));
        assert!(!work.is_active(&Route::About));
    }

    #[test]
    fn home_link_active_only_on_home() {
        let home = NAV_LINKS[0];
        assert!(home.is_active(&Route::Home));
        assert!(!home.is_active(&Route::Contact));
        assert!(!NAV_LINKS[2].is_active(&Route::Home));
    }

    #[test]
    fn nav_hrefs() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["/", "/work/", "/about/", "/contact/"]);
    }
}
