//! Turning parsed mock data into icon download tasks.
//!
//! Only absolute HTTP(S) icon references become tasks. The target filename
//! is `<domain>.ico`, where the domain comes either from a `/favicon/<domain>`
//! proxy path or from the host of the site's own URL.

use crate::mockdata::MockData;

/// Path segment used by third-party favicon proxies: everything after the
/// last occurrence names the domain the icon belongs to.
const FAVICON_SEGMENT: &str = "/favicon/";

/// One icon to fetch and where to put it. Ephemeral, rebuilt every run.
#[derive(Debug, Clone)]
pub struct IconTask {
    pub url: String,
    pub domain: String,
    /// `<domain>.ico`; deterministic, so sites sharing a domain share a file.
    pub filename: String,
    pub site_name: String,
    pub site_url: String,
}

/// Collects tasks in category-then-site order.
pub fn collect_icon_tasks(data: &MockData) -> Vec<IconTask> {
    let mut tasks = Vec::new();
    for category in &data.categories {
        for site in &category.sites {
            if !site.icon.starts_with("http") {
                continue;
            }
            let domain = derive_domain(&site.icon, &site.url);
            tasks.push(IconTask {
                url: site.icon.clone(),
                filename: format!("{domain}.ico"),
                domain,
                site_name: site.name.clone(),
                site_url: site.url.clone(),
            });
        }
    }
    tasks
}

/// Favicon-proxy URLs carry the domain in the path; otherwise fall back to
/// the host of the site URL. No well-formedness validation: an unparseable
/// site URL yields an empty domain (and a filename of just `.ico`).
fn derive_domain(icon_url: &str, site_url: &str) -> String {
    if icon_url.contains(FAVICON_SEGMENT) {
        return icon_url
            .split(FAVICON_SEGMENT)
            .last()
            .unwrap_or_default()
            .to_string();
    }
    url::Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mockdata::{Category, Site};

    fn site(name: &str, url: &str, icon: &str) -> Site {
        Site {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }

    fn data_with(sites: Vec<Site>) -> MockData {
        MockData {
            categories: vec![Category { sites }],
        }
    }

    #[test]
    fn only_http_icons_become_tasks() {
        let data = data_with(vec![
            site("A", "https://a.test", "https://a.test/favicon.ico"),
            site("B", "https://b.test", "/local/path.png"),
            site("C", "https://c.test", ""),
            site("D", "https://d.test", "http://d.test/icon.png"),
        ]);
        let tasks = collect_icon_tasks(&data);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].site_name, "A");
        assert_eq!(tasks[1].site_name, "D");
    }

    #[test]
    fn order_follows_categories_then_sites() {
        let data = MockData {
            categories: vec![
                Category {
                    sites: vec![
                        site("one", "https://one.test", "https://one.test/f.ico"),
                        site("two", "https://two.test", "https://two.test/f.ico"),
                    ],
                },
                Category {
                    sites: vec![site("three", "https://three.test", "https://three.test/f.ico")],
                },
            ],
        };
        let names: Vec<_> = collect_icon_tasks(&data)
            .into_iter()
            .map(|t| t.site_name)
            .collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn favicon_proxy_path_names_the_domain() {
        let data = data_with(vec![site(
            "S",
            "https://somewhere.else",
            "https://icon.example.com/favicon/sub.example.org",
        )]);
        let tasks = collect_icon_tasks(&data);
        assert_eq!(tasks[0].domain, "sub.example.org");
        assert_eq!(tasks[0].filename, "sub.example.org.ico");
    }

    #[test]
    fn plain_icon_url_falls_back_to_site_host() {
        let data = data_with(vec![site(
            "S",
            "https://target.example.com/page",
            "https://cdn.example.com/logo.png",
        )]);
        let tasks = collect_icon_tasks(&data);
        assert_eq!(tasks[0].domain, "target.example.com");
        assert_eq!(tasks[0].filename, "target.example.com.ico");
    }

    #[test]
    fn unparseable_site_url_yields_bare_ico_filename() {
        let data = data_with(vec![site("S", "", "https://cdn.example.com/logo.png")]);
        let tasks = collect_icon_tasks(&data);
        assert_eq!(tasks[0].domain, "");
        assert_eq!(tasks[0].filename, ".ico");
    }
}
