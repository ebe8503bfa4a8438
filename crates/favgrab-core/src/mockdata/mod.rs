//! Mock-data extraction: locate the `export const mockData = { ... }`
//! assignment in a JS source file and parse the embedded object literal
//! into typed records.

mod extract;
mod model;

pub use extract::{extract_mock_data, ExtractError, MARKER};
pub use model::{Category, MockData, Site};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn extracts_js_literal() {
        let js = r#"
// navigation data
export const mockData = {
  categories: [
    {
      id: "dev-tools",
      name: "开发工具",
      order: 1,
      sites: [
        { id: 'github', name: "GitHub", url: "https://github.com", icon: "https://github.com/favicon.ico" },
        { name: "Local", url: "https://local.test", icon: "/icons/local.png", },
      ],
    },
  ],
};

export default mockData;
"#;
        let f = write_input(js);
        let data = extract_mock_data(f.path()).unwrap();
        assert_eq!(data.categories.len(), 1);
        let sites = &data.categories[0].sites;
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].name, "GitHub");
        assert_eq!(sites[0].icon, "https://github.com/favicon.ico");
        assert_eq!(sites[1].icon, "/icons/local.png");
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_the_scan() {
        let js = r#"export const mockData = {
  categories: [
    { sites: [ { name: "Curly {site}", url: "https://x.test", icon: "https://x.test/a}{b.png" } ] }
  ]
};"#;
        let f = write_input(js);
        let data = extract_mock_data(f.path()).unwrap();
        assert_eq!(data.categories[0].sites[0].icon, "https://x.test/a}{b.png");
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let err = extract_mock_data(std::path::Path::new("/no/such/mock_data.js")).unwrap_err();
        assert!(matches!(err, ExtractError::Missing(_)));
    }

    #[test]
    fn missing_marker_err() {
        let f = write_input("const otherData = { categories: [] };");
        let err = extract_mock_data(f.path()).unwrap_err();
        assert!(matches!(err, ExtractError::MarkerNotFound(_)));
    }

    #[test]
    fn unbalanced_literal_err() {
        let f = write_input("export const mockData = { categories: [ {");
        let err = extract_mock_data(f.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Unbalanced(_)));
    }

    #[test]
    fn structurally_invalid_literal_err() {
        let f = write_input("export const mockData = { categories: 1 2 3 };");
        let err = extract_mock_data(f.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Json(_)));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let f = write_input("export const mockData = { categories: [ { sites: [ {} ] } ] };");
        let data = extract_mock_data(f.path()).unwrap();
        let site = &data.categories[0].sites[0];
        assert!(site.name.is_empty());
        assert!(site.url.is_empty());
        assert!(site.icon.is_empty());
    }
}
