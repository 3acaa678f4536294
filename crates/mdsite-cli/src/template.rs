//! Page templating and base-path rewriting.

use mdsite::Page;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fill every title and content placeholder in the template
pub fn render_template(template: &str, page: &Page) -> String {
    template
        .replace(TITLE_PLACEHOLDER, &page.title)
        .replace(CONTENT_PLACEHOLDER, &page.content)
}

/// Prefix root-relative `href="/` and `src="/` attributes with the base path
pub fn apply_basepath(html: &str, basepath: &str) -> String {
    if basepath.is_empty() || basepath == "/" {
        return html.to_string();
    }

    let base = if basepath.ends_with('/') {
        basepath.to_string()
    } else {
        format!("{basepath}/")
    };

    html.replace("href=\"/", &format!("href=\"{base}"))
        .replace("src=\"/", &format!("src=\"{base}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page {
            title: "Hello".to_string(),
            content: "<div><p>Body</p></div>".to_string(),
        }
    }

    #[test]
    fn test_render_template() {
        let template = "<title>{{ Title }}</title><h1>{{ Title }}</h1><main>{{ Content }}</main>";
        assert_eq!(
            render_template(template, &page()),
            "<title>Hello</title><h1>Hello</h1><main><div><p>Body</p></div></main>"
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        assert_eq!(render_template("<html></html>", &page()), "<html></html>");
    }

    #[test]
    fn test_apply_basepath() {
        let html = r#"<a href="/about">A</a><img src="/cat.png"><a href="https://x.com">X</a>"#;
        assert_eq!(
            apply_basepath(html, "/blog/"),
            r#"<a href="/blog/about">A</a><img src="/blog/cat.png"><a href="https://x.com">X</a>"#
        );
    }

    #[test]
    fn test_apply_basepath_adds_trailing_slash() {
        assert_eq!(
            apply_basepath(r#"<a href="/x">x</a>"#, "/docs"),
            r#"<a href="/docs/x">x</a>"#
        );
    }

    #[test]
    fn test_root_basepath_is_noop() {
        let html = r#"<a href="/x">x</a>"#;
        assert_eq!(apply_basepath(html, "/"), html);
    }
}
