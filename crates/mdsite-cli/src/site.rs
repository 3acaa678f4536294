//! Static asset copying and page generation.

use anyhow::{bail, Context, Result};
use mdsite::MarkdownService;
use std::fs;
use std::path::{Path, PathBuf};

use crate::template::{apply_basepath, render_template};

/// Outcome of a content walk
#[derive(Debug, Default)]
pub struct BuildReport {
    pub generated: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Replace `output_dir` with a fresh copy of `static_dir`
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<()> {
    if !static_dir.is_dir() {
        bail!("static directory not found: {}", static_dir.display());
    }

    if output_dir.exists() {
        log::debug!("removing {}", output_dir.display());
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("failed to remove {}", output_dir.display()))?;
    }

    copy_dir(static_dir, output_dir)
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to).with_context(|| format!("failed to create {}", to.display()))?;

    for entry in sorted_entries(from)? {
        let dest = to.join(entry.file_name().unwrap_or_default());
        if entry.is_dir() {
            copy_dir(&entry, &dest)?;
        } else {
            fs::copy(&entry, &dest).with_context(|| {
                format!("failed to copy {} to {}", entry.display(), dest.display())
            })?;
            log::info!("copied {} -> {}", entry.display(), dest.display());
        }
    }

    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list {}", dir.display()))?;
    entries.sort();
    Ok(entries)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Builds pages from Markdown sources and a shared template
#[derive(Debug, Clone)]
pub struct SiteGenerator {
    service: MarkdownService,
    basepath: String,
}

impl SiteGenerator {
    pub fn new(service: MarkdownService, basepath: impl Into<String>) -> Self {
        Self {
            service,
            basepath: basepath.into(),
        }
    }

    /// Compile one Markdown file into `dest_path` using `template`
    pub fn generate_page(&self, markdown_path: &Path, template: &str, dest_path: &Path) -> Result<()> {
        log::info!(
            "generating page {} -> {}",
            markdown_path.display(),
            dest_path.display()
        );

        let markdown = fs::read_to_string(markdown_path)
            .with_context(|| format!("failed to read {}", markdown_path.display()))?;
        let markdown = normalize_newlines(&markdown);
        let page = self
            .service
            .render_page(&markdown)
            .with_context(|| format!("failed to compile {}", markdown_path.display()))?;

        let html = apply_basepath(&render_template(template, &page), &self.basepath);

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(dest_path, html)
            .with_context(|| format!("failed to write {}", dest_path.display()))?;

        Ok(())
    }

    /// Mirror `content_dir` into `dest_dir`, turning every `.md` file into `.html`.
    ///
    /// Page failures are logged and collected in the report; only a missing
    /// content directory or unreadable template aborts the walk.
    pub fn generate_pages_recursive(
        &self,
        content_dir: &Path,
        template_path: &Path,
        dest_dir: &Path,
    ) -> Result<BuildReport> {
        if !content_dir.is_dir() {
            bail!("content directory not found: {}", content_dir.display());
        }

        let template = fs::read_to_string(template_path)
            .with_context(|| format!("failed to read template {}", template_path.display()))?;

        let mut report = BuildReport::default();
        self.walk(content_dir, &template, dest_dir, &mut report)?;
        Ok(report)
    }

    fn walk(&self, dir: &Path, template: &str, dest_dir: &Path, report: &mut BuildReport) -> Result<()> {
        for entry in sorted_entries(dir)? {
            let name = entry.file_name().unwrap_or_default();

            if entry.is_dir() {
                self.walk(&entry, template, &dest_dir.join(name), report)?;
                continue;
            }
            if !is_markdown(&entry) {
                continue;
            }

            let dest = dest_dir.join(name).with_extension("html");
            match self.generate_page(&entry, template, &dest) {
                Ok(()) => report.generated.push(dest),
                Err(err) => {
                    log::error!("{err:#}");
                    report.failed.push((entry, format!("{err:#}")));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdsite::PageOptions;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{{ Title }}</title><body>{{ Content }}</body>";

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_copy_static_replaces_output() {
        let tmp = TempDir::new().unwrap();
        let static_dir = tmp.path().join("static");
        let output = tmp.path().join("public");

        write(&static_dir.join("index.css"), "body {}");
        write(&static_dir.join("images/cat.png"), "png");
        write(&output.join("stale.html"), "old");

        copy_static(&static_dir, &output).unwrap();

        assert_eq!(fs::read_to_string(output.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(output.join("images/cat.png")).unwrap(), "png");
        assert!(!output.join("stale.html").exists());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let tmp = TempDir::new().unwrap();
        let result = copy_static(&tmp.path().join("missing"), &tmp.path().join("public"));
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_page() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("index.md");
        let dest = tmp.path().join("out/nested/index.html");
        write(&source, "# Home\n\n[about](/about)");

        let generator = SiteGenerator::new(MarkdownService::new(), "/site/");
        generator.generate_page(&source, TEMPLATE, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<title>Home</title><body><div><h1>Home</h1><p><a href=\"/site/about\">about</a></p></div></body>"
        );
    }

    #[test]
    fn test_generate_page_crlf_source() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("index.md");
        let dest = tmp.path().join("index.html");
        write(&source, "# Title\r\n\r\nHello **world**\r\n");

        let generator = SiteGenerator::new(MarkdownService::new(), "/");
        generator.generate_page(&source, "{{ Content }}", &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<div><h1>Title</h1><p>Hello <b>world</b></p></div>"
        );
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\n\r\nb\rc\n"), "a\n\nb\nc\n");
    }

    #[test]
    fn test_generate_pages_recursive() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        let template = tmp.path().join("template.html");
        let output = tmp.path().join("public");

        write(&template, TEMPLATE);
        write(&content.join("index.md"), "# Home");
        write(&content.join("blog/post.MD"), "# Post\n\nbody");
        write(&content.join("blog/notes.txt"), "ignored");

        let generator = SiteGenerator::new(MarkdownService::new(), "/");
        let report = generator
            .generate_pages_recursive(&content, &template, &output)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.generated.len(), 2);
        assert_eq!(
            fs::read_to_string(output.join("blog/post.html")).unwrap(),
            "<title>Post</title><body><div><h1>Post</h1><p>body</p></div></body>"
        );
        assert!(output.join("index.html").exists());
        assert!(!output.join("blog/notes.txt").exists());
        assert!(!output.join("blog/notes.html").exists());
    }

    #[test]
    fn test_failed_page_does_not_stop_walk() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        let template = tmp.path().join("template.html");
        let output = tmp.path().join("public");

        write(&template, TEMPLATE);
        write(&content.join("a.md"), "# A\n\nbroken *emphasis");
        write(&content.join("b.md"), "no title here");
        write(&content.join("c.md"), "# C");

        let generator = SiteGenerator::new(MarkdownService::new(), "/");
        let report = generator
            .generate_pages_recursive(&content, &template, &output)
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].0, content.join("a.md"));
        assert_eq!(report.generated, vec![output.join("c.html")]);
        assert!(!output.join("a.html").exists());
    }

    #[test]
    fn test_default_title_for_untitled_pages() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        let template = tmp.path().join("template.html");
        let output = tmp.path().join("public");

        write(&template, "{{ Title }}");
        write(&content.join("untitled.md"), "just text");

        let service = MarkdownService::with_options(PageOptions {
            default_title: Some("Untitled".to_string()),
        });
        let report = SiteGenerator::new(service, "/")
            .generate_pages_recursive(&content, &template, &output)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(fs::read_to_string(output.join("untitled.html")).unwrap(), "Untitled");
    }

    #[test]
    fn test_missing_content_dir() {
        let tmp = TempDir::new().unwrap();
        let template = tmp.path().join("template.html");
        write(&template, TEMPLATE);

        let generator = SiteGenerator::new(MarkdownService::new(), "/");
        assert!(generator
            .generate_pages_recursive(&tmp.path().join("nope"), &template, &tmp.path().join("out"))
            .is_err());
    }
}
