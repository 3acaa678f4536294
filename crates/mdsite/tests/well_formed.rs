//! Re-parse rendered output with an HTML5 parser and check the structure
//! survives intact.

use mdsite::markdown_to_html;
use scraper::{Html, Selector};

fn parse(markdown: &str) -> Html {
    Html::parse_fragment(&markdown_to_html(markdown).unwrap())
}

fn select<'a>(html: &'a Html, selector: &str) -> Vec<scraper::ElementRef<'a>> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector).collect()
}

#[test]
fn test_block_structure_reparses() {
    let html = parse("# Title\n\n- one\n- two\n\n1. a\n2. b\n3. c\n\n> quoted");

    assert_eq!(select(&html, "div > h1").len(), 1);
    assert_eq!(select(&html, "div > ul > li").len(), 2);
    assert_eq!(select(&html, "div > ol > li").len(), 3);
    assert_eq!(select(&html, "div > blockquote").len(), 1);
}

#[test]
fn test_inline_elements_reparse() {
    let html = parse("A **b** _i_ `c` [l](/x) ![alt](/img.png)");

    let paragraph = select(&html, "div > p");
    assert_eq!(paragraph.len(), 1);
    assert_eq!(select(&html, "p > b").len(), 1);
    assert_eq!(select(&html, "p > i").len(), 1);
    assert_eq!(select(&html, "p > code").len(), 1);

    let links = select(&html, "p > a");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].value().attr("href"), Some("/x"));

    let images = select(&html, "p > img");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].value().attr("src"), Some("/img.png"));
    assert_eq!(images[0].value().attr("alt"), Some("alt"));
}

#[test]
fn test_code_block_text_reparses() {
    let html = parse("```\nfn main() {}\n```");
    let code = select(&html, "pre > code");
    assert_eq!(code.len(), 1);
    assert_eq!(code[0].text().collect::<String>(), "fn main() {}");
}
