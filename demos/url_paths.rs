//! Routing table keyed by URL path segments
use token_trie::TrieDictionary;
use url::Url;

fn segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|parts| {
            parts
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut routes: TrieDictionary<Vec<String>, &str> = TrieDictionary::new();

    let pages = [
        ("https://example.com/", "Home page"),
        ("https://example.com/about", "About us"),
        ("https://example.com/blog", "Blog index"),
        ("https://example.com/blog/first-post", "First blog post"),
        ("https://example.com/blog/second-post", "Second blog post"),
    ];
    for (address, title) in pages.iter() {
        routes.add(segments(&Url::parse(address)?), *title);
    }

    let post = Url::parse("https://example.com/blog/first-post")?;
    println!("{} -> {:?}", post, routes.try_get(&segments(&post)));

    println!("\nBlog section pages:");
    let blog = segments(&Url::parse("https://example.com/blog")?);
    for (path, title) in routes.view_prefix(&blog).iter() {
        println!("  /{} -> {}", path.join("/"), title);
    }

    let unknown = Url::parse("https://example.com/unknown")?;
    if let Err(err) = routes.get(&segments(&unknown)) {
        println!("\n{}: {}", unknown, err);
    }

    Ok(())
}
