use uri_edit::{Modifier, Url};

fn main() {
    // Parse a simple URL
    let url = Url::parse("https://example.com:8080/docs/guide/?lang=en#intro")
        .expect("Failed to parse URL");

    println!("URL: {}", url.href()); // https://example.com:8080/docs/guide/?lang=en#intro
    println!("Scheme: {}", url.scheme()); // https
    println!("Authority: {}", url.authority()); // example.com:8080
    println!("Path: {}", url.path()); // /docs/guide/
    println!("Query: {}", url.query()); // lang=en
    println!("Fragment: {}", url.fragment()); // intro

    // Every edit returns a new value
    let edited = url
        .append_path("install")
        .with_port(None)
        .expect("Failed to remove port");
    println!("Edited: {}", edited.href()); // https://example.com/docs/guide/install?lang=en#intro
    println!("Original: {}", url.href()); // unchanged

    // Resolve references against a base
    let base = Url::parse("http://a/b/c/d;p?q").expect("Failed to parse base");
    for reference in ["g", "../g", "//g", "?y", "#s"] {
        let target = base.resolve_str(reference).expect("Failed to resolve");
        println!("{reference:>5} -> {target}");
    }
}
