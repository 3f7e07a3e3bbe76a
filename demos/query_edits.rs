use uri_edit::{FilterMode, Modifier, SortMode, Url};

fn main() {
    let url = Url::parse("https://shop.example.com/search?q=shoes&page=2&utm_source=mail&size=10&size=9")
        .expect("Failed to parse URL");

    // Drop tracking parameters
    let clean = url.filter_query(FilterMode::Key, |entry| {
        !entry.key().is_some_and(|key| key.starts_with("utm_"))
    });
    println!("Clean: {}", clean.href());

    // Replace the page, keep everything else in place
    let next = clean.merge_query("page=3");
    println!("Next page: {}", next.href());

    // Sort keys for a stable cache key
    let sorted = next.sort_query_offsets(SortMode::Natural);
    println!("Sorted: {}", sorted.href());

    for (key, value) in sorted.query().iter() {
        println!("  {key} = {}", value.unwrap_or("<no value>"));
    }

    // Host label edits
    let regional = sorted
        .replace_label(0, "eu")
        .expect("Failed to replace label");
    println!("Regional: {}", regional.href());
}
