fn main() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    // Release builds carry the templates inside the binary; debug builds read
    // them from disk through the autoreloader.
    if profile == "release" {
        minijinja_embed::embed_templates!("templates");
    } else {
        println!("cargo:info=Build: Skipping template embedding for debug build.");
    }
}
