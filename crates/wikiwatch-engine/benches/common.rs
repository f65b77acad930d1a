// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_feed_markup(items: usize) -> String {
    let base = r#"... that the <a href="./Eiffel_Tower" title="Eiffel Tower">Eiffel Tower</a> was <b>originally</b> intended to stand for <i>only 20&nbsp;years</i>? <span class="x">More</span> "#;
    base.repeat(items)
}

#[allow(dead_code)]
pub fn generate_summary(sentences: usize) -> String {
    let base = "The Eiffel Tower is a wrought-iron lattice tower on the Champ de Mars in Paris, France. ";
    base.repeat(sentences)
}

#[allow(dead_code)]
pub fn generate_titles(count: usize) -> Vec<String> {
    let mut titles: Vec<String> = (0..count).map(|i| format!("Article number {i}")).collect();
    titles.extend(
        ["Paris", "France", "Champ de Mars", "Eiffel Tower", "Mars"]
            .iter()
            .map(|s| s.to_string()),
    );
    titles
}
