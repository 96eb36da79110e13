use indicatif::ProgressStyle;

/// Spinner styles for the describe phase.
///
/// One running style plus the two finish states, kept together so every
/// bar added to the `MultiProgress` renders consistently.
pub struct Styles {
    pub run: ProgressStyle,
    pub ok: ProgressStyle,
    pub fail: ProgressStyle,
}

/// Build the spinner styles used while describing checkouts.
///
/// A yellow braille spinner while a job runs, a green check mark when its
/// checkout has been described, a red cross when describing failed; each
/// followed by the job message (`{wide_msg}`).
pub fn styles() -> Styles {
    Styles {
        run: ProgressStyle::with_template("\x1b[33m{spinner}\x1b[0m {wide_msg}")
            .unwrap()
            .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]),
        ok: ProgressStyle::with_template("\x1b[32m✔\x1b[0m {wide_msg}").unwrap(),
        fail: ProgressStyle::with_template("\x1b[31m✘\x1b[0m {wide_msg}").unwrap(),
    }
}
