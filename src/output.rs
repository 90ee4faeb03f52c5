use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `LOKVANI_QUIET=1` turns off banners and decorative CLI lines.
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("LOKVANI_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
