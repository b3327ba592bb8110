use std::io::{self, Write};
use std::sync::LazyLock;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER_ART: &str = r#"
      ┌─┐
      │O│        __  __  ___  _      ___  ___  ___  __  __
      └┬┘       |  \/  |/ _ \| |    / __|| __|/ _ \|  \/  |
    ┌─┐│┌─┐     | |\/| | (_) | |__ | (_ || _|| (_) | |\/| |
    │H├┘└┤H│     |_|  |_|\___/|____| \___||___|\___/|_|  |_|
    └─┘  └─┘
   ───────────────────────────────────────────────────────────
"#;

static BANNER_FOR_HELP: LazyLock<String> = LazyLock::new(|| format!("\n{BANNER_ART}"));

pub fn banner_for_help() -> &'static str {
    &BANNER_FOR_HELP
}

pub fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{BANNER_ART}");
    let _ = writeln!(
        stderr,
        "   Molecular Geometry Toolkit                         v{VERSION}"
    );
    let _ = writeln!(stderr);
}
