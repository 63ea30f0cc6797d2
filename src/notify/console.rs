//! Console notifier printing ANSI-colored lines.

use super::Notifier;

/// ANSI escape for yellow foreground.
const YELLOW: &str = "\x1b[33m";

/// ANSI escape for green foreground.
const GREEN: &str = "\x1b[32m";

/// ANSI escape for red foreground.
const RED: &str = "\x1b[31m";

/// ANSI escape resetting all attributes.
const RESET: &str = "\x1b[0m";

/// Notifier that prints one colored line per notice to stdout.
///
/// Warnings render yellow, successes green, failures red. Output interleaves
/// with the gallery rendering on the same stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        println!("{YELLOW}warning:{RESET} {message}");
    }

    fn success(&self, message: &str) {
        println!("{GREEN}success:{RESET} {message}");
    }

    fn failure(&self, message: &str) {
        println!("{RED}failure:{RESET} {message}");
    }
}
