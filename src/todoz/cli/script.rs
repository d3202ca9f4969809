use std::io::BufRead;
use todoz::api::TodozApi;
use todoz::error::Result;
use todoz::request::handle_line;
use todoz::store::DataStore;
use tracing::debug;

use super::print::print_envelope;

/// Run one JSON request per line. Blank lines and `#` comments are skipped;
/// a bad line yields an error envelope and the run carries on.
pub(crate) fn run<S: DataStore, R: BufRead>(
    api: &mut TodozApi<S>,
    input: R,
    pretty: bool,
) -> Result<usize> {
    let mut handled = 0;
    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        debug!(line = lineno + 1, "read request line");
        print_envelope(&handle_line(api, trimmed), pretty);
        handled += 1;
    }
    Ok(handled)
}
