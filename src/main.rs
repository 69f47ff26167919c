use anyhow::{anyhow, bail, Context, Result};
#[cfg(feature = "time")]
use qoistat::util::event_log::{log_event, Event};
use qoistat::{
    qoi::{grammar::TagStats, QoiDecoder},
    report,
};
#[cfg(feature = "time")]
use std::time::Instant;

const BATCH_PROGRAM_NAME: &str = "qoistatbatch";

/// Trailing path component of the invocation string, either separator.
fn program_name(arg0: &str) -> &str {
    arg0.rsplit(['/', '\\']).next().unwrap_or(arg0)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args();
    let arg0 = args.next().unwrap_or_default();
    let batch_mode = program_name(&arg0) == BATCH_PROGRAM_NAME;

    let files: Vec<String> = args.collect();

    if files.is_empty() {
        bail!("USAGE: {} [FILE]...", program_name(&arg0));
    }

    #[cfg(feature = "time")]
    let start = Instant::now();

    let mut stats = TagStats::default();

    for path in &files {
        let content =
            std::fs::read(path).map_err(|err| anyhow!("could not read file '{path}': {err}"))?;

        let mut decoder = QoiDecoder::new(&content);

        #[cfg(feature = "time")]
        let a = Instant::now();
        let header = decoder
            .decode_header()
            .with_context(|| format!("'{path}' is not a valid QOI file"))?;
        #[cfg(feature = "time")]
        log_event(path, Event::DecodeHeader, Some(a.elapsed()));

        if !batch_mode {
            stats = TagStats::default();
        }

        #[cfg(feature = "time")]
        let b = Instant::now();
        decoder
            .scan_opcodes(&header, &mut stats)
            .with_context(|| format!("failed to scan opcode stream of '{path}'"))?;
        #[cfg(feature = "time")]
        log_event(path, Event::ScanOpcodes, Some(b.elapsed()));

        if !batch_mode {
            report::print_file_report(path, &header, &stats);
        }
    }

    if batch_mode {
        report::print_batch_report(&stats);
    }

    #[cfg(feature = "time")]
    log_event("", Event::TotalElapsed, Some(start.elapsed()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_program_name() {
        assert_eq!(program_name("/usr/local/bin/qoistatbatch"), "qoistatbatch");
        assert_eq!(program_name(r"C:\tools\qoistat.exe"), "qoistat.exe");
        assert_eq!(program_name("qoistat"), "qoistat");
        assert_eq!(program_name(""), "");
    }
}
