use afl::fuzz;
use qoistat::qoi::{grammar::TagStats, QoiDecoder};

fn main() {
    fuzz!(|data: &[u8]| {
        let mut decoder = QoiDecoder::new(data);

        if let Ok(header) = decoder.decode_header() {
            let mut stats = TagStats::default();
            let _ = decoder.scan_opcodes(&header, &mut stats);
        }
    });
}
