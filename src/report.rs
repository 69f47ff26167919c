use crate::qoi::grammar::{QoiHeader, TagStats};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub fn print_file_report(path: &str, header: &QoiHeader, stats: &TagStats) {
    println!("Statistics for QOI file '{path}'");
    println!("  size:       {}x{}", header.width(), header.height());
    println!("  channels:   {}", header.channel_label());
    println!("  colorspace: {}", header.colorspace_label());

    print_tag_table(stats);
}

pub fn print_batch_report(stats: &TagStats) {
    println!("Statistics for QOI batch");

    print_tag_table(stats);
}

fn bold_cell(s: &str) -> Cell {
    Cell::new(s).add_attribute(Attribute::Bold)
}

fn count_row(label: &str, count: u32, total: u32) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(count).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}%", percentage(count, total))).set_alignment(CellAlignment::Right),
    ]
}

fn print_tag_table(stats: &TagStats) {
    let mut table = Table::new();
    table.set_header(vec![bold_cell("Tag"), bold_cell("Count"), bold_cell("Share")]);

    table.add_row(count_row("total", stats.total, stats.total));
    table.add_row(count_row("rgb", stats.rgb, stats.total));
    table.add_row(count_row("rgba", stats.rgba, stats.total));
    table.add_row(count_row("index", stats.index, stats.total));
    table.add_row(count_row("diff", stats.diff, stats.total));
    table.add_row(count_row("luma", stats.luma, stats.total));
    table.add_row(count_row("run", stats.run, stats.total));

    println!("{table}");
    println!("  avg. run:   {} pixels\n", stats.average_run_length());
}

/// A report over an empty stream renders as 0.00% rather than NaN.
fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_percentage_guards_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(4, 4), 100.0);
    }

    #[test]
    fn test_average_run_guards_zero_runs() {
        let stats = TagStats::default();
        assert_eq!(stats.average_run_length(), 0);

        let stats = TagStats {
            run: 2,
            run_pxls: 63,
            ..Default::default()
        };
        assert_eq!(stats.average_run_length(), 31);
    }
}
