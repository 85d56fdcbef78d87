use crate::ranking::{ResultEntry, words_for_coverage};
use std::io::{self, Write};

fn shown(entries: &[ResultEntry], top: Option<usize>) -> &[ResultEntry] {
    match top {
        Some(n) => &entries[..n.min(entries.len())],
        None => entries,
    }
}

/// One `rank\tword\tfrequency\tpercentage\tcumulative` line per entry, rank
/// starting at 1. `top` limits what is printed, not what was counted.
pub fn write_tsv<W: Write>(writer: &mut W, entries: &[ResultEntry], top: Option<usize>) -> io::Result<()> {
    for (i, e) in shown(entries, top).iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{:.2}\t{:.2}",
            i + 1,
            e.word,
            e.frequency,
            e.percentage,
            e.cumulative_comprehension
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    writer: &mut W,
    entries: &[ResultEntry],
    top: Option<usize>,
    pretty: bool,
) -> serde_json::Result<()> {
    let entries = shown(entries, top);
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, entries)?;
    } else {
        serde_json::to_writer(&mut *writer, entries)?;
    }
    writeln!(writer).map_err(serde_json::Error::io)
}

/// For each target percentage, the number of words needed to reach it.
pub fn write_coverage<W: Write>(writer: &mut W, entries: &[ResultEntry], targets: &[f64]) -> io::Result<()> {
    for &target in targets {
        match words_for_coverage(entries, target) {
            Some(n) => writeln!(writer, "{target:>6.2}% comprehension: {n} words")?,
            None => writeln!(writer, "{target:>6.2}% comprehension: unreachable")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze_tokens;

    fn sample() -> Vec<ResultEntry> {
        analyze_tokens(["sol", "luna", "sol", "estrella", "luna", "sol"])
    }

    #[test]
    fn tsv_lines() {
        let mut out = Vec::new();
        write_tsv(&mut out, &sample(), None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1\tsol\t3\t50.00\t50.00\n2\tluna\t2\t33.33\t83.33\n3\testrella\t1\t16.67\t100.00\n"
        );
    }

    #[test]
    fn top_only_limits_output() {
        let mut out = Vec::new();
        write_tsv(&mut out, &sample(), Some(1)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\tsol\t3\t50.00\t50.00\n");

        let mut out = Vec::new();
        write_tsv(&mut out, &sample(), Some(10)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn rank_column_leads_each_line() {
        let mut out = Vec::new();
        write_tsv(&mut out, &analyze_tokens(["sol", "luna", "sol"]), None).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("1\tsol\t2\t"));
        assert!(out.contains("\n2\tluna\t1\t33.33\t100.00\n"));
    }

    #[test]
    fn json_array() {
        let mut out = Vec::new();
        write_json(&mut out, &sample(), Some(2), false).unwrap();
        let parsed: Vec<ResultEntry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, sample()[..2].to_vec());
    }

    #[test]
    fn coverage_lines() {
        let mut out = Vec::new();
        write_coverage(&mut out, &sample(), &[80.0, 101.0]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            " 80.00% comprehension: 2 words\n101.00% comprehension: unreachable\n"
        );
    }
}
