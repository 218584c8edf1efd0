use humansize_core::approximate_size;

/// Sizes shown by `humansize demo`.
pub(crate) const SAMPLE_SIZES: [i64; 3] = [42, 1_000_000_000_000, -5];

/// Render one demo line: both bases on success, the error message otherwise.
pub(crate) fn demo_line(size: i64) -> String {
    let rendered = approximate_size(size, false)
        .and_then(|decimal| approximate_size(size, true).map(|binary| (decimal, binary)));
    match rendered {
        Ok((decimal, binary)) => format!("{size} bytes = {decimal} or {binary}"),
        Err(e) => e.to_string(),
    }
}

pub(crate) fn run_demo() {
    for size in SAMPLE_SIZES {
        log::info!("{}", demo_line(size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lines() {
        let lines: Vec<String> = SAMPLE_SIZES.iter().map(|&s| demo_line(s)).collect();
        assert_eq!(
            lines,
            [
                "42 bytes = 42 B or 42 B",
                "1000000000000 bytes = 1.0 TB or 931.3 GiB",
                "number must be non-negative",
            ]
        );
    }
}
