use humansize_core::{SizeError, UnitBase, approximate_size, approximate_size_with};

/// Position of the output's suffix on the unit scale (0 = plain bytes).
fn tier(formatted: &str, base: UnitBase) -> usize {
    let suffix = formatted.rsplit(' ').next().unwrap();
    if suffix == "B" {
        return 0;
    }
    base.suffixes().iter().position(|s| *s == suffix).unwrap() + 1
}

#[test]
fn below_one_multiple_is_plain_bytes() {
    for base in [UnitBase::Binary, UnitBase::Decimal] {
        for size in 0..i128::from(base.multiple()) {
            assert_eq!(
                approximate_size_with(size, base).unwrap(),
                format!("{} B", size)
            );
        }
    }
}

#[test]
fn tier_never_decreases() {
    for base in [UnitBase::Binary, UnitBase::Decimal] {
        let limit = i128::from(base.multiple()).pow(9);
        let mut size: i128 = 1;
        let mut previous = 0;
        while size < limit {
            for sample in [size - 1, size, size + size / 3] {
                if sample >= limit {
                    continue;
                }
                let current = tier(&approximate_size_with(sample, base).unwrap(), base);
                assert!(
                    current >= previous,
                    "tier dropped at {} ({:?}): {} < {}",
                    sample,
                    base,
                    current,
                    previous
                );
                previous = current;
            }
            size *= 2;
        }
    }
}

#[test]
fn overflow_beyond_yotta() {
    let limit = 1000i128.pow(9);
    for size in [limit - 1, limit, limit + 1, limit * 1000] {
        assert!(matches!(
            approximate_size(size, false),
            Err(SizeError::Overflow { .. })
        ));
    }
    assert!(matches!(
        approximate_size(i128::MAX, true),
        Err(SizeError::Overflow { .. })
    ));
}

#[test]
fn just_below_a_tier_rounds_into_it() {
    assert_eq!(
        approximate_size(1_000_000_000_000_000_000i128 - 1, false).unwrap(),
        "1.0 EB"
    );
    // Small enough that the quotient keeps its fraction: stays in TB.
    assert_eq!(
        approximate_size(1_000_000_000_000_000i64 - 1, false).unwrap(),
        "1000.0 TB"
    );
    assert_eq!(approximate_size((1u64 << 60) - 1, true).unwrap(), "1.0 EiB");
}

#[test]
fn negative_is_rejected_for_both_bases() {
    for base1024 in [true, false] {
        let err = approximate_size(-5, base1024).unwrap_err();
        assert_eq!(err.size(), -5);
        assert_eq!(err.to_string(), "number must be non-negative");
    }
}

#[test]
fn demo_samples() {
    assert_eq!(approximate_size(42, false).unwrap(), "42 B");
    assert_eq!(approximate_size(42, true).unwrap(), "42 B");
    assert_eq!(
        approximate_size(1_000_000_000_000i64, false).unwrap(),
        "1.0 TB"
    );
    assert_eq!(
        approximate_size(1_000_000_000_000i64, true).unwrap(),
        "931.3 GiB"
    );
}
