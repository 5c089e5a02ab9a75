use ice40ktool::pll::{ModeResult, PllCandidate, PllMode, PllSearcher};
use ice40ktool::rom::{address_width, encode, ByteImage, BANK_SIZE};
use proptest::prelude::*;

fn decode_init_bytes(verilog: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for line in verilog.lines().filter(|line| line.starts_with(".INIT_")) {
        let start = line.find("256'h").unwrap() + 5;
        let hex = &line[start..start + 64];
        for i in (0..hex.len()).step_by(2) {
            bytes.push(u8::from_str_radix(&hex[i..i + 2], 16).unwrap());
        }
    }
    bytes
}

fn check_mode(searcher: &PllSearcher, mode: PllMode, ref_hz: f64, desired_hz: f64) {
    let result = searcher.search_mode(mode);
    let candidates: Vec<PllCandidate> = mode
        .dividers()
        .map(|d| PllCandidate::evaluate(d, ref_hz, desired_hz))
        .collect();

    match result {
        ModeResult::Exact(found) => {
            let first = candidates.iter().find(|c| c.is_exact()).unwrap();
            assert_eq!(found.dividers, first.dividers);
        }
        ModeResult::Best(found) => {
            assert!(candidates.iter().all(|c| !c.is_exact()));
            assert!(candidates.iter().all(|c| c.distance >= found.distance));
            let first = candidates.iter().find(|c| c.distance == found.distance).unwrap();
            assert_eq!(found.dividers, first.dividers);
        }
    }
}

proptest! {
    #[test]
    fn bank_count_and_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2100)) {
        let image = ByteImage::new(&data);
        let banks = image.num_banks();
        prop_assert_eq!(banks, (data.len() + BANK_SIZE - 1) / BANK_SIZE);

        let verilog = encode(&data, "prop");
        let expected_width = format!("\tparameter addr_width = {};\n", address_width(banks));
        prop_assert!(verilog.contains(&expected_width));
        prop_assert_eq!(verilog.matches("SB_ROM512x8 #(").count(), banks);

        let decoded = decode_init_bytes(&verilog);
        prop_assert_eq!(decoded.len(), banks * BANK_SIZE);
        prop_assert_eq!(&decoded[..data.len()], &data[..]);
        prop_assert!(decoded[data.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn search_is_optimal_or_first_exact(
        ref_hz in 1_000i64..200_000_000,
        desired_hz in 1_000i64..600_000_000,
    ) {
        let (ref_hz, desired_hz) = (ref_hz as f64, desired_hz as f64);
        let searcher = PllSearcher::new(ref_hz, desired_hz);
        check_mode(&searcher, PllMode::NonSimple, ref_hz, desired_hz);
        check_mode(&searcher, PllMode::Simple, ref_hz, desired_hz);
    }

    #[test]
    fn reachable_targets_match_exactly(
        ref_mhz in 1i64..100,
        divr in 0u8..=15,
        divf in 0u8..=63,
    ) {
        // Any frequency the PLL can produce must be found, even when not integral.
        let ref_hz = (ref_mhz * 1_000_000) as f64;
        let desired_hz = ref_hz * f64::from(divf + 1) / f64::from(divr + 1);
        let result = PllSearcher::new(ref_hz, desired_hz).search_mode(PllMode::NonSimple);
        prop_assert!(result.is_exact());
    }
}
