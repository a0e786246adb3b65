//! Alignment parsing and interval mapping tests

use ferro_txmap::align::ops_to_string;
use ferro_txmap::{
    build_tx_ops, parse_align_ops, AlignOp, ExonRecord, Interval, IntervalMapper, IntervalPair,
    Strand, TxMapError,
};

fn make_indel_mapper() -> IntervalMapper {
    // Structure: 20bp match + 5bp insertion + 15bp match + 10bp deletion + 10bp match
    IntervalMapper::from_ops_str("20M5I15M10D10M").unwrap()
}

#[test]
fn test_block_table() {
    let mapper = make_indel_mapper();
    let blocks = mapper.blocks();
    assert_eq!(blocks.len(), 5);

    let ref_spans: Vec<(i64, i64)> = blocks
        .iter()
        .map(|b| (b.ref_iv().start_i(), b.ref_iv().end_i()))
        .collect();
    let tgt_spans: Vec<(i64, i64)> = blocks
        .iter()
        .map(|b| (b.tgt_iv().start_i(), b.tgt_iv().end_i()))
        .collect();

    assert_eq!(
        ref_spans,
        vec![(0, 20), (20, 20), (20, 35), (35, 45), (45, 55)]
    );
    assert_eq!(
        tgt_spans,
        vec![(0, 20), (20, 25), (25, 40), (40, 40), (40, 50)]
    );
}

#[test]
fn test_mapping_across_indels() {
    let mapper = make_indel_mapper();

    // An end inside the deletion clips to the deletion's target point
    assert_eq!(mapper.map_ref_to_tgt(34, 45).unwrap(), (39, 40));
    // The final match block shifts by the net indel length
    assert_eq!(mapper.map_ref_to_tgt(45, 55).unwrap(), (40, 50));
    // Inverse of the clipped mapping folds the deletion back to a point
    assert_eq!(mapper.map_tgt_to_ref(39, 40).unwrap(), (34, 35));
    // A query inside the insertion collapses on the reference axis
    assert_eq!(mapper.map_tgt_to_ref(21, 24).unwrap(), (20, 20));
}

#[test]
fn test_boundary_enters_later_block() {
    let mapper = make_indel_mapper();

    // Position 20 ends block 0 and starts block 1; mapping resolves into
    // the entering block on both axes
    assert_eq!(mapper.map_ref_to_tgt(20, 30).unwrap(), (25, 35));
    assert_eq!(mapper.map_tgt_to_ref(25, 35).unwrap(), (20, 30));
    assert_eq!(mapper.map_ref_to_tgt(20, 20).unwrap(), (25, 25));
}

#[test]
fn test_mismatch_blocks_map_like_matches() {
    let mapper = IntervalMapper::from_ops_str("5M2X3M").unwrap();
    assert_eq!(mapper.ref_len(), 10);
    assert_eq!(mapper.tgt_len(), 10);
    assert_eq!(mapper.map_ref_to_tgt(5, 7).unwrap(), (5, 7));
    assert_eq!(mapper.map_ref_to_tgt(0, 10).unwrap(), (0, 10));
}

#[test]
fn test_skip_behaves_like_deletion() {
    let mapper = IntervalMapper::from_ops_str("10M5N10M").unwrap();
    assert_eq!(mapper.ref_len(), 25);
    assert_eq!(mapper.tgt_len(), 20);
    // Spanning the skip drops its bases from the target
    assert_eq!(mapper.map_ref_to_tgt(5, 20).unwrap(), (5, 15));
    // Wholly inside the skip collapses to the boundary
    assert_eq!(mapper.map_ref_to_tgt(11, 14).unwrap(), (10, 10));
}

#[test]
fn test_queries_outside_axis_fail() {
    let mapper = make_indel_mapper();
    assert!(mapper.map_ref_to_tgt(-5, 0).is_err());
    assert!(mapper.map_ref_to_tgt(0, 56).is_err());
    assert!(mapper.map_tgt_to_ref(-1, -1).is_err());
    assert!(mapper.map_tgt_to_ref(30, 20).is_err());
}

#[test]
fn test_parse_rejects_malformed_strings() {
    // Trailing length with no opcode
    let err = parse_align_ops("20M5").unwrap_err();
    assert_eq!(
        err,
        TxMapError::Format {
            pos: 3,
            msg: "Length '5' has no opcode".to_string(),
        }
    );

    // Opcode with no length
    assert!(matches!(
        parse_align_ops("M").unwrap_err(),
        TxMapError::Format { pos: 0, .. }
    ));

    // Zero-length operation
    assert!(parse_align_ops("0M").is_err());

    // Unknown opcode; the offset points at the opcode byte
    assert!(matches!(
        parse_align_ops("5M3Q").unwrap_err(),
        TxMapError::Format { pos: 3, .. }
    ));

    // Length too large for i64
    assert!(parse_align_ops("99999999999999999999M").is_err());
}

#[test]
fn test_empty_string_parses_to_no_ops() {
    assert_eq!(parse_align_ops("").unwrap(), Vec::<AlignOp>::new());
}

#[test]
fn test_ops_survive_display_round_trip() {
    let ops = parse_align_ops("484M3D2275M").unwrap();
    assert_eq!(ops_to_string(&ops), "484M3D2275M");
    assert_eq!(parse_align_ops(&ops_to_string(&ops)).unwrap(), ops);
}

#[test]
fn test_interval_pair_length_rule() {
    let same = IntervalPair::new(
        Interval::new(0, 10).unwrap(),
        Interval::new(5, 15).unwrap(),
    );
    assert!(same.is_ok());

    let one_empty = IntervalPair::new(
        Interval::new(0, 10).unwrap(),
        Interval::new(5, 5).unwrap(),
    );
    assert!(one_empty.is_ok());

    let mismatched = IntervalPair::new(
        Interval::new(0, 10).unwrap(),
        Interval::new(0, 7).unwrap(),
    );
    assert!(matches!(
        mismatched.unwrap_err(),
        TxMapError::InvalidInterval { .. }
    ));
}

#[test]
fn test_exon_ops_assemble_with_intron_skips() {
    let exons = vec![
        ExonRecord::new(1000, 1100, "100M"),
        ExonRecord::new(1200, 1350, "150M"),
        ExonRecord::new(1500, 1600, "100M"),
    ];
    let ops = build_tx_ops(&exons, Strand::Plus).unwrap();
    assert_eq!(ops_to_string(&ops), "100M100N150M150N100M");

    let mapper = IntervalMapper::from_ops(&ops).unwrap();
    assert_eq!(mapper.ref_len(), 600);
    assert_eq!(mapper.tgt_len(), 350);
    // Exon 2 maps past the first intron
    assert_eq!(mapper.map_ref_to_tgt(200, 210).unwrap(), (100, 110));
}

#[test]
fn test_minus_strand_reverses_ops_within_exons() {
    let exons = vec![
        ExonRecord::new(100, 109, "5M1I4M"),
        ExonRecord::new(119, 128, "2M1I7M"),
    ];

    let plus = build_tx_ops(&exons, Strand::Plus).unwrap();
    assert_eq!(ops_to_string(&plus), "5M1I4M10N2M1I7M");

    // Exon order stays genomic; only each exon's operations reverse
    let minus = build_tx_ops(&exons, Strand::Minus).unwrap();
    assert_eq!(ops_to_string(&minus), "4M1I5M10N7M1I2M");
}

#[test]
fn test_hand_built_blocks_must_be_contiguous() {
    let pairs = vec![
        IntervalPair::new(
            Interval::new(0, 10).unwrap(),
            Interval::new(0, 10).unwrap(),
        )
        .unwrap(),
        IntervalPair::new(
            Interval::new(15, 20).unwrap(),
            Interval::new(10, 15).unwrap(),
        )
        .unwrap(),
    ];
    assert!(IntervalMapper::new(pairs).is_err());
}
