// force-align/src/symmetrizer_test.rs

#[cfg(test)]
mod tests {
    use crate::symmetrizer::Heuristic;
    use clap::ValueEnum;

    #[test]
    fn test_argument_strings_match_atools() {
        assert_eq!(Heuristic::Intersect.as_str(), "intersect");
        assert_eq!(Heuristic::Union.as_str(), "union");
        assert_eq!(Heuristic::GrowDiag.as_str(), "grow-diag");
        assert_eq!(Heuristic::GrowDiagFinal.as_str(), "grow-diag-final");
        assert_eq!(Heuristic::GrowDiagFinalAnd.as_str(), "grow-diag-final-and");
    }

    #[test]
    fn test_default_is_grow_diag_final_and() {
        assert_eq!(Heuristic::default(), Heuristic::GrowDiagFinalAnd);
    }

    #[test]
    fn test_cli_names_round_trip() {
        // The clap value names are the same strings atools expects.
        for heuristic in Heuristic::value_variants() {
            let parsed = Heuristic::from_str(heuristic.as_str(), false).unwrap();
            assert_eq!(parsed, *heuristic);
        }
    }
}
