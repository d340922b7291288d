pub mod d400_coverage;
