// =============================================================================
// Signal Scoring Module
// =============================================================================
//
// Rule-derived verdicts over computed indicators and fundamentals. Both
// scorers count satisfied conditions (0..=6) and map the count — plus a few
// overriding bands — onto a closed set of verdict categories. No freeform
// text originates here.

pub mod fundamental;
pub mod technical;
